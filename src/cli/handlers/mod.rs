use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::logging;
use crate::model::{Filter, FilterCriteria, HelpdeskConfig, SortCriteria, TicketStore};
use crate::ops::view_ops::visible_tickets;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand. The global flags come from `cli`.
pub fn dispatch(command: Commands, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_stderr_logging();
    let json = cli.json;
    let config = config_io::load_config_from_env(cli.config.as_deref())?;

    match command {
        Commands::List(args) => {
            let store = startup_store(&config, cli.no_sample);
            cmd_list(&store, &args, json)
        }
        Commands::Staff => cmd_staff(&config, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The store every entry point starts from
pub fn startup_store(config: &HelpdeskConfig, no_sample: bool) -> TicketStore {
    if config.desk.sample_tickets && !no_sample {
        TicketStore::sample()
    } else {
        TicketStore::new()
    }
}

/// Build view criteria from `list` flags. Absent flags mean the dashboard defaults.
pub fn list_criteria(
    args: &ListArgs,
) -> Result<(FilterCriteria, SortCriteria), Box<dyn std::error::Error>> {
    let mut filter = FilterCriteria::default();
    if let Some(p) = &args.priority {
        filter.priority = Filter::parse(p)?;
    }
    if let Some(s) = &args.status {
        filter.status = Filter::parse(s)?;
    }
    if let Some(name) = &args.assigned_to {
        filter.assigned_to = Filter::parse(name)?;
    }
    let sort = match &args.sort {
        Some(s) => s.parse::<SortCriteria>()?,
        None => SortCriteria::default(),
    };
    Ok((filter, sort))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    store: &TicketStore,
    args: &ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (filter, sort) = list_criteria(args)?;
    let tickets = visible_tickets(store.tickets(), &filter, sort);
    tracing::debug!(shown = tickets.len(), total = store.len(), "list");

    if json {
        let out: Vec<TicketJson> = tickets.iter().map(|t| ticket_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if tickets.is_empty() {
        println!("No tickets");
    } else {
        for ticket in &tickets {
            println!("{}", format_ticket_line(ticket));
        }
    }
    Ok(())
}

fn cmd_staff(config: &HelpdeskConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.desk.staff)?);
    } else {
        for name in &config.desk.staff {
            println!("{}", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};
    use pretty_assertions::assert_eq;

    #[test]
    fn list_criteria_defaults() {
        let (filter, sort) = list_criteria(&ListArgs::default()).unwrap();
        assert_eq!(filter, FilterCriteria::default());
        assert_eq!(sort, SortCriteria::NEWEST_FIRST);
    }

    #[test]
    fn list_criteria_parses_flags() {
        let args = ListArgs {
            priority: Some("HIGH".into()),
            status: Some("in-progress".into()),
            assigned_to: Some("Jane Smith".into()),
            sort: Some("lowest".into()),
        };
        let (filter, sort) = list_criteria(&args).unwrap();
        assert_eq!(filter.priority, Filter::Only(Priority::High));
        assert_eq!(filter.status, Filter::Only(Status::InProgress));
        assert_eq!(filter.assigned_to, Filter::Only("Jane Smith".to_string()));
        assert_eq!(sort, SortCriteria::LOWEST_PRIORITY);
    }

    #[test]
    fn list_criteria_all_means_unfiltered() {
        let args = ListArgs {
            priority: Some("all".into()),
            assigned_to: Some("All".into()),
            ..Default::default()
        };
        let (filter, _) = list_criteria(&args).unwrap();
        assert!(!filter.is_active());
    }

    #[test]
    fn list_criteria_rejects_unknown_values() {
        let args = ListArgs {
            priority: Some("urgent".into()),
            ..Default::default()
        };
        let err = list_criteria(&args).unwrap_err();
        assert!(err.to_string().contains("invalid priority: urgent"));

        let args = ListArgs {
            sort: Some("sideways".into()),
            ..Default::default()
        };
        assert!(list_criteria(&args).is_err());
    }

    #[test]
    fn startup_store_respects_config_and_flag() {
        let mut config = HelpdeskConfig::default();
        assert_eq!(startup_store(&config, false).len(), 3);
        assert!(startup_store(&config, true).is_empty());
        config.desk.sample_tickets = false;
        assert!(startup_store(&config, false).is_empty());
    }
}
