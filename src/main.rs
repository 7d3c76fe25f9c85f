use clap::Parser;
use helpdesk::cli::commands::Cli;
use helpdesk::cli::handlers;
use helpdesk::io::{config_io, logging};
use helpdesk::tui::app::App;

fn main() {
    let mut cli = Cli::parse();

    let result = match cli.command.take() {
        // No subcommand → launch TUI
        None => run_dashboard(&cli),
        Some(command) => handlers::dispatch(command, &cli),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_dashboard(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // The dashboard owns the terminal, so logs only go to a file
    if let Some(path) = logging::log_file_from_env(cli.log_file.as_deref()) {
        logging::init_file_logging(&path)?;
    }
    let config = config_io::load_config_from_env(cli.config.as_deref())?;
    let store = handlers::startup_store(&config, cli.no_sample);
    helpdesk::tui::run(App::new(config, store))
}
