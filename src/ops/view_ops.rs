use std::cmp::Ordering;

use crate::model::ticket::Ticket;
use crate::model::view::{FilterCriteria, SortCriteria, SortDirection, SortKey};

/// True when the ticket passes all three filters
pub fn matches(ticket: &Ticket, filter: &FilterCriteria) -> bool {
    filter.priority.matches(&ticket.priority)
        && filter.status.matches(&ticket.status)
        && filter.assigned_to.matches(&ticket.assigned_to)
}

/// Ascending comparison of two tickets under `key`
pub fn compare(a: &Ticket, b: &Ticket, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
    }
}

/// The tickets to display: filtered, then stably sorted.
/// Ties keep store order in both directions.
pub fn visible_tickets<'a>(
    tickets: &'a [Ticket],
    filter: &FilterCriteria,
    sort: SortCriteria,
) -> Vec<&'a Ticket> {
    let mut visible: Vec<&Ticket> = tickets.iter().filter(|t| matches(t, filter)).collect();
    visible.sort_by(|a, b| {
        let ord = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    visible
}
