use chrono::{DateTime, Utc};

use crate::model::store::TicketStore;
use crate::model::ticket::{Status, Ticket, TicketDraft, TicketEdit};

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

/// Identifier the next added ticket receives.
///
/// Length-based: unique only because tickets are never removed. A delete
/// operation would need a counter that does not shrink with the store.
pub fn next_id(store: &TicketStore) -> u32 {
    u32::try_from(store.len()).map_or(u32::MAX, |n| n.saturating_add(1))
}

/// Append a ticket built from `draft`, stamped with `now`.
/// The draft is reset to its default shape. Returns the new ticket's ID.
pub fn add_ticket(store: &mut TicketStore, draft: &mut TicketDraft, now: DateTime<Utc>) -> u32 {
    let id = next_id(store);
    let ticket = Ticket::from_draft(std::mem::take(draft), id, now);
    tracing::info!(id, title = %ticket.title, priority = %ticket.priority, "ticket added");
    store.tickets_mut().push(ticket);
    id
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Overwrite one field of the ticket with `id`.
/// Returns false and leaves the store untouched when no ticket has that ID.
pub fn update_ticket(store: &mut TicketStore, id: u32, edit: TicketEdit) -> bool {
    match store.tickets_mut().iter_mut().find(|t| t.id == id) {
        Some(ticket) => {
            tracing::info!(id, field = edit.field().name(), "ticket updated");
            ticket.apply(edit);
            true
        }
        None => {
            tracing::debug!(id, "update ignored: no such ticket");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Per-status tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl TicketCounts {
    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.closed
    }
}

pub fn ticket_counts<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> TicketCounts {
    let mut counts = TicketCounts::default();
    for ticket in tickets {
        match ticket.status {
            Status::Open => counts.open += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::Closed => counts.closed += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ticket::Priority;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
    }

    // --- add ---

    #[test]
    fn test_add_assigns_length_plus_one() {
        let mut store = TicketStore::sample();
        let mut draft = TicketDraft {
            title: "Broken kettle".into(),
            assigned_to: "Emily Brown".into(),
            ..Default::default()
        };
        let id = add_ticket(&mut store, &mut draft, now());
        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);

        let added = store.tickets().last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.title, "Broken kettle");
        assert_eq!(added.priority, Priority::Medium);
        assert_eq!(added.status, Status::Open);
        assert_eq!(added.created_at, now());
    }

    #[test]
    fn test_add_resets_draft() {
        let mut store = TicketStore::new();
        let mut draft = TicketDraft {
            title: "x".into(),
            description: "y".into(),
            priority: Priority::High,
            status: Status::Closed,
            assigned_to: "z".into(),
        };
        add_ticket(&mut store, &mut draft, now());
        assert_eq!(draft, TicketDraft::default());
    }

    #[test]
    fn test_add_accepts_empty_fields() {
        let mut store = TicketStore::new();
        let id = add_ticket(&mut store, &mut TicketDraft::default(), now());
        assert_eq!(id, 1);
        let t = store.get(1).unwrap();
        assert_eq!(t.title, "");
        assert_eq!(t.assigned_to, "");
    }

    #[test]
    fn test_add_keeps_existing_records() {
        let mut store = TicketStore::sample();
        let before = store.tickets().to_vec();
        add_ticket(&mut store, &mut TicketDraft::default(), now());
        assert_eq!(&store.tickets()[..3], &before[..]);
    }

    #[test]
    fn test_next_id_follows_length() {
        let mut store = TicketStore::new();
        assert_eq!(next_id(&store), 1);
        add_ticket(&mut store, &mut TicketDraft::default(), now());
        add_ticket(&mut store, &mut TicketDraft::default(), now());
        assert_eq!(next_id(&store), 3);
    }

    // --- update ---

    #[test]
    fn test_update_status_closed() {
        let mut store = TicketStore::sample();
        let other_before = store.get(2).unwrap().clone();
        let target_before = store.get(1).unwrap().clone();

        assert!(update_ticket(
            &mut store,
            1,
            TicketEdit::parse("status", "Closed").unwrap()
        ));

        let target = store.get(1).unwrap();
        assert_eq!(target.status, Status::Closed);
        assert_eq!(
            Ticket {
                status: target_before.status,
                ..target.clone()
            },
            target_before
        );
        assert_eq!(store.get(2).unwrap(), &other_before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TicketStore::sample();
        let before = store.clone();
        assert!(!update_ticket(
            &mut store,
            42,
            TicketEdit::Title("ghost".into())
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_keeps_position_and_created_at() {
        let mut store = TicketStore::sample();
        let created = store.get(3).unwrap().created_at;
        update_ticket(&mut store, 3, TicketEdit::AssignedTo("Emily Brown".into()));
        assert_eq!(store.tickets()[2].id, 3);
        assert_eq!(store.tickets()[2].assigned_to, "Emily Brown");
        assert_eq!(store.tickets()[2].created_at, created);
    }

    // --- stats ---

    #[test]
    fn test_ticket_counts() {
        let store = TicketStore::sample();
        let counts = ticket_counts(store.tickets());
        assert_eq!(
            counts,
            TicketCounts {
                open: 2,
                in_progress: 1,
                closed: 0
            }
        );
        assert_eq!(counts.total(), 3);
    }
}
