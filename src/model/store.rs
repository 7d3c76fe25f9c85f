use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use super::ticket::{Priority, Status, Ticket};

/// The authoritative, ordered sequence of tickets.
///
/// A store has exactly one owner; every mutation goes through `&mut self`
/// (see `ops::ticket_ops`), so readers only ever see whole snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new() -> Self {
        TicketStore::default()
    }

    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        TicketStore { tickets }
    }

    /// The three placeholder tickets a fresh dashboard starts with
    pub fn sample() -> Self {
        TicketStore::from_tickets(vec![
            Ticket {
                id: 1,
                title: "Room 101 AC not working".into(),
                description: "The air conditioning in Room 101 is not cooling properly.".into(),
                priority: Priority::High,
                status: Status::Open,
                created_at: sample_time(2023, 6, 1, 14, 30),
                assigned_to: "John Doe".into(),
            },
            Ticket {
                id: 2,
                title: "Lobby WiFi issues".into(),
                description: "Guests are reporting slow internet speeds in the lobby area.".into(),
                priority: Priority::Medium,
                status: Status::InProgress,
                created_at: sample_time(2023, 6, 2, 9, 15),
                assigned_to: "Jane Smith".into(),
            },
            Ticket {
                id: 3,
                title: "Restock mini bar in Room 205".into(),
                description:
                    "The mini bar in Room 205 needs to be restocked with beverages and snacks."
                        .into(),
                priority: Priority::Low,
                status: Status::Open,
                created_at: sample_time(2023, 6, 3, 11, 45),
                assigned_to: "Mike Johnson".into(),
            },
        ])
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub(crate) fn tickets_mut(&mut self) -> &mut Vec<Ticket> {
        &mut self.tickets
    }
}

/// Placeholder times are local wall-clock times
fn sample_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_sequential_ids() {
        let store = TicketStore::sample();
        let ids: Vec<u32> = store.tickets().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sample_created_in_order() {
        let store = TicketStore::sample();
        let t = store.tickets();
        assert!(t[0].created_at < t[1].created_at);
        assert!(t[1].created_at < t[2].created_at);
        assert_eq!(
            t[0].created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            "2023-06-01 14:30"
        );
    }

    #[test]
    fn test_get_by_id() {
        let store = TicketStore::sample();
        assert_eq!(store.get(2).map(|t| t.title.as_str()), Some("Lobby WiFi issues"));
        assert!(store.get(9).is_none());
        assert!(TicketStore::new().is_empty());
    }
}
