use chrono::Local;
use serde::Serialize;

use crate::model::{Priority, Status, Ticket};
use crate::util::unicode::{display_width, truncate_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TicketJson {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(rename = "assignedTo")]
    pub assigned_to: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

pub fn ticket_to_json(ticket: &Ticket) -> TicketJson {
    TicketJson {
        id: ticket.id,
        title: ticket.title.clone(),
        description: ticket.description.clone(),
        priority: ticket.priority,
        status: ticket.status,
        assigned_to: ticket.assigned_to.clone(),
        created_at: ticket.created_at.with_timezone(&Local).to_rfc3339(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

const TITLE_W: usize = 28;
const DESCRIPTION_W: usize = 32;
const PRIORITY_W: usize = 8;
const STATUS_W: usize = 11;
const ASSIGNEE_W: usize = 14;

fn pad(text: &str, width: usize) -> String {
    let clipped = truncate_to_width(text, width);
    let fill = width.saturating_sub(display_width(&clipped));
    format!("{}{}", clipped, " ".repeat(fill))
}

/// One table row: `#ID  TITLE  DESCRIPTION  PRIORITY  STATUS  ASSIGNEE  CREATED`,
/// created time in the local zone like the dashboard
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let assignee = if ticket.assigned_to.is_empty() {
        "-"
    } else {
        ticket.assigned_to.as_str()
    };
    format!(
        "#{:<4} {}  {}  {}  {}  {}  {}",
        ticket.id,
        pad(&ticket.title, TITLE_W),
        pad(&ticket.description, DESCRIPTION_W),
        pad(ticket.priority.label(), PRIORITY_W),
        pad(ticket.status.label(), STATUS_W),
        pad(assignee, ASSIGNEE_W),
        ticket.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TicketStore;

    #[test]
    fn line_columns() {
        let store = TicketStore::sample();
        let line = format_ticket_line(store.get(2).unwrap());
        assert!(line.starts_with("#2    Lobby WiFi issues"));
        assert!(line.contains("Guests are reporting slow inter\u{2026}  Medium"));
        assert!(line.contains("Medium    In Progress  Jane Smith"));
        assert!(line.ends_with("2023-06-02 09:15"));
    }

    #[test]
    fn line_truncates_long_title_and_marks_unassigned() {
        let mut ticket = TicketStore::sample().get(1).unwrap().clone();
        ticket.title = "x".repeat(60);
        ticket.assigned_to.clear();
        let line = format_ticket_line(&ticket);
        assert!(!line.contains(&"x".repeat(29)));
        assert!(line.contains("  -   "));
    }

    #[test]
    fn json_field_names() {
        let store = TicketStore::sample();
        let value = serde_json::to_value(ticket_to_json(store.get(2).unwrap())).unwrap();
        assert_eq!(value["assignedTo"], "Jane Smith");
        assert_eq!(value["status"], "In Progress");
        assert_eq!(value["priority"], "Medium");
        let created = value["createdAt"].as_str().unwrap();
        assert!(created.starts_with("2023-06-02T09:15:00"), "{created}");
    }
}
