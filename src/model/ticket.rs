use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error for text that does not name a value of one of the closed sets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown ticket field: {0} (expected title, description, priority, status, assignedTo)")]
    UnknownField(String),
    #[error("invalid priority: {0} (expected low, medium, high)")]
    InvalidPriority(String),
    #[error("invalid status: {0} (expected open, in-progress, closed)")]
    InvalidStatus(String),
    #[error("invalid sort: {0} (expected newest, oldest, highest, lowest)")]
    InvalidSort(String),
    #[error("invalid range: {0} (expected 1d, 1w, 1m, all, custom)")]
    InvalidRange(String),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Ticket urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Display order used by pickers and badges
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Fixed sort rank: Low=0, Medium=1, High=2
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParseError::InvalidPriority(s.to_string())),
        }
    }
}

/// Ticket workflow state. Any state may change to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Closed];

    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            _ => Err(ParseError::InvalidStatus(s.to_string())),
        }
    }
}

/// A support request record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Sequential identifier, assigned at creation
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// Set once at creation, never edited
    pub created_at: DateTime<Utc>,
    /// Staff member name. Expected to come from the roster but not checked.
    pub assigned_to: String,
}

impl Ticket {
    /// Materialize a draft into a ticket with the given identity
    pub fn from_draft(draft: TicketDraft, id: u32, created_at: DateTime<Utc>) -> Self {
        Ticket {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            created_at,
            assigned_to: draft.assigned_to,
        }
    }

    /// Overwrite the one field named by `edit`
    pub fn apply(&mut self, edit: TicketEdit) {
        match edit {
            TicketEdit::Title(v) => self.title = v,
            TicketEdit::Description(v) => self.description = v,
            TicketEdit::Priority(v) => self.priority = v,
            TicketEdit::Status(v) => self.status = v,
            TicketEdit::AssignedTo(v) => self.assigned_to = v,
        }
    }
}

/// The add-ticket form contents: a ticket minus its id and creation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub assigned_to: String,
}

impl Default for TicketDraft {
    fn default() -> Self {
        TicketDraft {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            status: Status::Open,
            assigned_to: String::new(),
        }
    }
}

/// The editable fields of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    Title,
    Description,
    Priority,
    Status,
    AssignedTo,
}

impl TicketField {
    pub fn name(self) -> &'static str {
        match self {
            TicketField::Title => "title",
            TicketField::Description => "description",
            TicketField::Priority => "priority",
            TicketField::Status => "status",
            TicketField::AssignedTo => "assignedTo",
        }
    }
}

impl FromStr for TicketField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "title" => Ok(TicketField::Title),
            "description" => Ok(TicketField::Description),
            "priority" => Ok(TicketField::Priority),
            "status" => Ok(TicketField::Status),
            "assignedTo" | "assigned_to" | "assigned-to" => Ok(TicketField::AssignedTo),
            _ => Err(ParseError::UnknownField(s.to_string())),
        }
    }
}

/// A single-field edit: the field and its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketEdit {
    Title(String),
    Description(String),
    Priority(Priority),
    Status(Status),
    AssignedTo(String),
}

impl TicketEdit {
    /// Build an edit from a textual field name and value.
    /// Text fields accept any value verbatim, including the empty string.
    pub fn parse(field: &str, value: &str) -> Result<Self, ParseError> {
        let field: TicketField = field.parse()?;
        Ok(match field {
            TicketField::Title => TicketEdit::Title(value.to_string()),
            TicketField::Description => TicketEdit::Description(value.to_string()),
            TicketField::Priority => TicketEdit::Priority(value.parse()?),
            TicketField::Status => TicketEdit::Status(value.parse()?),
            TicketField::AssignedTo => TicketEdit::AssignedTo(value.to_string()),
        })
    }

    pub fn field(&self) -> TicketField {
        match self {
            TicketEdit::Title(_) => TicketField::Title,
            TicketEdit::Description(_) => TicketField::Description,
            TicketEdit::Priority(_) => TicketField::Priority,
            TicketEdit::Status(_) => TicketField::Status,
            TicketEdit::AssignedTo(_) => TicketField::AssignedTo,
        }
    }
}
