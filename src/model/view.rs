use std::str::FromStr;

use super::ticket::{ParseError, Priority, Status};

/// An equality filter on one ticket dimension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    /// No constraint
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(want) => want == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Only(v) => Some(v),
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Parse a filter value; "all" (any case) means no constraint
    pub fn parse(s: &str) -> Result<Self, T::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// The three independent dashboard filters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub priority: Filter<Priority>,
    pub status: Filter<Status>,
    pub assigned_to: Filter<String>,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !(self.priority.is_all() && self.status.is_all() && self.assigned_to.is_all())
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriteria {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    fn default() -> Self {
        SortCriteria::NEWEST_FIRST
    }
}

impl SortCriteria {
    pub const NEWEST_FIRST: SortCriteria = SortCriteria {
        key: SortKey::CreatedAt,
        direction: SortDirection::Desc,
    };
    pub const OLDEST_FIRST: SortCriteria = SortCriteria {
        key: SortKey::CreatedAt,
        direction: SortDirection::Asc,
    };
    pub const HIGHEST_PRIORITY: SortCriteria = SortCriteria {
        key: SortKey::Priority,
        direction: SortDirection::Desc,
    };
    pub const LOWEST_PRIORITY: SortCriteria = SortCriteria {
        key: SortKey::Priority,
        direction: SortDirection::Asc,
    };

    /// Sort menu entries, in menu order
    pub const PRESETS: [SortCriteria; 4] = [
        SortCriteria::NEWEST_FIRST,
        SortCriteria::OLDEST_FIRST,
        SortCriteria::HIGHEST_PRIORITY,
        SortCriteria::LOWEST_PRIORITY,
    ];

    pub fn label(self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::CreatedAt, SortDirection::Desc) => "Newest First",
            (SortKey::CreatedAt, SortDirection::Asc) => "Oldest First",
            (SortKey::Priority, SortDirection::Desc) => "Highest Priority",
            (SortKey::Priority, SortDirection::Asc) => "Lowest Priority",
        }
    }
}

impl FromStr for SortCriteria {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortCriteria::NEWEST_FIRST),
            "oldest" => Ok(SortCriteria::OLDEST_FIRST),
            "highest" => Ok(SortCriteria::HIGHEST_PRIORITY),
            "lowest" => Ok(SortCriteria::LOWEST_PRIORITY),
            _ => Err(ParseError::InvalidSort(s.to_string())),
        }
    }
}
