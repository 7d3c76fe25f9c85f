use std::str::FromStr;

use chrono::NaiveDate;

use super::ticket::ParseError;

/// Date-range selector tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeTag {
    #[default]
    Day,
    Week,
    Month,
    All,
    Custom,
}

impl RangeTag {
    /// Preset windows shown as badges (custom has its own dialog)
    pub const PRESETS: [RangeTag; 4] = [RangeTag::Day, RangeTag::Week, RangeTag::Month, RangeTag::All];

    pub fn label(self) -> &'static str {
        match self {
            RangeTag::Day => "1D",
            RangeTag::Week => "1W",
            RangeTag::Month => "1M",
            RangeTag::All => "ALL",
            RangeTag::Custom => "Custom",
        }
    }
}

impl FromStr for RangeTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(RangeTag::Day),
            "1w" => Ok(RangeTag::Week),
            "1m" => Ok(RangeTag::Month),
            "all" => Ok(RangeTag::All),
            "custom" => Ok(RangeTag::Custom),
            _ => Err(ParseError::InvalidRange(s.to_string())),
        }
    }
}

/// Custom start/end pair. Either side may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Parse a date input box: blank is unset, otherwise YYYY-MM-DD
pub fn parse_date_input(s: &str) -> Result<Option<NaiveDate>, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// The range selector's state. Captured for display; it does not filter tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSelection {
    pub tag: RangeTag,
    pub custom: DateRange,
}

impl RangeSelection {
    /// Pick a tag. Selecting a preset keeps the last custom pair around.
    pub fn select(&mut self, tag: RangeTag) {
        self.tag = tag;
    }

    /// Store a custom pair and switch to the custom tag
    pub fn set_custom(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.custom = DateRange { start, end };
        self.tag = RangeTag::Custom;
    }

    /// Human-readable summary, e.g. "1W" or "Custom 2024-01-01..2024-01-31"
    pub fn describe(&self) -> String {
        match self.tag {
            RangeTag::Custom => {
                let fmt = |d: Option<NaiveDate>| {
                    d.map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "…".to_string())
                };
                format!("Custom {}..{}", fmt(self.custom.start), fmt(self.custom.end))
            }
            tag => tag.label().to_string(),
        }
    }
}
