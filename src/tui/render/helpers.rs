use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::util::unicode::display_width;

/// Creation date as shown in the table, e.g. "06-01-23"
pub(super) fn created_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%m-%d-%y").to_string()
}

/// Creation time as shown in the table, e.g. "2:30 PM"
pub(super) fn created_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-I:%M %p").to_string()
}

/// A colored ` label ` badge
pub(super) fn badge(label: &str, fg: Color, bg: Color) -> Span<'static> {
    Span::styled(format!(" {} ", label), Style::default().fg(fg).bg(bg))
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
