pub mod add_dialog;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod picker_popup;
pub mod range_dialog;
pub mod status_row;
pub mod ticket_table;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (4 rows) | ticket table | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title, range bar, filter bar, separator
            Constraint::Min(1),    // table
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    ticket_table::render_ticket_table(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Dialogs and popups (rendered on top of everything)
    if app.add_form.is_some() {
        add_dialog::render_add_dialog(frame, app, area);
    }
    if app.range_dialog.is_some() {
        range_dialog::render_range_dialog(frame, app, area);
    }
    if app.picker.is_some() {
        picker_popup::render_picker(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
