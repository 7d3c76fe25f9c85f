use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::model::Ticket;
use crate::tui::app::{App, Mode, TextField};
use crate::tui::text_input::TextInput;

use super::helpers::{created_date, created_time};

const HEADERS: [&str; 7] = [
    "ID",
    "Title",
    "Description",
    "Priority",
    "Status",
    "Assigned To",
    "Created",
];

/// Render the ticket table (the view transform of the store)
pub fn render_ticket_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible = app.visible();

    if visible.is_empty() {
        let message = if app.store.is_empty() {
            " No tickets yet. Press a to add one."
        } else {
            " No tickets match the current filters. Press c to clear them."
        };
        let empty = Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .style(Style::default().bg(bg));

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, ticket)| ticket_row(app, ticket, i == app.cursor))
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(17),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(app.theme.text).bg(bg))
        .row_highlight_style(Style::default().bg(app.theme.selection_bg));

    let mut state = TableState::default()
        .with_offset(app.scroll_offset)
        .with_selected(Some(app.cursor));
    frame.render_stateful_widget(table, area, &mut state);
    app.scroll_offset = state.offset();
}

fn ticket_row<'a>(app: &App, ticket: &'a Ticket, is_cursor: bool) -> Row<'a> {
    let theme = &app.theme;
    let editing = app
        .text_edit
        .as_ref()
        .filter(|e| is_cursor && app.mode == Mode::EditText && e.ticket_id == ticket.id);

    let id_style = if is_cursor {
        Style::default().fg(theme.highlight)
    } else {
        Style::default().fg(theme.dim)
    };
    let text_style = Style::default().fg(theme.text_bright);

    let mut title = Cell::from(ticket.title.as_str()).style(text_style);
    let mut description =
        Cell::from(ticket.description.as_str()).style(Style::default().fg(theme.text));
    if let Some(edit) = editing {
        let cell = edit_cell(app, &edit.input);
        match edit.field {
            TextField::Title => title = cell,
            TextField::Description => description = cell,
        }
    }

    Row::new(vec![
        Cell::from(ticket.id.to_string()).style(id_style),
        title,
        description,
        Cell::from(ticket.priority.label())
            .style(Style::default().fg(theme.priority_color(ticket.priority))),
        Cell::from(ticket.status.label())
            .style(Style::default().fg(theme.status_color(ticket.status))),
        Cell::from(ticket.assigned_to.as_str()).style(Style::default().fg(theme.text)),
        Cell::from(format!(
            "{} {}",
            created_date(ticket.created_at),
            created_time(ticket.created_at)
        ))
        .style(Style::default().fg(theme.dim)),
    ])
}

/// Cell for an in-progress edit, with a block cursor
fn edit_cell(app: &App, input: &TextInput) -> Cell<'static> {
    let (before, after) = input.split_at_cursor();
    let style = Style::default()
        .fg(app.theme.text_bright)
        .add_modifier(Modifier::UNDERLINED);
    Cell::from(Line::from(vec![
        Span::styled(before.to_string(), style),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight)),
        Span::styled(after.to_string(), style),
    ]))
}
