use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField};
use crate::tui::text_input::TextInput;

use super::helpers::{badge, centered_rect_fixed};

const LABEL_W: usize = 14;

/// Render the add-ticket dialog over the dashboard
pub fn render_add_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.add_form.as_ref() else {
        return;
    };

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let label = |field: FormField, name: &str| -> Span<'static> {
        let style = if form.focus == field {
            Style::default()
                .fg(highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        Span::styled(format!("  {:<w$}", name, w = LABEL_W), style)
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Add New Ticket", header_style)),
        Line::from(""),
    ];

    let mut title = vec![label(FormField::Title, "Title")];
    title.extend(input_spans(app, &form.title, form.focus == FormField::Title));
    lines.push(Line::from(title));

    let mut description = vec![label(FormField::Description, "Description")];
    description.extend(input_spans(
        app,
        &form.description,
        form.focus == FormField::Description,
    ));
    lines.push(Line::from(description));

    let priority = app.draft.priority;
    lines.push(Line::from(vec![
        label(FormField::Priority, "Priority"),
        Span::styled("\u{2039} ", dim_style),
        badge(priority.label(), bg, app.theme.priority_color(priority)),
        Span::styled(" \u{203A}", dim_style),
    ]));

    let assignee = if app.draft.assigned_to.is_empty() {
        Span::styled("Select staff member", dim_style)
    } else {
        Span::styled(
            app.draft.assigned_to.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )
    };
    lines.push(Line::from(vec![
        label(FormField::AssignedTo, "Assigned To"),
        Span::styled("\u{2039} ", dim_style),
        assignee,
        Span::styled(" \u{203A}", dim_style),
    ]));
    lines.push(Line::from(""));

    let button_style = if form.focus == FormField::Submit {
        Style::default()
            .fg(bg)
            .bg(highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(highlight).bg(bg)
    };
    lines.push(Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("[ Add Ticket ]", button_style),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("Tab", dim_style),
        Span::styled(" next  ", text_style),
        Span::styled("\u{2190}/\u{2192}", dim_style),
        Span::styled(" choose  ", text_style),
        Span::styled("Esc", dim_style),
        Span::styled(" close", text_style),
    ]));

    let popup_w: u16 = 64.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// A text input's contents, with a block cursor when focused
pub(super) fn input_spans(app: &App, input: &TextInput, focused: bool) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let style = Style::default().fg(app.theme.text_bright).bg(bg);
    if !focused {
        return vec![Span::styled(input.buffer.clone(), style)];
    }
    let (before, after) = input.split_at_cursor();
    vec![
        Span::styled(before.to_string(), style),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(after.to_string(), style),
    ]
}
