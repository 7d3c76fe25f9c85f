use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::text_input::TextInput;

use super::add_dialog::input_spans;
use super::helpers::centered_rect_fixed;

/// Render the custom date-range dialog
pub fn render_range_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = app.range_dialog.as_ref() else {
        return;
    };

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let focus_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let row = |name: &str, focused: bool, input: &TextInput| {
        let mut spans = vec![Span::styled(
            format!("  {:<13}", name),
            if focused { focus_style } else { text_style },
        )];
        spans.extend(input_spans(app, input, focused));
        Line::from(spans)
    };

    let lines = vec![
        Line::from(Span::styled(" Select a Date range", focus_style)),
        Line::from(""),
        row("Start Date", !dialog.focus_end, &dialog.start),
        row("Ending Date", dialog.focus_end, &dialog.end),
        Line::from(""),
        Line::from(Span::styled("  YYYY-MM-DD, blank for open-ended", dim_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Enter", dim_style),
            Span::styled(" save  ", text_style),
            Span::styled("Tab", dim_style),
            Span::styled(" switch  ", text_style),
            Span::styled("Esc", dim_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
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
