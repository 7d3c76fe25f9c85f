use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    // Key hints right-aligned, dropped when they would collide with the message
    if app.config.ui.show_key_hints {
        let hint = key_hints(app.mode);
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                format!("{} ", hint),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  e/d edit  p/s/o set  P/S/A filter  O sort  R range  ? help",
        Mode::AddTicket => "Tab next  \u{2190}/\u{2192} choose  Enter add  Esc close",
        Mode::EditText => "Enter save  Esc cancel",
        Mode::Picker => "j/k move  Enter select  Esc cancel",
        Mode::CustomRange => "Tab switch  Enter save  Esc cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn status_output(app: &App, width: u16) -> String {
        render_to_string(width, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn navigate_hints() {
        let app = sample_app();
        let output = status_output(&app, TERM_W);
        assert!(output.ends_with("R range  ? help"));
    }

    #[test]
    fn message_and_hints() {
        let mut app = sample_app();
        app.set_status("Added ticket #4");
        let output = status_output(&app, WIDE_W);
        assert!(output.starts_with(" Added ticket #4"));
        assert!(output.contains("? help"));
    }

    #[test]
    fn mode_specific_hints() {
        let mut app = sample_app();
        app.mode = Mode::EditText;
        assert!(status_output(&app, TERM_W).ends_with("Enter save  Esc cancel"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = sample_app();
        app.config.ui.show_key_hints = false;
        assert!(status_output(&app, TERM_W).is_empty());
    }
}
