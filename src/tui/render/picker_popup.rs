use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::helpers::centered_rect_fixed;

/// Render the open dropdown picker
pub fn render_picker(frame: &mut Frame, app: &App, area: Rect) {
    let Some(picker) = app.picker.as_ref() else {
        return;
    };

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let selected_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);

    let title = picker.kind.title();
    let widest = picker
        .options
        .iter()
        .map(|o| display_width(o))
        .chain(std::iter::once(display_width(title)))
        .max()
        .unwrap_or(0);
    let inner_w = widest + 4;

    let lines: Vec<Line> = picker
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if i == picker.cursor { "\u{25B8} " } else { "  " };
            let style = if i == picker.cursor {
                selected_style
            } else {
                text_style
            };
            let text = format!("{}{}", marker, option);
            let pad = inner_w.saturating_sub(display_width(&text));
            Line::from(Span::styled(format!("{}{}", text, " ".repeat(pad)), style))
        })
        .collect();

    let popup_w = ((inner_w as u16) + 2).min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{Mode, Picker, PickerKind};
    use crate::tui::render::test_helpers::*;

    fn with_picker(app: &mut App, kind: PickerKind, cursor: usize) {
        app.picker = Some(Picker {
            kind,
            options: app.picker_options(kind),
            cursor,
        });
        app.mode = Mode::Picker;
    }

    #[test]
    fn picker_lists_options_with_marker() {
        let mut app = sample_app();
        with_picker(&mut app, PickerKind::FilterStatus, 2);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_picker(frame, &app, area);
        });
        assert!(output.contains("Filter: Status"));
        assert!(output.contains("  All"));
        assert!(output.contains("\u{25B8} In Progress"));
        assert!(output.contains("  Closed"));
    }

    #[test]
    fn sort_picker_shows_presets() {
        let mut app = sample_app();
        with_picker(&mut app, PickerKind::Sort, 0);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_picker(frame, &app, area);
        });
        for label in ["Newest First", "Oldest First", "Highest Priority", "Lowest Priority"] {
            assert!(output.contains(label), "missing {label}");
        }
    }
}
