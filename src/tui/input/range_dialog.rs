use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::parse_date_input;
use crate::tui::app::{App, Mode, RangeDialog};
use crate::tui::text_input::TextInput;

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Open the custom range dialog, prefilled with the last custom pair
pub(super) fn open_range_dialog(app: &mut App) {
    app.range_dialog = Some(RangeDialog {
        start: TextInput::new(&date_text(app.range.custom.start)),
        end: TextInput::new(&date_text(app.range.custom.end)),
        focus_end: false,
    });
    app.mode = Mode::CustomRange;
}

pub(super) fn handle_range_dialog(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.range_dialog.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.range_dialog = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            dialog.focus_end = !dialog.focus_end;
        }
        KeyCode::Enter => save_custom_range(app),
        _ => {
            let input = if dialog.focus_end {
                &mut dialog.end
            } else {
                &mut dialog.start
            };
            input.handle_key(key);
        }
    }
}

/// Validate the dialog's dates and switch the range to custom.
/// An unparsable date keeps the dialog open.
pub fn save_custom_range(app: &mut App) {
    let Some(dialog) = app.range_dialog.as_ref() else {
        return;
    };
    let parsed = parse_date_input(&dialog.start.buffer)
        .and_then(|start| parse_date_input(&dialog.end.buffer).map(|end| (start, end)));
    match parsed {
        Ok((start, end)) => {
            app.range.set_custom(start, end);
            app.range_dialog = None;
            app.mode = Mode::Navigate;
            tracing::debug!(range = %app.range.describe(), "range changed");
            let message = format!("Range: {}", app.range.describe());
            app.set_status(message);
        }
        Err(e) => {
            tracing::warn!(error = %e, "custom range rejected");
            app.set_status(e.to_string());
        }
    }
}
