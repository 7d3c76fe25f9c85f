use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{AddForm, App, Mode, PickerKind, TextField};

use super::picker::open_picker;
use super::text_edit::start_text_edit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Create
        KeyCode::Char('a') => {
            app.add_form = Some(AddForm::for_draft(&app.draft));
            app.mode = Mode::AddTicket;
        }

        // Field edits on the selected ticket
        KeyCode::Char('e') => start_text_edit(app, TextField::Title),
        KeyCode::Char('d') => start_text_edit(app, TextField::Description),
        KeyCode::Char('p') => edit_picker(app, PickerKind::EditPriority),
        KeyCode::Char('s') => edit_picker(app, PickerKind::EditStatus),
        KeyCode::Char('o') => edit_picker(app, PickerKind::EditAssignee),

        // View criteria
        KeyCode::Char('P') => open_picker(app, PickerKind::FilterPriority),
        KeyCode::Char('S') => open_picker(app, PickerKind::FilterStatus),
        KeyCode::Char('A') => open_picker(app, PickerKind::FilterAssignee),
        KeyCode::Char('O') => open_picker(app, PickerKind::Sort),
        KeyCode::Char('R') => open_picker(app, PickerKind::Range),
        KeyCode::Char('c') => {
            if app.filter.is_active() {
                let selected = app.selected_id();
                app.filter.clear();
                tracing::debug!("filters cleared");
                match selected {
                    Some(id) => app.follow_ticket(id),
                    None => app.clamp_cursor(),
                }
                app.set_status("Filters cleared");
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.visible().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}

fn edit_picker(app: &mut App, kind: fn(u32) -> PickerKind) {
    match app.selected_id() {
        Some(id) => open_picker(app, kind(id)),
        None => app.set_status("No ticket selected"),
    }
}
