mod add_form;
mod navigate;
mod picker;
mod range_dialog;
mod text_edit;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TicketEdit;
use crate::ops::ticket_ops::update_ticket;

use super::app::{App, Mode};

use add_form::handle_add_form;
use navigate::handle_navigate;
use picker::handle_picker;
use range_dialog::handle_range_dialog;
use text_edit::handle_text_edit;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::AddTicket => handle_add_form(app, key),
        Mode::EditText => handle_text_edit(app, key),
        Mode::Picker => handle_picker(app, key),
        Mode::CustomRange => handle_range_dialog(app, key),
    }
}

/// Apply one field edit to ticket `id` and keep the cursor on it
pub(super) fn commit_edit(app: &mut App, id: u32, edit: TicketEdit) {
    let field = edit.field().name();
    if update_ticket(&mut app.store, id, edit) {
        app.follow_ticket(id);
        app.set_status(format!("Updated #{} {}", id, field));
    } else {
        app.set_status(format!("Ticket #{} no longer exists", id));
    }
}

#[cfg(test)]
pub(super) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        KeyEvent::new(KeyCode::Char(c), modifiers)
    }

    pub fn type_str(app: &mut crate::tui::app::App, s: &str) {
        for c in s.chars() {
            super::handle_key(app, ch(c));
        }
    }
}
