use crossterm::event::{KeyCode, KeyEvent};

use crate::model::TicketEdit;
use crate::tui::app::{App, Mode, TextEdit, TextField};
use crate::tui::text_input::TextInput;

use super::commit_edit;

/// Begin editing the selected ticket's title or description in place
pub(super) fn start_text_edit(app: &mut App, field: TextField) {
    let selected = app.selected_ticket().map(|ticket| {
        let text = match field {
            TextField::Title => &ticket.title,
            TextField::Description => &ticket.description,
        };
        (ticket.id, TextInput::new(text))
    });
    let Some((ticket_id, input)) = selected else {
        app.set_status("No ticket selected");
        return;
    };
    app.text_edit = Some(TextEdit {
        ticket_id,
        field,
        input,
    });
    app.mode = Mode::EditText;
}

pub(super) fn handle_text_edit(app: &mut App, key: KeyEvent) {
    let Some(edit) = app.text_edit.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.text_edit = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let Some(edit) = app.text_edit.take() else {
                return;
            };
            app.mode = Mode::Navigate;
            let value = edit.input.buffer;
            let change = match edit.field {
                TextField::Title => TicketEdit::Title(value),
                TextField::Description => TicketEdit::Description(value),
            };
            commit_edit(app, edit.ticket_id, change);
        }
        _ => {
            edit.input.handle_key(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use crate::model::{HelpdeskConfig, TicketStore};
    use crate::tui::app::{App, Mode};
    use crossterm::event::KeyCode;

    fn sample_app() -> App {
        App::new(HelpdeskConfig::default(), TicketStore::sample())
    }

    #[test]
    fn test_edit_title_commits_on_enter() {
        let mut app = sample_app();
        // Newest first: ticket 3 selected
        handle_key(&mut app, ch('e'));
        assert_eq!(app.mode, Mode::EditText);
        for _ in 0.."Restock mini bar in Room 205".len() {
            handle_key(&mut app, key(KeyCode::Backspace));
        }
        type_str(&mut app, "Restock bar 205");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.get(3).unwrap().title, "Restock bar 205");
        assert_eq!(
            app.store.get(3).unwrap().description,
            TicketStore::sample().get(3).unwrap().description
        );
    }

    #[test]
    fn test_edit_description_to_empty() {
        let mut app = sample_app();
        handle_key(&mut app, ch('d'));
        handle_key(
            &mut app,
            crossterm::event::KeyEvent::new(
                KeyCode::Char('u'),
                crossterm::event::KeyModifiers::CONTROL,
            ),
        );
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.get(3).unwrap().description, "");
    }

    #[test]
    fn test_escape_discards_edit() {
        let mut app = sample_app();
        handle_key(&mut app, ch('e'));
        type_str(&mut app, " (urgent)");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.text_edit.is_none());
        assert_eq!(app.store, TicketStore::sample());
    }

    #[test]
    fn test_typing_q_does_not_quit() {
        let mut app = sample_app();
        handle_key(&mut app, ch('e'));
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        assert!(app.text_edit.as_ref().unwrap().input.buffer.ends_with('q'));
    }
}
