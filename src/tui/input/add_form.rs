use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Priority;
use crate::ops::ticket_ops::add_ticket;
use crate::tui::app::{App, FormField, Mode};

pub(super) fn handle_add_form(app: &mut App, key: KeyEvent) {
    let Some(form) = app.add_form.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        // Closing keeps the draft for next time
        KeyCode::Esc => {
            app.add_form = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Tab | KeyCode::Down => form.focus = form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => form.focus = form.focus.prev(),
        KeyCode::Enter => {
            if form.focus == FormField::Submit {
                submit_add_form(app, Utc::now());
            } else {
                form.focus = form.focus.next();
            }
        }
        _ => match form.focus {
            FormField::Title => {
                if form.title.handle_key(key) {
                    app.draft.title.clone_from(&form.title.buffer);
                }
            }
            FormField::Description => {
                if form.description.handle_key(key) {
                    app.draft.description.clone_from(&form.description.buffer);
                }
            }
            FormField::Priority => {
                if let Some(forward) = cycle_direction(key) {
                    app.draft.priority = cycle_priority(app.draft.priority, forward);
                }
            }
            FormField::AssignedTo => {
                if let Some(forward) = cycle_direction(key) {
                    app.draft.assigned_to =
                        cycle_staff(&app.draft.assigned_to, &app.config.desk.staff, forward);
                }
            }
            FormField::Submit => {}
        },
    }
}

/// Create a ticket from the draft, close the dialog and select the new row
pub fn submit_add_form(app: &mut App, now: DateTime<Utc>) {
    let id = add_ticket(&mut app.store, &mut app.draft, now);
    app.add_form = None;
    app.mode = Mode::Navigate;
    app.follow_ticket(id);
    app.set_status(format!("Added ticket #{}", id));
}

fn cycle_direction(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Some(true),
        KeyCode::Left | KeyCode::Char('h') => Some(false),
        _ => None,
    }
}

fn cycle_priority(current: Priority, forward: bool) -> Priority {
    let all = Priority::ALL;
    let i = all.iter().position(|p| *p == current).unwrap_or(0);
    let n = all.len();
    all[if forward { (i + 1) % n } else { (i + n - 1) % n }]
}

/// Step through the roster. An unassigned (or unknown) value steps onto
/// the first or last member.
fn cycle_staff(current: &str, staff: &[String], forward: bool) -> String {
    let n = staff.len();
    if n == 0 {
        return current.to_string();
    }
    let next = match staff.iter().position(|s| s == current) {
        Some(i) if forward => (i + 1) % n,
        Some(i) => (i + n - 1) % n,
        None if forward => 0,
        None => n - 1,
    };
    staff[next].clone()
}
