use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{Filter, Priority, RangeTag, SortCriteria, Status, TicketEdit};
use crate::tui::app::{App, Mode, Picker, PickerKind};

use super::commit_edit;
use super::range_dialog::open_range_dialog;

/// Open a picker with the cursor on the current value
pub fn open_picker(app: &mut App, kind: PickerKind) {
    let options = app.picker_options(kind);
    if options.is_empty() {
        app.set_status("No staff configured");
        return;
    }
    let cursor = current_choice(app, kind).min(options.len() - 1);
    app.picker = Some(Picker {
        kind,
        options,
        cursor,
    });
    app.mode = Mode::Picker;
}

pub(super) fn handle_picker(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => close_picker(app),
        KeyCode::Char('j') | KeyCode::Down => {
            picker.cursor = (picker.cursor + 1).min(picker.options.len().saturating_sub(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            picker.cursor = picker.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let (kind, idx) = (picker.kind, picker.cursor);
            close_picker(app);
            apply_choice(app, kind, idx);
        }
        _ => {}
    }
}

fn close_picker(app: &mut App) {
    app.picker = None;
    app.mode = Mode::Navigate;
}

/// Index of the option matching the current state
fn current_choice(app: &App, kind: PickerKind) -> usize {
    let filter_index = |pos: Option<usize>| pos.map_or(0, |i| i + 1);
    match kind {
        PickerKind::FilterPriority => filter_index(
            app.filter
                .priority
                .value()
                .and_then(|p| Priority::ALL.iter().position(|x| x == p)),
        ),
        PickerKind::FilterStatus => filter_index(
            app.filter
                .status
                .value()
                .and_then(|s| Status::ALL.iter().position(|x| x == s)),
        ),
        PickerKind::FilterAssignee => filter_index(
            app.filter
                .assigned_to
                .value()
                .and_then(|name| app.staff().iter().position(|x| x == name)),
        ),
        PickerKind::Sort => SortCriteria::PRESETS
            .iter()
            .position(|s| *s == app.sort)
            .unwrap_or(0),
        PickerKind::Range => RangeTag::PRESETS
            .iter()
            .position(|t| *t == app.range.tag)
            .unwrap_or(RangeTag::PRESETS.len()),
        PickerKind::EditPriority(id) => app
            .store
            .get(id)
            .and_then(|t| Priority::ALL.iter().position(|p| *p == t.priority))
            .unwrap_or(0),
        PickerKind::EditStatus(id) => app
            .store
            .get(id)
            .and_then(|t| Status::ALL.iter().position(|s| *s == t.status))
            .unwrap_or(0),
        PickerKind::EditAssignee(id) => app
            .store
            .get(id)
            .and_then(|t| app.staff().iter().position(|s| *s == t.assigned_to))
            .unwrap_or(0),
    }
}

/// Apply option `idx` of a picker of the given kind
pub fn apply_choice(app: &mut App, kind: PickerKind, idx: usize) {
    match kind {
        PickerKind::FilterPriority => {
            let value = filter_choice(idx, |i| Priority::ALL.get(i).copied());
            change_filter(app, |app| app.filter.priority = value);
        }
        PickerKind::FilterStatus => {
            let value = filter_choice(idx, |i| Status::ALL.get(i).copied());
            change_filter(app, |app| app.filter.status = value);
        }
        PickerKind::FilterAssignee => {
            let value = filter_choice(idx, |i| app.staff().get(i).cloned());
            change_filter(app, |app| app.filter.assigned_to = value);
        }
        PickerKind::Sort => {
            if let Some(sort) = SortCriteria::PRESETS.get(idx).copied() {
                let selected = app.selected_id();
                app.sort = sort;
                tracing::debug!(sort = sort.label(), "sort changed");
                if let Some(id) = selected {
                    app.follow_ticket(id);
                }
            }
        }
        PickerKind::Range => match RangeTag::PRESETS.get(idx) {
            Some(tag) => {
                app.range.select(*tag);
                tracing::debug!(range = tag.label(), "range changed");
            }
            None => open_range_dialog(app),
        },
        PickerKind::EditPriority(id) => {
            if let Some(p) = Priority::ALL.get(idx) {
                commit_edit(app, id, TicketEdit::Priority(*p));
            }
        }
        PickerKind::EditStatus(id) => {
            if let Some(s) = Status::ALL.get(idx) {
                commit_edit(app, id, TicketEdit::Status(*s));
            }
        }
        PickerKind::EditAssignee(id) => {
            if let Some(name) = app.staff().get(idx).cloned() {
                commit_edit(app, id, TicketEdit::AssignedTo(name));
            }
        }
    }
}

/// Option 0 is "All"; the rest map onto `lookup(idx - 1)`
fn filter_choice<T>(idx: usize, lookup: impl FnOnce(usize) -> Option<T>) -> Filter<T> {
    match idx.checked_sub(1).and_then(lookup) {
        Some(v) => Filter::Only(v),
        None => Filter::All,
    }
}

fn change_filter(app: &mut App, set: impl FnOnce(&mut App)) {
    let selected = app.selected_id();
    set(app);
    tracing::debug!(filter = ?app.filter, "filter changed");
    match selected {
        Some(id) => app.follow_ticket(id),
        None => app.clamp_cursor(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::model::{HelpdeskConfig, TicketStore};
    use pretty_assertions::assert_eq;

    fn sample_app() -> App {
        App::new(HelpdeskConfig::default(), TicketStore::sample())
    }

    #[test]
    fn test_filter_priority_high_via_keys() {
        let mut app = sample_app();
        handle_key(&mut app, ch('P'));
        // All, Low, Medium, High
        for _ in 0..3 {
            handle_key(&mut app, ch('j'));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.filter.priority, Filter::Only(Priority::High));
        let ids: Vec<u32> = app.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_picker_opens_on_current_value() {
        let mut app = sample_app();
        app.filter.status = Filter::Only(Status::Closed);
        open_picker(&mut app, PickerKind::FilterStatus);
        assert_eq!(app.picker.as_ref().unwrap().cursor, 3);

        let mut app = sample_app();
        open_picker(&mut app, PickerKind::EditAssignee(2));
        // Jane Smith is second on the roster
        assert_eq!(app.picker.as_ref().unwrap().cursor, 1);
    }

    #[test]
    fn test_escape_leaves_state_alone() {
        let mut app = sample_app();
        handle_key(&mut app, ch('P'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.picker.is_none());
        assert!(!app.filter.is_active());
    }

    #[test]
    fn test_choice_all_resets_filter() {
        let mut app = sample_app();
        app.filter.assigned_to = Filter::Only("John Doe".into());
        apply_choice(&mut app, PickerKind::FilterAssignee, 0);
        assert_eq!(app.filter.assigned_to, Filter::All);
        apply_choice(&mut app, PickerKind::FilterAssignee, 4);
        assert_eq!(app.filter.assigned_to, Filter::Only("Emily Brown".into()));
    }

    #[test]
    fn test_sort_choice_follows_selection() {
        let mut app = sample_app();
        // Newest first, cursor on ticket 3 (Low)
        assert_eq!(app.selected_id(), Some(3));
        apply_choice(&mut app, PickerKind::Sort, 2);
        assert_eq!(app.sort, SortCriteria::HIGHEST_PRIORITY);
        assert_eq!(app.selected_id(), Some(3));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_edit_status_updates_store() {
        let mut app = sample_app();
        apply_choice(&mut app, PickerKind::EditStatus(1), 2);
        assert_eq!(app.store.get(1).unwrap().status, Status::Closed);
        assert_eq!(app.store.get(2).unwrap().status, Status::InProgress);
        assert_eq!(app.selected_id(), Some(1));
        assert_eq!(app.status_message.as_deref(), Some("Updated #1 status"));
    }

    #[test]
    fn test_edit_assignee() {
        let mut app = sample_app();
        apply_choice(&mut app, PickerKind::EditAssignee(3), 3);
        assert_eq!(app.store.get(3).unwrap().assigned_to, "Emily Brown");
    }

    #[test]
    fn test_range_preset_and_custom() {
        let mut app = sample_app();
        apply_choice(&mut app, PickerKind::Range, 1);
        assert_eq!(app.range.tag, RangeTag::Week);
        apply_choice(&mut app, PickerKind::Range, 4);
        assert_eq!(app.mode, Mode::CustomRange);
        assert!(app.range_dialog.is_some());
        // Tag only changes once the dialog is saved
        assert_eq!(app.range.tag, RangeTag::Week);
    }

    #[test]
    fn test_empty_roster_blocks_assignee_picker() {
        let mut config = HelpdeskConfig::default();
        config.desk.staff.clear();
        let mut app = App::new(config, TicketStore::sample());
        open_picker(&mut app, PickerKind::EditAssignee(1));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.picker.is_none());
    }
}
