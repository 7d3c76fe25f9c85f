use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{
    FilterCriteria, HelpdeskConfig, Priority, RangeSelection, RangeTag, SortCriteria, Status,
    Ticket, TicketDraft, TicketStore,
};
use crate::ops::view_ops::visible_tickets;

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Add-ticket dialog open
    AddTicket,
    /// Inline title/description edit on the selected row
    EditText,
    /// Dropdown picker open
    Picker,
    /// Custom date-range dialog open
    CustomRange,
}

/// Add-ticket dialog rows, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Priority,
    AssignedTo,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Priority,
        FormField::AssignedTo,
        FormField::Submit,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Add-ticket dialog state. The draft itself lives on `App` so it survives
/// closing the dialog.
#[derive(Debug, Clone)]
pub struct AddForm {
    pub focus: FormField,
    pub title: TextInput,
    pub description: TextInput,
}

impl AddForm {
    pub fn for_draft(draft: &TicketDraft) -> Self {
        AddForm {
            focus: FormField::Title,
            title: TextInput::new(&draft.title),
            description: TextInput::new(&draft.description),
        }
    }
}

/// Which text field an inline edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
}

#[derive(Debug, Clone)]
pub struct TextEdit {
    pub ticket_id: u32,
    pub field: TextField,
    pub input: TextInput,
}

/// What a picker's choice is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    FilterPriority,
    FilterStatus,
    FilterAssignee,
    Sort,
    Range,
    EditPriority(u32),
    EditStatus(u32),
    EditAssignee(u32),
}

impl PickerKind {
    pub fn title(self) -> &'static str {
        match self {
            PickerKind::FilterPriority => "Filter: Priority",
            PickerKind::FilterStatus => "Filter: Status",
            PickerKind::FilterAssignee => "Filter: Assigned To",
            PickerKind::Sort => "Sort",
            PickerKind::Range => "Range",
            PickerKind::EditPriority(_) => "Set Priority",
            PickerKind::EditStatus(_) => "Set Status",
            PickerKind::EditAssignee(_) => "Assign To",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Picker {
    pub kind: PickerKind,
    pub options: Vec<String>,
    pub cursor: usize,
}

/// Custom range dialog inputs
#[derive(Debug, Clone)]
pub struct RangeDialog {
    pub start: TextInput,
    pub end: TextInput,
    /// true = end date focused
    pub focus_end: bool,
}

/// Main application state
pub struct App {
    pub config: HelpdeskConfig,
    pub store: TicketStore,
    pub filter: FilterCriteria,
    pub sort: SortCriteria,
    pub range: RangeSelection,
    /// Add-ticket form contents, kept between dialog openings
    pub draft: TicketDraft,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible ticket list
    pub cursor: usize,
    /// First visible table row
    pub scroll_offset: usize,
    pub show_help: bool,
    pub add_form: Option<AddForm>,
    pub text_edit: Option<TextEdit>,
    pub picker: Option<Picker>,
    pub range_dialog: Option<RangeDialog>,
    /// One-shot message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: HelpdeskConfig, store: TicketStore) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            config,
            store,
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            range: RangeSelection::default(),
            draft: TicketDraft::default(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            add_form: None,
            text_edit: None,
            picker: None,
            range_dialog: None,
            status_message: None,
        }
    }

    pub fn staff(&self) -> &[String] {
        &self.config.desk.staff
    }

    /// The tickets the table shows, in display order
    pub fn visible(&self) -> Vec<&Ticket> {
        visible_tickets(self.store.tickets(), &self.filter, self.sort)
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.visible().get(self.cursor).copied()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_ticket().map(|t| t.id)
    }

    /// Keep the cursor inside the visible list
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Move the cursor onto ticket `id` if it is visible, else clamp
    pub fn follow_ticket(&mut self, id: u32) {
        match self.visible().iter().position(|t| t.id == id) {
            Some(pos) => self.cursor = pos,
            None => self.clamp_cursor(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Options a picker lists, in display order
    pub fn picker_options(&self, kind: PickerKind) -> Vec<String> {
        let all = || "All".to_string();
        match kind {
            PickerKind::FilterPriority => std::iter::once(all())
                .chain(Priority::ALL.iter().map(|p| p.label().to_string()))
                .collect(),
            PickerKind::FilterStatus => std::iter::once(all())
                .chain(Status::ALL.iter().map(|s| s.label().to_string()))
                .collect(),
            PickerKind::FilterAssignee => std::iter::once(all())
                .chain(self.staff().iter().cloned())
                .collect(),
            PickerKind::Sort => SortCriteria::PRESETS
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
            PickerKind::Range => RangeTag::PRESETS
                .iter()
                .chain(std::iter::once(&RangeTag::Custom))
                .map(|t| t.label().to_string())
                .collect(),
            PickerKind::EditPriority(_) => {
                Priority::ALL.iter().map(|p| p.label().to_string()).collect()
            }
            PickerKind::EditStatus(_) => {
                Status::ALL.iter().map(|s| s.label().to_string()).collect()
            }
            PickerKind::EditAssignee(_) => self.staff().to_vec(),
        }
    }
}

/// Run the TUI application over a prepared app state
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(tickets = app.store.len(), "dashboard started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(tickets = app.store.len(), "dashboard closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
