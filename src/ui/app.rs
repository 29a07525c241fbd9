//! Main TUI application state and logic

use super::panes::{self, InterpreterScrollState, StatusKind};
use super::text_input::TextCursor;
use crate::catalog::{ExampleCatalog, ExampleName};
use crate::engine::{Engine, EngineGateway};
use crate::session::panels;
use crate::session::{DiagnosticSet, PlaygroundSession};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::error;

/// Lines moved by PageUp/PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Diagnostics,
    CodeResult,
    Interpreter,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: editor -> diagnostics -> code -> interpreter)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::CodeResult,
            FocusedPane::CodeResult => FocusedPane::Interpreter,
            FocusedPane::Interpreter => FocusedPane::Editor,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Interpreter,
            FocusedPane::Diagnostics => FocusedPane::Editor,
            FocusedPane::CodeResult => FocusedPane::Diagnostics,
            FocusedPane::Interpreter => FocusedPane::CodeResult,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FocusedPane::Editor => "EDITOR",
            FocusedPane::Diagnostics => "DIAGNOSTICS",
            FocusedPane::CodeResult => "CODE",
            FocusedPane::Interpreter => "INTERPRETER",
        }
    }
}

/// A cursor-level edit decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Edit {
    fn from_key(key: KeyEvent) -> Option<Self> {
        let edit = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Edit::Insert(c)
            }
            KeyCode::Enter => Edit::Newline,
            KeyCode::Backspace => Edit::Backspace,
            KeyCode::Delete => Edit::Delete,
            KeyCode::Left => Edit::Left,
            KeyCode::Right => Edit::Right,
            KeyCode::Up => Edit::Up,
            KeyCode::Down => Edit::Down,
            KeyCode::Home => Edit::Home,
            KeyCode::End => Edit::End,
            _ => return None,
        };
        Some(edit)
    }

    /// Apply to `text` at `cursor`; returns the new text when it changed
    fn apply(self, cursor: &mut TextCursor, text: &str) -> Option<String> {
        let mut changed = text.to_owned();
        match self {
            Edit::Insert(c) => cursor.insert_char(&mut changed, c),
            Edit::Newline => cursor.insert_newline(&mut changed),
            Edit::Backspace => cursor.backspace(&mut changed),
            Edit::Delete => cursor.delete(&mut changed),
            Edit::Left => cursor.move_left(text),
            Edit::Right => cursor.move_right(text),
            Edit::Up => cursor.move_up(text),
            Edit::Down => cursor.move_down(text),
            Edit::Home => cursor.move_home(),
            Edit::End => cursor.move_end(text),
        }
        (changed != text).then_some(changed)
    }
}

/// The main application state
pub struct App<'g, E> {
    /// Everything the panels show
    pub session: PlaygroundSession,

    gateway: &'g EngineGateway<E>,
    catalog: ExampleCatalog,

    /// Example offered by the picker; only loaded on request
    pub selected_example: ExampleName,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub editor_cursor: TextCursor,
    pub input_cursor: TextCursor,

    /// Per-pane scroll offsets
    pub editor_scroll: usize,
    pub diagnostics_scroll: usize,
    pub code_scroll: usize,
    pub interpreter_scroll: InterpreterScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_kind: StatusKind,
}

impl<'g, E: Engine> App<'g, E> {
    /// Create a new app around an initialized gateway
    pub fn new(
        session: PlaygroundSession,
        gateway: &'g EngineGateway<E>,
        catalog: ExampleCatalog,
        selected_example: ExampleName,
    ) -> Self {
        App {
            session,
            gateway,
            catalog,
            selected_example,
            focused_pane: FocusedPane::Editor,
            editor_cursor: TextCursor::default(),
            input_cursor: TextCursor::default(),
            editor_scroll: 0,
            diagnostics_scroll: 0,
            code_scroll: 0,
            interpreter_scroll: InterpreterScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            status_kind: StatusKind::Info,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Editor (top) | Interpreter (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Diagnostics (top) | Code (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let views = panels::panel_views(&self.session);

        panes::render_editor_pane(
            frame,
            left_rows[0],
            &views.editor,
            self.editor_cursor,
            self.selected_example,
            self.focused_pane == FocusedPane::Editor,
            &mut self.editor_scroll,
        );

        panes::render_interpreter_pane(
            frame,
            left_rows[1],
            &views.interpreter,
            self.input_cursor,
            self.focused_pane == FocusedPane::Interpreter,
            &mut self.interpreter_scroll,
        );

        panes::render_diagnostics_pane(
            frame,
            right_rows[0],
            &views.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        panes::render_code_result_pane(
            frame,
            right_rows[1],
            &views.code_result,
            self.focused_pane == FocusedPane::CodeResult,
            &mut self.code_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.status_kind,
            self.focused_pane.name(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::F(5) => self.compile_program(),
            KeyCode::Char('b') if ctrl => self.compile_program(),
            KeyCode::F(6) => self.run_program(),
            KeyCode::Char('r') if ctrl => self.run_program(),
            KeyCode::F(2) => self.select_example(self.selected_example.prev()),
            KeyCode::F(3) => self.select_example(self.selected_example.next()),
            KeyCode::F(4) => self.load_selected_example(),
            KeyCode::Char('l') if ctrl => self.load_selected_example(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            _ => match self.focused_pane {
                FocusedPane::Editor => self.edit_source(key),
                FocusedPane::Interpreter => self.edit_input(key),
                FocusedPane::Diagnostics => scroll(&mut self.diagnostics_scroll, key),
                FocusedPane::CodeResult => scroll(&mut self.code_scroll, key),
            },
        }
    }

    fn edit_source(&mut self, key: KeyEvent) {
        if let Some(edit) = Edit::from_key(key) {
            if let Some(text) = edit.apply(&mut self.editor_cursor, self.session.source_text()) {
                self.session.edit_source(text);
            }
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::PageUp | KeyCode::PageDown => scroll(&mut self.interpreter_scroll.output, key),
            _ => {
                if let Some(edit) = Edit::from_key(key) {
                    if let Some(text) =
                        edit.apply(&mut self.input_cursor, self.session.interpreter_input())
                    {
                        self.session.set_interpreter_input(text);
                    }
                }
            }
        }
    }

    fn select_example(&mut self, name: ExampleName) {
        self.selected_example = name;
        self.set_status(
            format!("Selected example: {} (F4 to load)", name.label()),
            StatusKind::Info,
        );
    }

    fn load_selected_example(&mut self) {
        let name = self.selected_example;
        if self.session.load_example(&self.catalog, name.id()) {
            self.editor_cursor = TextCursor::default();
            self.editor_scroll = 0;
            self.set_status(format!("Loaded example: {}", name.label()), StatusKind::Info);
        } else {
            self.set_status(
                format!("Example not available: {}", name.label()),
                StatusKind::Info,
            );
        }
    }

    /// Compile the editor text and show the result
    fn compile_program(&mut self) {
        match self.session.compile(self.gateway) {
            Ok(()) => {
                self.diagnostics_scroll = 0;
                self.code_scroll = 0;
                let (message, kind) = summarize("Compile", self.session.diagnostics());
                self.set_status(message, kind);
            }
            Err(e) => {
                error!(error = %e, "compile request failed");
                self.set_status(format!("Engine error: {}", e), StatusKind::Failure);
            }
        }
    }

    /// Run the editor text through the interpreter and show the result
    fn run_program(&mut self) {
        match self.session.run(self.gateway) {
            Ok(()) => {
                self.diagnostics_scroll = 0;
                // Auto-scroll output to bottom
                self.interpreter_scroll.output = usize::MAX;
                let (message, kind) = summarize("Run", self.session.diagnostics());
                self.set_status(message, kind);
            }
            Err(e) => {
                error!(error = %e, "interpreter request failed");
                self.set_status(format!("Engine error: {}", e), StatusKind::Failure);
            }
        }
    }

    fn set_status(&mut self, message: String, kind: StatusKind) {
        self.status_message = message;
        self.status_kind = kind;
    }
}

fn summarize(action: &str, diagnostics: &DiagnosticSet) -> (String, StatusKind) {
    if diagnostics.has_errors() {
        (
            format!("{} reported {} error(s)", action, diagnostics.errors.len()),
            StatusKind::Failure,
        )
    } else if !diagnostics.warnings.is_empty() {
        (
            format!(
                "{} finished with {} warning(s)",
                action,
                diagnostics.warnings.len()
            ),
            StatusKind::Success,
        )
    } else {
        (format!("{} finished", action), StatusKind::Success)
    }
}

fn scroll(offset: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Up => *offset = offset.saturating_sub(1),
        KeyCode::Down => *offset = offset.saturating_add(1),
        KeyCode::PageUp => *offset = offset.saturating_sub(PAGE),
        KeyCode::PageDown => *offset = offset.saturating_add(PAGE),
        KeyCode::Home => *offset = 0,
        KeyCode::End => *offset = usize::MAX,
        _ => {}
    }
}
