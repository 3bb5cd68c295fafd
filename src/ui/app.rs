//! Main TUI application state and logic

use super::editor::EditorBuffer;
use super::menu::MenuView;
use super::output::OutputView;
use crate::console::errors::ConsoleError;
use crate::console::session::ConsoleSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Lines moved by PgUp/PgDn in the output pane
const PAGE_SCROLL: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Output,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Editor,
        }
    }
}

/// The last evaluation failure, shown until the next run or selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,

    /// 1-based source line, when the evaluator reported one
    pub line: Option<usize>,
}

/// The main application state
pub struct App {
    session: ConsoleSession,

    pub editor: EditorBuffer,
    pub output: OutputView,
    pub menu: MenuView,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    pub error_state: Option<ErrorState>,

    tick_rate: Duration,
}

impl App {
    pub fn new(session: ConsoleSession, tick_rate: Duration) -> Self {
        App {
            session,
            editor: EditorBuffer::new(),
            output: OutputView::new(),
            menu: MenuView::new(),
            focused_pane: FocusedPane::Editor,
            should_quit: false,
            status_message: String::from("Ready!"),
            error_state: None,
            tick_rate,
        }
    }

    pub fn session(&self) -> &ConsoleSession {
        &self.session
    }

    /// Load `name` into the editor and refresh the menu
    pub fn select(&mut self, name: &str) -> Result<(), ConsoleError> {
        self.session.select(name, &mut self.editor, &mut self.menu)?;
        self.error_state = None;
        self.status_message = format!("Loaded {}", name);
        Ok(())
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Title row, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Editor (left) | Output (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        super::panes::render_title_bar(frame, main_chunks[0], self.session.current());

        super::panes::render_editor_pane(
            frame,
            columns[0],
            &mut self.editor,
            self.error_state.as_ref().and_then(|e| e.line),
            self.focused_pane == FocusedPane::Editor && !self.menu.is_open(),
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &mut self.output,
            self.focused_pane == FocusedPane::Output,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.error_state.as_ref(),
        );

        if self.menu.is_open() {
            super::panes::render_menu_popup(frame, main_chunks[1], &self.menu);
        }
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keys
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') | KeyCode::Char('R') if ctrl => {
                self.run_current();
                return;
            }
            KeyCode::F(5) => {
                self.run_current();
                return;
            }
            KeyCode::F(2) => {
                self.menu.toggle();
                return;
            }
            _ => {}
        }

        if self.menu.is_open() {
            self.handle_menu_key(key);
            return;
        }

        if key.code == KeyCode::BackTab {
            self.focused_pane = self.focused_pane.toggle();
            return;
        }

        match self.focused_pane {
            FocusedPane::Editor => self.handle_editor_key(key),
            FocusedPane::Output => self.handle_output_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.menu.prev(),
            KeyCode::Down => self.menu.next(),
            KeyCode::Esc => self.menu.close(),
            KeyCode::Enter => {
                let Some(name) = self.menu.selected_name().map(str::to_string) else {
                    return;
                };
                self.menu.close();
                if let Err(e) = self.select(&name) {
                    self.status_message = e.to_string();
                }
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Tab => self.editor.insert_tab(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => {}
        }
    }

    fn handle_output_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.output.scroll_up(1),
            KeyCode::Down => self.output.scroll_down(1),
            KeyCode::PageUp => self.output.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.output.scroll_down(PAGE_SCROLL),
            _ => {}
        }
    }

    /// Run the editor text and report the outcome in the status bar
    fn run_current(&mut self) {
        self.error_state = None;
        match self.session.run(&self.editor, &mut self.output) {
            Ok(report) => {
                self.status_message = format!("Finished: {} line(s) of output", report.chunks);
            }
            Err(ConsoleError::Evaluation(err)) => {
                self.status_message = String::from("Run failed");
                self.error_state = Some(ErrorState {
                    message: err.to_string(),
                    line: err.line(),
                });
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TICK_RATE;
    use crate::console::catalog::ProgramCatalog;
    use crate::console::evaluator::LoxEvaluator;
    use crate::console::surface::EditableSurface;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let session = ConsoleSession::new(ProgramCatalog::builtin(), Box::new(LoxEvaluator::new()));
        let mut app = App::new(session, DEFAULT_TICK_RATE);
        app.select("Hello World").unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_ctrl_r_runs_editor_text() {
        let mut app = app();
        ctrl(&mut app, 'r');
        assert_eq!(app.output.as_str(), "Hello World!");
        assert!(app.error_state.is_none());
    }

    #[test]
    fn test_edit_then_f5() {
        let mut app = app();
        app.editor.set_text("");
        type_str(&mut app, "print 1;");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "print 2;");
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.output.as_str(), "1\n2");
        assert_eq!(
            app.session().catalog().get("Hello World").unwrap(),
            r#"print "Hello World!";"#
        );
    }

    #[test]
    fn test_error_goes_to_status_and_keeps_output() {
        let mut app = app();
        app.editor.set_text("print 1;\nprint missing;");
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.output.as_str(), "1");
        let error = app.error_state.clone().unwrap();
        assert_eq!(error.line, Some(2));
        assert!(error.message.contains("missing"));
    }

    #[test]
    fn test_menu_selects_script() {
        let mut app = app();
        assert_eq!(app.menu.items()[0], "Loops");

        press(&mut app, KeyCode::F(2));
        assert!(app.menu.is_open());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(!app.menu.is_open());
        assert_eq!(app.session().current(), Some("Fibonacci"));
        assert_eq!(app.editor.text(), app.session().catalog().get("Fibonacci").unwrap());
        assert!(!app.menu.items().iter().any(|n| n == "Fibonacci"));
    }

    #[test]
    fn test_menu_swallows_editor_keys() {
        let mut app = app();
        let before = app.editor.text();
        press(&mut app, KeyCode::F(2));
        type_str(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);
        assert!(!app.menu.is_open());
        assert_eq!(app.editor.text(), before);
    }

    #[test]
    fn test_back_tab_toggles_focus_and_output_scrolls() {
        let mut app = app();
        app.editor.set_text("for (var i = 0; i < 50; i = i + 1) print i;");
        press(&mut app, KeyCode::F(5));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Output);

        screen(&mut app, 80, 24);
        let bottom = app.output.scroll;
        assert!(bottom > 0);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.output.scroll, bottom - PAGE_SCROLL);

        // Typing while the output is focused does not touch the editor
        type_str(&mut app, "abc");
        assert!(!app.editor.text().contains("abc"));
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = app();
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_panes_and_title() {
        let mut app = app();
        press(&mut app, KeyCode::F(5));
        let text = screen(&mut app, 100, 20);
        assert!(text.contains("loxpad"));
        assert!(text.contains("Hello World"));
        assert!(text.contains(" Editor "));
        assert!(text.contains(" Output "));
        assert!(text.contains("Hello World!"));
    }

    #[test]
    fn test_render_menu_popup() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        let text = screen(&mut app, 100, 20);
        assert!(text.contains(" Scripts "));
        assert!(text.contains("Closures"));
    }
}
