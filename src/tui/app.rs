//! Main TUI application

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame, Terminal,
};
use tracing::{info, warn};

use super::completion::CommandPopup;
use super::input::{handle_key, InputAction};
use super::theme::Theme;
use super::widgets::{render_entry_lines, HeaderBar, HelpBar, InputBox, Launcher, PROMPT_WIDTH};
use crate::console::{Console, DisplayState, Transcript};
use crate::preferences::{PreferenceStore, ThemePreference};
use crate::profile::Profile;

/// How long a second Ctrl+C counts as confirmation
const QUIT_CONFIRM_WINDOW: Duration = Duration::from_secs(2);
/// How long status notices stay on screen
const STATUS_TTL: Duration = Duration::from_secs(3);
/// Launcher badge blink period
const PULSE_PERIOD_MS: u128 = 600;
/// Largest panel the console will take
const PANEL_MAX_WIDTH: u16 = 72;
const PANEL_MAX_HEIGHT: u16 = 26;

const CLOSED_BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Open console"),
    ("Ctrl+T", "Theme"),
    ("q", "Quit"),
];
const OPEN_BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Run"),
    ("Tab", "Complete"),
    ("↑↓", "Recall"),
    ("PgUp/PgDn", "Scroll"),
    ("Ctrl+N", "Minimize"),
    ("Ctrl+T", "Theme"),
    ("Esc", "Close"),
];
const MINIMIZED_BINDINGS: &[(&str, &str)] = &[
    ("Ctrl+N", "Restore"),
    ("Ctrl+T", "Theme"),
    ("Esc", "Close"),
];

/// Footer notice that replaces the help bar for a while
struct Status {
    text: String,
    shown_at: Instant,
    is_error: bool,
}

/// Raw-mode alternate screen, restored on drop
struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Application state
pub struct App {
    profile: Profile,
    /// Created on first open, kept until the process exits
    console: Option<Console>,
    theme: Theme,
    store: PreferenceStore,
    popup: CommandPopup,
    /// Lines scrolled up from the newest entry
    scroll_offset: usize,
    should_quit: bool,
    quit_armed_at: Option<Instant>,
    status: Option<Status>,
    started: Instant,
    /// Transcript area from the last draw, for mouse hit-testing
    transcript_rect: Rect,
}

impl App {
    pub fn new(profile: Profile, theme: ThemePreference, store: PreferenceStore) -> Self {
        Self {
            profile,
            console: None,
            theme: Theme::new(theme),
            store,
            popup: CommandPopup::new(),
            scroll_offset: 0,
            should_quit: false,
            quit_armed_at: None,
            status: None,
            started: Instant::now(),
            transcript_rect: Rect::default(),
        }
    }

    pub fn console(&self) -> Option<&Console> {
        self.console.as_ref()
    }

    pub fn display(&self) -> DisplayState {
        self.console
            .as_ref()
            .map(Console::display)
            .unwrap_or(DisplayState::Closed)
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.mode()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Run the main event loop
    pub async fn run(&mut self) -> io::Result<()> {
        let mut tui = Tui::enter()?;
        let poll_timeout = Duration::from_millis(100);

        // Drain anything queued during terminal setup
        while event::poll(Duration::from_millis(0))? {
            let _ = event::read()?;
        }

        while !self.should_quit {
            tui.terminal.draw(|f| self.render(f))?;

            if event::poll(poll_timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        info!("Leaving TUI");
        Ok(())
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self.display() {
            DisplayState::Closed => match key.code {
                KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char(' ') if !ctrl => {
                    self.open_console();
                }
                KeyCode::Char('q') if !ctrl => self.should_quit = true,
                KeyCode::Char('c') if ctrl => self.arm_or_quit(),
                KeyCode::Char('t') if ctrl => self.toggle_theme().await,
                _ => {}
            },
            DisplayState::Minimized => match key.code {
                KeyCode::Char('n') if ctrl => self.with_console(Console::toggle_minimize),
                KeyCode::Esc => self.with_console(Console::close),
                KeyCode::Char('c') if ctrl => self.arm_or_quit(),
                KeyCode::Char('t') if ctrl => self.toggle_theme().await,
                _ => {}
            },
            DisplayState::Open => self.handle_console_key(key).await,
        }
    }

    async fn handle_console_key(&mut self, key: KeyEvent) {
        if self.popup.visible {
            match key.code {
                KeyCode::Up => {
                    self.popup.select_prev();
                    return;
                }
                KeyCode::Down => {
                    self.popup.select_next();
                    return;
                }
                KeyCode::Tab | KeyCode::Enter => {
                    let completed = self.popup.complete();
                    self.popup.close();
                    match completed {
                        Some(name) => {
                            self.with_console(|c| c.input_mut().set(name));
                            return;
                        }
                        // Nothing to complete: Enter still submits the line
                        None if key.code == KeyCode::Enter => {}
                        None => return,
                    }
                }
                KeyCode::Esc => {
                    self.popup.close();
                    return;
                }
                _ => {}
            }
        }

        let Some(console) = self.console.as_mut() else {
            return;
        };
        let action = handle_key(console.input_mut(), key);

        match action {
            InputAction::Submit => {
                let outcome = console.submit_input();
                if !outcome.is_ignored() {
                    self.scroll_to_bottom();
                }
            }
            InputAction::Quit => self.arm_or_quit(),
            InputAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_add(5);
            }
            InputAction::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(5);
            }
            InputAction::Tab => self.handle_tab_completion(),
            InputAction::Escape => console.close(),
            InputAction::ToggleMinimize => console.toggle_minimize(),
            InputAction::ToggleTheme => self.toggle_theme().await,
            InputAction::CopyLast => self.copy_last_output(),
            InputAction::Edited => {
                if self.popup.visible {
                    let prefix = console.input().as_str().to_string();
                    self.popup.set_filter(&prefix);
                }
            }
            InputAction::None => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.display() != DisplayState::Open {
            return;
        }
        let rect = self.transcript_rect;
        let inside = mouse.column >= rect.x
            && mouse.column < rect.x + rect.width
            && mouse.row >= rect.y
            && mouse.row < rect.y + rect.height;
        if !inside {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_add(3);
            }
            MouseEventKind::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(3);
            }
            _ => {}
        }
    }

    fn with_console(&mut self, f: impl FnOnce(&mut Console)) {
        if let Some(console) = self.console.as_mut() {
            f(console);
        }
    }

    fn open_console(&mut self) {
        let profile = self.profile;
        let console = self.console.get_or_insert_with(|| Console::new(profile));
        console.open();
        self.scroll_to_bottom();
    }

    fn handle_tab_completion(&mut self) {
        let Some(console) = self.console.as_mut() else {
            return;
        };
        let prefix = console.input().as_str().to_string();
        self.popup.open(&prefix);

        if let Some(name) = self.popup.single_match() {
            console.input_mut().set(name);
            self.popup.close();
        }
    }

    /// First Ctrl+C arms, a second one within the window quits
    fn arm_or_quit(&mut self) {
        match self.quit_armed_at {
            Some(armed_at) if armed_at.elapsed() <= QUIT_CONFIRM_WINDOW => {
                self.should_quit = true;
            }
            _ => {
                self.quit_armed_at = Some(Instant::now());
                self.set_status("Press Ctrl+C again to quit.");
            }
        }
    }

    async fn toggle_theme(&mut self) {
        let next = self.theme.mode().toggle();
        self.theme = Theme::new(next);
        match self.store.save(next).await {
            Ok(()) => self.set_status(format!("Theme: {}", next)),
            Err(e) => {
                warn!("Failed to save theme preference: {}", e);
                self.set_error_status(format!("Theme: {} (not saved: {})", next, e));
            }
        }
    }

    fn copy_last_output(&mut self) {
        let Some(text) = self
            .console
            .as_ref()
            .and_then(|c| c.transcript().last_output())
            .map(|entry| entry.text().to_string())
        else {
            return;
        };

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => self.set_status("Copied last output to clipboard"),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                self.set_error_status(format!("Clipboard unavailable: {}", e));
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            shown_at: Instant::now(),
            is_error: false,
        });
    }

    fn set_error_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            shown_at: Instant::now(),
            is_error: true,
        });
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Draw one frame
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        if area.height < 2 || area.width < 10 {
            return;
        }
        if let Some(status) = &self.status {
            if status.shown_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let display = self.display();
        let pulse = (self.started.elapsed().as_millis() / PULSE_PERIOD_MS) % 2 == 0;
        f.render_widget(
            Launcher {
                profile: &self.profile,
                theme: &self.theme,
                pulse,
                show_badge: display == DisplayState::Closed,
            },
            body,
        );

        match display {
            DisplayState::Closed => {}
            DisplayState::Open => self.render_panel(f, body, false),
            DisplayState::Minimized => self.render_panel(f, body, true),
        }

        if let Some(status) = &self.status {
            let style = if status.is_error {
                self.theme.error()
            } else {
                self.theme.warning()
            };
            let line = Line::from(vec![Span::raw(" "), Span::styled(status.text.clone(), style)]);
            f.render_widget(Paragraph::new(line), footer);
        } else {
            let bindings = match display {
                DisplayState::Closed => CLOSED_BINDINGS,
                DisplayState::Open => OPEN_BINDINGS,
                DisplayState::Minimized => MINIMIZED_BINDINGS,
            };
            f.render_widget(HelpBar { theme: &self.theme, bindings }, footer);
        }
    }

    fn render_panel(&mut self, f: &mut Frame, body: Rect, minimized: bool) {
        let width = body.width.saturating_sub(4).min(PANEL_MAX_WIDTH);
        let height = if minimized {
            3
        } else {
            body.height.saturating_sub(1).min(PANEL_MAX_HEIGHT)
        };
        if width < 20 || height < 3 {
            return;
        }
        let panel = Rect {
            x: body.x + body.width.saturating_sub(width + 2),
            y: body.y + body.height.saturating_sub(height),
            width,
            height,
        };

        f.render_widget(Clear, panel);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused());
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let title = format!("Ask {}'s Agent", self.profile.first_name());
        let header = HeaderBar {
            title: &title,
            theme: &self.theme,
            minimized,
        };

        if minimized {
            f.render_widget(header, inner);
            return;
        }

        let [header_area, transcript_area, input_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .areas(inner);
        f.render_widget(header, header_area);

        let Some(console) = self.console.as_ref() else {
            return;
        };

        let transcript_inner = transcript_area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });
        self.scroll_offset = Self::render_transcript(
            f,
            transcript_inner,
            console.transcript(),
            self.scroll_offset,
            &self.theme,
        );
        self.transcript_rect = transcript_inner;

        let separator = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border());
        let input_inner = separator.inner(input_area).inner(Margin {
            vertical: 0,
            horizontal: 1,
        });
        f.render_widget(separator, input_area);
        f.render_widget(
            InputBox {
                content: console.input().as_str(),
                theme: &self.theme,
            },
            input_inner,
        );

        if self.popup.visible {
            self.popup.render(f, input_area, &self.theme);
        }

        let typed_width = u16::try_from(console.input().display_width()).unwrap_or(u16::MAX);
        let cursor_x = input_inner
            .x
            .saturating_add(PROMPT_WIDTH)
            .saturating_add(typed_width);
        f.set_cursor_position((
            cursor_x.min(input_inner.right().saturating_sub(1)),
            input_inner.y,
        ));
    }

    /// Bottom-anchored transcript with a scrollbar. Returns the scroll
    /// offset clamped to what the content allows.
    fn render_transcript(
        f: &mut Frame,
        area: Rect,
        transcript: &Transcript,
        scroll_offset: usize,
        theme: &Theme,
    ) -> usize {
        let content_width = area.width.saturating_sub(1) as usize;
        let all_lines: Vec<Line> = transcript
            .iter()
            .flat_map(|entry| render_entry_lines(entry, content_width, theme))
            .collect();

        let total_lines = all_lines.len();
        let visible_height = area.height as usize;
        let max_scroll = total_lines.saturating_sub(visible_height);
        let actual_scroll = scroll_offset.min(max_scroll);

        let start = total_lines
            .saturating_sub(visible_height)
            .saturating_sub(actual_scroll);
        let visible: Vec<Line> = all_lines
            .into_iter()
            .skip(start)
            .take(visible_height)
            .collect();

        f.render_widget(Paragraph::new(visible), area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_symbol(Some("│"))
                .thumb_symbol("█");
            let mut state =
                ScrollbarState::new(max_scroll).position(max_scroll.saturating_sub(actual_scroll));
            f.render_stateful_widget(scrollbar, area, &mut state);
        }

        actual_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::CLEARED_MESSAGE;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        let store = PreferenceStore::new(dir.path().join("preferences.toml"));
        App::new(Profile::default(), ThemePreference::Dark, store)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
        app.handle_key(key(KeyCode::Enter)).await;
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_session_created_on_first_open() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        assert!(app.console().is_none());
        assert_eq!(app.display(), DisplayState::Closed);

        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.display(), DisplayState::Open);
        assert_eq!(app.console().unwrap().transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_typed_command_reaches_transcript() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        type_line(&mut app, "skills").await;
        type_line(&mut app, "clear").await;

        let console = app.console().unwrap();
        assert_eq!(console.transcript().len(), 1);
        assert_eq!(console.transcript().entries()[0].text(), CLEARED_MESSAGE);
        assert_eq!(console.input().as_str(), "");
    }

    #[tokio::test]
    async fn test_close_and_reopen_keeps_transcript() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        type_line(&mut app, "about").await;
        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.display(), DisplayState::Closed);
        app.handle_key(key(KeyCode::Char('o'))).await;
        assert_eq!(app.console().unwrap().transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_minimize_ignores_typing() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(ctrl('n')).await;
        assert_eq!(app.display(), DisplayState::Minimized);
        app.handle_key(key(KeyCode::Char('x'))).await;
        assert_eq!(app.console().unwrap().input().as_str(), "");
        app.handle_key(ctrl('n')).await;
        assert_eq!(app.display(), DisplayState::Open);
    }

    #[tokio::test]
    async fn test_tab_completes_single_match() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        for c in "pro".chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
        app.handle_key(key(KeyCode::Tab)).await;
        assert_eq!(app.console().unwrap().input().as_str(), "projects");
        assert!(!app.popup.visible);
    }

    #[tokio::test]
    async fn test_tab_popup_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(key(KeyCode::Char('s'))).await;
        app.handle_key(key(KeyCode::Tab)).await;
        assert!(app.popup.visible);
        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.console().unwrap().input().as_str(), "socials");
        // The completing Enter does not submit
        assert_eq!(app.console().unwrap().transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_enter_submits_when_popup_has_no_matches() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        for c in "zz".chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
        app.handle_key(key(KeyCode::Tab)).await;
        assert!(app.popup.visible);

        app.handle_key(key(KeyCode::Enter)).await;
        assert!(!app.popup.visible);
        let console = app.console().unwrap();
        assert_eq!(console.transcript().len(), 3);
        assert_eq!(console.transcript().entries()[1].text(), "> zz");
        assert!(console.transcript().entries()[2]
            .text()
            .starts_with("Command not found: \"zz\""));
        assert_eq!(console.input().as_str(), "");
    }

    #[tokio::test]
    async fn test_tab_with_no_matches_keeps_line() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(key(KeyCode::Char('z'))).await;
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        assert!(!app.popup.visible);
        assert_eq!(app.console().unwrap().input().as_str(), "z");
        assert_eq!(app.console().unwrap().transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_long_input_keeps_cursor_inside_box() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        app.handle_key(key(KeyCode::Enter)).await;
        let long_line = "x".repeat(70_000);
        app.console.as_mut().unwrap().input_mut().set(&long_line);

        terminal.draw(|f| app.render(f)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 90);
    }

    #[tokio::test]
    async fn test_unsaved_theme_shows_error_status() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = PreferenceStore::new(blocker.join("preferences.toml"));
        let mut app = App::new(Profile::default(), ThemePreference::Dark, store);

        app.handle_key(ctrl('t')).await;
        assert_eq!(app.theme(), ThemePreference::Light);
        assert!(app.status().unwrap().starts_with("Theme: light (not saved"));

        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        assert_eq!(terminal.backend().buffer()[(1, 29)].fg, Theme::RED);
    }

    #[tokio::test]
    async fn test_double_ctrl_c_quits() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(ctrl('c')).await;
        assert!(!app.should_quit());
        assert_eq!(app.status(), Some("Press Ctrl+C again to quit."));
        app.handle_key(ctrl('c')).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(ctrl('t')).await;
        assert_eq!(app.theme(), ThemePreference::Light);

        let store = PreferenceStore::new(dir.path().join("preferences.toml"));
        assert_eq!(store.load().await, ThemePreference::Light);
    }

    #[tokio::test]
    async fn test_render_panel_and_launcher() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();

        terminal.draw(|f| app.render(f)).unwrap();
        let closed = screen_text(&terminal);
        assert!(closed.contains("Alex Rivera"));
        assert!(closed.contains("Open console"));

        app.handle_key(key(KeyCode::Enter)).await;
        type_line(&mut app, "contact").await;
        terminal.draw(|f| app.render(f)).unwrap();
        let open = screen_text(&terminal);
        assert!(open.contains("Ask Alex's Agent"));
        assert!(open.contains("> contact"));
        assert!(open.contains("alex.rivera@example.com"));
    }
}
