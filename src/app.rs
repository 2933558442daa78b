//! Main application logic and TUI event loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use log::{info, warn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::cli::AppConfig;
use crate::data::{Day, Quantity};
use crate::tracker::TrackerState;
use crate::ui::{
    chart::{format_amount, Legend, TrackerChart},
    dialog::{DialogState, InputDialog},
    theme::Theme,
    widgets::StatusBar,
    HelpOverlay,
};

/// Terminal title and chart title.
pub(crate) const APP_TITLE: &str = "Personal Tracker";

/// How long to wait for a key event before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A key dispatch target on the chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    OpenEntry(Quantity),
    ToggleHelp,
    Quit,
}

/// Map a pressed key to its action on the chart view.
///
/// Dispatch is an explicit table so every binding is visible in one place;
/// keys not listed here are ignored.
fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::OpenEntry(Quantity::Water)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::OpenEntry(Quantity::Sleep)),
        KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Application state
pub struct App {
    theme: Theme,
    tracker: TrackerState,

    // UI state
    dialog: Option<DialogState>,
    show_help: bool,
    status_message: Option<String>,

    // Exit flag
    should_quit: bool,
}

impl App {
    /// Create a new App instance with seeded chart data.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let theme = Theme::load(&config.theme)?;

        Ok(App {
            theme,
            tracker: TrackerState::new(config.entry_mode),
            dialog: None,
            show_help: false,
            status_message: None,
            should_quit: false,
        })
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyCode) {
        // An open dialog owns the keyboard until confirmed or cancelled.
        if self.dialog.is_some() {
            self.handle_dialog_input(key);
            return;
        }

        // While help is shown, only closing it or quitting is possible.
        if self.show_help {
            match action_for_key(key) {
                Some(Action::ToggleHelp) => self.show_help = false,
                Some(Action::Quit) => self.should_quit = true,
                _ if key == KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action_for_key(key) {
            Some(Action::OpenEntry(quantity)) => {
                self.status_message = None;
                self.dialog = Some(DialogState::new(quantity));
            }
            Some(Action::ToggleHelp) => self.show_help = true,
            Some(Action::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Handle a key while an entry dialog is open.
    fn handle_dialog_input(&mut self, key: KeyCode) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match key {
            KeyCode::Esc => {
                // Cancelled: nothing is recorded.
                self.dialog = None;
            }
            KeyCode::Enter => match dialog.submit() {
                Ok(value) => {
                    let quantity = dialog.quantity;
                    let day = Day::today();
                    self.tracker.record(quantity, day, value);
                    info!(
                        "recorded {} {} for {day}",
                        format_amount(value),
                        quantity.unit()
                    );
                    self.status_message = Some(format!(
                        "{}: recorded {} {} for {day}",
                        quantity.title(),
                        format_amount(value),
                        quantity.unit()
                    ));
                    self.dialog = None;
                }
                Err(e) => {
                    // The dialog stays open showing the validation message.
                    warn!("rejected {} entry: {e}", dialog.quantity.title());
                }
            },
            KeyCode::Backspace => dialog.backspace(),
            KeyCode::Char(c) => dialog.push(c),
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        // Main layout: chart, legend line, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Chart
                Constraint::Length(1), // Legend
                Constraint::Length(2), // Status bar
            ])
            .split(size);

        let chart = TrackerChart::new(self.tracker.series(), &self.theme);
        chart.render(frame, chunks[0]);

        let legend = Legend::new(self.tracker.series(), &self.theme);
        legend.render(frame, chunks[1]);

        let status_bar = StatusBar::new(
            self.tracker.mode(),
            self.status_message.as_deref(),
            &self.theme,
        );
        status_bar.render(frame, chunks[2]);

        // Render the modal dialog over the chart if one is open
        if let Some(dialog) = &self.dialog {
            InputDialog::new(dialog, &self.theme).render(frame, size);
        }

        // Render help overlay if active
        if self.show_help {
            HelpOverlay::new(&self.theme).render(frame, size);
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() {
    // Best effort cleanup - ignore errors since we may be in a panic
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle(APP_TITLE)) {
        restore_terminal();
        return Err(e).context("Failed to setup terminal");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to create terminal");
        }
    };

    // Create app - if this fails, restore terminal first
    let mut app = match App::new(&config) {
        Ok(a) => a,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to initialize application");
        }
    };

    // Main loop - wrap in a closure to ensure cleanup
    let result = run_main_loop(&mut terminal, &mut app);

    // Always restore terminal, regardless of result
    restore_terminal();
    terminal.show_cursor().ok();

    result
}

/// Main application loop
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_input(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
