//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, kicks off the first fetch, drives the
//! crossterm event loop, and tears everything down cleanly on exit or panic.
//!
//! Fetches run on the tokio runtime; their outcomes come back as
//! [`FetchMsg`] values over an unbounded channel that the loop drains every
//! frame. Each message carries the id of the cycle that produced it so a
//! slow response from an earlier refresh cannot overwrite a newer one.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        row_list::{RowList, RowListState},
        status_bar::StatusBar,
    },
};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hirelist_core::{config::Config, present};
use hirelist_fetch::{spawn_fetch, FetchState, Fetcher};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Fetch messages
// ---------------------------------------------------------------------------

/// Outcome of one fetch cycle, delivered from the runtime to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMsg {
    Loaded { cycle: u64, body: String },
    Failed { cycle: u64, error: String },
}

impl FetchMsg {
    fn cycle(&self) -> u64 {
        match self {
            FetchMsg::Loaded { cycle, .. } | FetchMsg::Failed { cycle, .. } => *cycle,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub rows: RowListState,
    /// State of the current cycle. Parse failures count as failures.
    pub fetch: FetchState,
    /// Id of the current cycle; bumped on every refresh.
    pub cycle: u64,
    pub refreshed_at: Option<DateTime<Local>>,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        let mut rows = RowListState::default();
        rows.show_row_numbers = config.ui.show_row_numbers;
        Self {
            rows,
            fetch: FetchState::Idle,
            cycle: 0,
            refreshed_at: None,
            theme,
            config,
            show_help: false,
            quit: false,
        }
    }

    /// Start a new cycle and return its id. The previous cycle, finished or
    /// not, is abandoned.
    pub fn begin_cycle(&mut self) -> u64 {
        self.cycle += 1;
        self.fetch = FetchState::Idle;
        if let Err(e) = self.fetch.begin() {
            tracing::warn!(error = %e, "fetch state");
        }
        self.cycle
    }

    /// Apply the outcome of a fetch. Rows are replaced only when the body
    /// parses; on any failure the previous rows stay on screen.
    pub fn apply(&mut self, msg: FetchMsg) {
        if msg.cycle() != self.cycle {
            tracing::debug!(stale = msg.cycle(), current = self.cycle, "dropping stale fetch result");
            return;
        }

        let outcome = match msg {
            FetchMsg::Loaded { body, .. } => match present(&body, &mut self.rows) {
                Ok(count) => {
                    tracing::info!(rows = count, "list updated");
                    self.refreshed_at = Some(Local::now());
                    self.fetch.succeed()
                }
                Err(e) => {
                    tracing::error!(error = %e, "could not parse list");
                    self.fetch.fail(format!("parse error: {e}"))
                }
            },
            FetchMsg::Failed { error, .. } => self.fetch.fail(error),
        };
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "fetch state");
        }
    }

    fn placeholder(&self) -> &'static str {
        match self.fetch {
            FetchState::Pending => "loading…",
            _ => "(no rows)",
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<F: Fetcher + 'static> {
    state: AppState,
    runtime: Handle,
    fetcher: Arc<F>,
    tx: mpsc::UnboundedSender<FetchMsg>,
    rx: mpsc::UnboundedReceiver<FetchMsg>,
}

impl<F: Fetcher + 'static> App<F> {
    pub fn new(config: Config, theme: Theme, runtime: Handle, fetcher: Arc<F>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config, theme),
            runtime,
            fetcher,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Issue a new fetch cycle. Returns immediately.
    pub fn refresh(&mut self) {
        let cycle = self.state.begin_cycle();
        let url = self.state.config.source.url.clone();
        tracing::debug!(cycle, url = %url, "refresh");

        let ok_tx = self.tx.clone();
        let err_tx = self.tx.clone();
        spawn_fetch(
            &self.runtime,
            self.fetcher.clone(),
            url,
            move |body| {
                let _ = ok_tx.send(FetchMsg::Loaded { cycle, body });
            },
            move |err| {
                let _ = err_tx.send(FetchMsg::Failed {
                    cycle,
                    error: err.to_string(),
                });
            },
        );
    }

    /// Apply every fetch outcome that has arrived since the last frame.
    pub fn drain_fetches(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.state.apply(msg);
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.refresh();
        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.drain_fetches();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        if let Some(ev) = event::to_app_event(Event::Key(key)) {
                            tracing::debug!(event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape => self.state.show_help = false,
                AppEvent::Quit => self.state.quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Char('?') => self.state.show_help = true,
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.state.quit = true;
            }
            AppEvent::Refresh => self.refresh(),
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => self.state.rows.handle(&other),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: list | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        RowList::new(&state.rows, &state.config.ui.title, state.placeholder(), &state.theme),
        vert[0],
    );
    frame.render_widget(
        StatusBar::new(&state.fetch, state.rows.rows.len(), state.refreshed_at, &state.theme),
        vert[1],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
