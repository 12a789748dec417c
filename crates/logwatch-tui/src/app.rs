//! App — component-based event loop.
//!
//! Architecture:
//! - `App` owns the components and `AppState` (the session plus feed
//!   status) and is the only writer of either.
//! - A `tokio::mpsc` channel carries `AppMessage`s in from background
//!   tasks: terminal events and poll results.
//! - The loop draws a frame, then awaits the next message or timer.
//! - Components return `Vec<Action>`; the App applies each one to the
//!   session.

use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use logwatch_proto::protocol::LogRecord;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    components::{filter_panel::FilterPanel, group_list::GroupList},
    poll::{PollEngine, POLL_INTERVAL},
    widgets::status_bar::{self, InputMode},
    widgets::toast::Toast,
};

/// Events flowing into the main loop.
pub enum AppMessage {
    Event(Event),
    /// A poll finished: `Some` batch to merge, `None` when the response
    /// was discarded.
    Batch(Option<Vec<LogRecord>>),
}

pub struct App {
    state: AppState,
    group_list: GroupList,
    filter_panel: FilterPanel,
    toast: Toast,
    poll: PollEngine,
    focus: ComponentId,
    should_quit: bool,
}

impl App {
    pub fn new(feed_url: String) -> Self {
        Self {
            poll: PollEngine::new(&feed_url),
            state: AppState::new(feed_url),
            group_list: GroupList::new(),
            filter_panel: FilterPanel::new(),
            toast: Toast::new(),
            focus: ComponentId::GroupList,
            should_quit: false,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let (tx, mut rx) = mpsc::channel::<AppMessage>(256);

        // ── Background task: keyboard events ──────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // ── Timers ────────────────────────────────────────────────────────
        // Poll cadence; the first tick completes immediately, which is the
        // initial fetch.
        let mut poll_tick = tokio::time::interval(POLL_INTERVAL);
        poll_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // Toast expiry check.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        info!("polling {} every {:?}", self.state.feed_url, POLL_INTERVAL);

        // ── Main loop ─────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    needs_redraw = self.handle_message(msg);
                }
                _ = poll_tick.tick() => {
                    if self.poll.is_idle() {
                        self.poll.spawn_fetch(self.state.session.cursor(), tx.clone());
                    }
                }
                _ = ui_tick.tick() => {
                    needs_redraw = self.toast.tick();
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::Event(Event::Key(key)) => self.handle_key(key),
            AppMessage::Event(Event::Resize(_, _)) => true,
            AppMessage::Event(_) => false,
            AppMessage::Batch(None) => {
                self.poll.complete();
                let was_connected = self.state.connected;
                self.state.connected = false;
                was_connected
            }
            AppMessage::Batch(Some(batch)) => {
                self.poll.complete();
                self.state.connected = true;
                self.state.last_poll = Some(chrono::Local::now());
                if !batch.is_empty() {
                    let outcome = self.state.session.ingest(batch);
                    debug!(
                        touched = outcome.touched.len(),
                        cursor = self.state.session.cursor(),
                        "batch merged"
                    );
                    if let Some(category) = outcome.notify {
                        self.toast.notify(category);
                    }
                }
                true
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // The add-filter line captures everything while active.
        if self.filter_panel.is_editing() {
            let actions = self.filter_panel.handle_key(key, &self.state);
            for action in actions {
                self.dispatch(action);
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    ComponentId::GroupList => ComponentId::FilterPanel,
                    ComponentId::FilterPanel => ComponentId::GroupList,
                };
                return true;
            }
            KeyCode::Char('/') => {
                self.focus = ComponentId::FilterPanel;
                self.filter_panel.open_input();
                return true;
            }
            _ => {}
        }

        let actions = match self.focus {
            ComponentId::GroupList => self.group_list.handle_key(key, &self.state),
            ComponentId::FilterPanel => self.filter_panel.handle_key(key, &self.state),
        };
        for action in actions {
            self.dispatch(action);
        }
        true
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddFilter(text) => {
                if self.state.session.filters_mut().add(&text) {
                    info!(filter = %text, "watch filter added");
                }
            }
            Action::RemoveFilter(text) => {
                self.state.session.filters_mut().remove(&text);
            }
            Action::ClearFilters => {
                self.state.session.filters_mut().clear();
            }
            Action::ToggleGroup(category) => {
                self.state.session.toggle_open(&category);
                if let Some(group) = self.state.session.groups().get(&category) {
                    debug!(category = %group.category, open = group.open, "group toggled");
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.filter_panel.draw(
            frame,
            chunks[0],
            self.focus == ComponentId::FilterPanel,
            &self.state,
        );
        self.group_list.draw(
            frame,
            chunks[1],
            self.focus == ComponentId::GroupList,
            &self.state,
        );

        let mode = if self.filter_panel.is_editing() {
            InputMode::Insert
        } else {
            InputMode::Normal
        };
        status_bar::draw_status_bar(frame, chunks[2], mode, &self.state);

        self.toast.draw(frame, area);
    }
}
