use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{Action, App};
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::{MprisSync, control_action};
use crate::transport::{TickOutcome, Ticker};
use crate::ui::{self, HitMap};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Clickable regions from the last drawn frame.
    pub hits: HitMap,
    mpris_sync: MprisSync,
    tick_period: Duration,
    /// Running exactly while the transport is playing.
    ticker: Option<Ticker>,
}

impl EventLoopState {
    pub fn new(controls: &config::ControlsSettings) -> Self {
        Self {
            pending_gg: false,
            hits: HitMap::default(),
            mpris_sync: MprisSync::default(),
            tick_period: Duration::from_millis(controls.tick_ms),
            ticker: None,
        }
    }

    /// Start or stop the ticker to match the playing flag.
    ///
    /// Stopping drops the ticker, which discards ticks that were not drained.
    pub fn sync_ticker(&mut self, playing: bool) {
        match (playing, self.ticker.is_some()) {
            (true, false) => {
                debug!(period = ?self.tick_period, "ticker started");
                self.ticker = Some(Ticker::start(self.tick_period));
            }
            (false, true) => {
                debug!("ticker stopped");
                self.ticker = None;
            }
            _ => {}
        }
    }

    #[cfg(test)]
    pub fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Apply queued ticks to the transport. Stops early when a track finishes.
    pub fn apply_ticks(&self, app: &mut App) {
        let Some(ticker) = &self.ticker else {
            return;
        };
        for _ in 0..ticker.drain() {
            if app.transport.tick() == TickOutcome::Finished {
                break;
            }
        }
    }
}

/// Translate a key press into an action. `pending_gg` carries the first `g`
/// of a `gg` chord between calls.
pub fn key_action(key: KeyEvent, pending_gg: &mut bool, scrub_seconds: u64) -> Option<Action> {
    let was_pending = std::mem::take(pending_gg);
    let scrub = i64::try_from(scrub_seconds).unwrap_or(i64::MAX);

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::PlayPause,
        KeyCode::Char('l') | KeyCode::Right => Action::Next,
        KeyCode::Char('h') | KeyCode::Left => Action::Previous,
        KeyCode::Char('L') => Action::SeekBy(scrub),
        KeyCode::Char('H') => Action::SeekBy(-scrub),
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Char('g') => {
            if was_pending {
                Action::CursorTop
            } else {
                *pending_gg = true;
                return None;
            }
        }
        KeyCode::Char('G') => Action::CursorBottom,
        KeyCode::Enter => Action::SelectCursor,
        KeyCode::Char('t') => Action::ToggleTheme,
        _ => return None,
    };
    Some(action)
}

/// Translate a mouse event into an action using the last frame's regions.
pub fn mouse_action(mouse: MouseEvent, hits: &HitMap) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hits.action_at(mouse.column, mouse.row),
        _ => None,
    }
}

/// Main terminal event loop: ticks, cover loads, drawing, MPRIS requests and
/// input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    mpris: Option<&MprisHandle>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        state.sync_ticker(app.transport.is_playing());
        state.apply_ticks(app);
        state.sync_ticker(app.transport.is_playing());

        app.covers.poll();
        app.request_current_cover();

        if let Some(mpris) = mpris {
            state.mpris_sync.update(mpris, app);
        }

        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app, &settings.ui, &settings.controls))?;
        state.hits = hits;

        while let Ok(cmd) = control_rx.try_recv() {
            debug!(?cmd, "mpris request");
            if app.apply(control_action(cmd)) {
                return Ok(());
            }
        }

        if event::poll(INPUT_POLL)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    key_action(key, &mut state.pending_gg, settings.controls.scrub_seconds)
                }
                Event::Mouse(mouse) => mouse_action(mouse, &state.hits),
                _ => None,
            };
            if let Some(action) = action {
                if app.apply(action) {
                    return Ok(());
                }
            }
        }
    }
}
