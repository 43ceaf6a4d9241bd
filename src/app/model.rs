//! Application model types: `App` and the `Action`s that mutate it.
//!
//! The `App` struct owns the transport, list cursor, active theme and cover
//! cache. It is the only state the UI reads, and `App::apply` is the only way
//! it changes.

use tracing::debug;

use crate::catalog::Track;
use crate::cover::CoverStore;
use crate::theme::ThemeName;
use crate::transport::Transport;

use super::action::Action;

/// The main application model.
pub struct App {
    pub transport: Transport,
    pub cursor: usize,
    pub theme: ThemeName,
    pub follow_playback: bool,
    pub show_cover: bool,
    pub covers: CoverStore,
}

impl App {
    /// Create a new `App` with the cursor on the current track.
    pub fn new(transport: Transport, covers: CoverStore) -> Self {
        let cursor = transport.current_index();
        Self {
            transport,
            cursor,
            theme: ThemeName::default(),
            follow_playback: true,
            show_cover: true,
            covers,
        }
    }

    pub fn current_track(&self) -> &Track {
        self.transport.current_track()
    }

    pub fn track_count(&self) -> usize {
        self.transport.catalog().len()
    }

    /// Apply `action`. Returns true when the app should quit.
    pub fn apply(&mut self, action: Action) -> bool {
        debug!(?action, "apply");
        match action {
            Action::PlayPause => self.transport.play_pause(),
            Action::Play => self.transport.play(),
            Action::Pause => self.transport.pause(),
            Action::Stop => self.transport.stop(),
            Action::Next => {
                self.transport.next();
                self.follow_current();
            }
            Action::Previous => {
                self.transport.previous();
                self.follow_current();
            }
            Action::Seek(secs) => self.transport.seek(secs),
            Action::SeekBy(delta) => self.transport.seek_by(delta),
            Action::Select(index) => self.select_index(index),
            Action::CursorDown => self.cursor_next(),
            Action::CursorUp => self.cursor_prev(),
            Action::CursorTop => self.cursor = 0,
            Action::CursorBottom => self.cursor = self.track_count() - 1,
            Action::SelectCursor => self.select_index(self.cursor),
            Action::ToggleTheme => self.theme = self.theme.toggled(),
            Action::Quit => return true,
        }
        false
    }

    /// Kick off a cover download for the current track if covers are shown.
    pub fn request_current_cover(&mut self) {
        if !self.show_cover {
            return;
        }
        if let Some(url) = self.transport.current_track().cover_url.clone() {
            self.covers.request(&url);
        }
    }

    fn select_index(&mut self, index: usize) {
        let Some(id) = self.transport.catalog().get(index).map(|t| t.id.clone()) else {
            return;
        };
        if self.transport.select_track(&id) {
            self.cursor = index;
        }
    }

    fn follow_current(&mut self) {
        if self.follow_playback {
            self.cursor = self.transport.current_index();
        }
    }

    /// Move the cursor down, wrapping to the top.
    fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % self.track_count();
    }

    /// Move the cursor up, wrapping to the bottom.
    fn cursor_prev(&mut self) {
        let len = self.track_count();
        self.cursor = (self.cursor + len - 1) % len;
    }
}
