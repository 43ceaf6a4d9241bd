use tracing::{debug, info};

use crate::catalog::{Catalog, Track};

/// Whether the simulated clock is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// What a single tick did to the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed.
    Idle,
    /// Elapsed time moved forward by one second.
    Advanced,
    /// The track reached its end: playback paused and rewound to zero.
    Finished,
}

/// The transport state machine: current track, playing flag, elapsed time.
///
/// Invariant: `elapsed_secs <= current_track().duration_secs`.
#[derive(Debug, Clone)]
pub struct Transport {
    catalog: Catalog,
    current: usize,
    playback: PlaybackState,
    elapsed_secs: u32,
}

impl Transport {
    /// Start paused at the first catalog track.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: 0,
            playback: PlaybackState::Paused,
            elapsed_secs: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.current]
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.current_track().duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.duration_secs().saturating_sub(self.elapsed_secs)
    }

    /// `elapsed / duration * 100`.
    pub fn progress_percent(&self) -> f64 {
        let duration = self.duration_secs();
        if duration == 0 {
            return 0.0;
        }
        f64::from(self.elapsed_secs) / f64::from(duration) * 100.0
    }

    pub fn play_pause(&mut self) {
        self.playback = match self.playback {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        };
        debug!(playback = ?self.playback, "play/pause");
    }

    pub fn play(&mut self) {
        self.playback = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.playback = PlaybackState::Paused;
    }

    /// Pause and rewind the current track.
    pub fn stop(&mut self) {
        self.playback = PlaybackState::Paused;
        self.elapsed_secs = 0;
    }

    /// Move to the following track, wrapping to the first. Keeps the playing flag.
    pub fn next(&mut self) {
        let len = self.catalog.len();
        self.jump_to((self.current + 1) % len);
    }

    /// Move to the preceding track, wrapping to the last. Keeps the playing flag.
    pub fn previous(&mut self) {
        let len = self.catalog.len();
        self.jump_to((self.current + len - 1) % len);
    }

    /// Make the track with `id` current, rewind it and start playing.
    ///
    /// Returns `false` and leaves the state untouched when `id` is unknown.
    pub fn select_track(&mut self, id: &str) -> bool {
        if !self.cue(id) {
            return false;
        }
        self.playback = PlaybackState::Playing;
        true
    }

    /// Make the track with `id` current and rewind it, keeping the playing flag.
    pub fn cue(&mut self, id: &str) -> bool {
        match self.catalog.position(id) {
            Some(index) => {
                self.jump_to(index);
                true
            }
            None => false,
        }
    }

    /// Set elapsed time, clamped to `[0, duration]`.
    pub fn seek(&mut self, secs: u32) {
        self.elapsed_secs = secs.min(self.duration_secs());
        debug!(elapsed = self.elapsed_secs, "seek");
    }

    /// Scrub relative to the current position.
    pub fn seek_by(&mut self, delta_secs: i64) {
        let target = i64::from(self.elapsed_secs)
            .saturating_add(delta_secs)
            .max(0);
        self.seek(u32::try_from(target).unwrap_or(u32::MAX));
    }

    /// Advance the simulated clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }

        if self.elapsed_secs + 1 >= self.duration_secs() {
            self.playback = PlaybackState::Paused;
            self.elapsed_secs = 0;
            info!(track = %self.current_track().id, "track finished");
            return TickOutcome::Finished;
        }

        self.elapsed_secs += 1;
        TickOutcome::Advanced
    }

    fn jump_to(&mut self, index: usize) {
        self.current = index;
        self.elapsed_secs = 0;
        debug!(track = %self.current_track().id, "current track changed");
    }
}
