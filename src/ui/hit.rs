use ratatui::layout::{Position, Rect};

use crate::app::Action;

/// Screen regions from the last frame, used to turn clicks into actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    pub previous: Rect,
    pub play_pause: Rect,
    pub next: Rect,
    /// The progress bar; a click seeks to the time under the pointer.
    pub progress: Rect,
    /// Duration of the current track when the frame was drawn.
    pub progress_duration: u32,
    /// Inner list area, one row per track.
    pub list: Rect,
    /// Index of the track drawn on the first list row.
    pub list_offset: usize,
    pub list_len: usize,
}

impl HitMap {
    /// The action a left click at (`column`, `row`) requests, if any.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);

        if self.play_pause.contains(pos) {
            return Some(Action::PlayPause);
        }
        if self.previous.contains(pos) {
            return Some(Action::Previous);
        }
        if self.next.contains(pos) {
            return Some(Action::Next);
        }
        if self.progress.contains(pos) {
            return Some(Action::Seek(self.seek_target(column)));
        }
        if self.list.contains(pos) {
            let index = usize::from(row - self.list.y) + self.list_offset;
            if index < self.list_len {
                return Some(Action::Select(index));
            }
        }
        None
    }

    /// Map a column on the progress bar to a position in seconds.
    ///
    /// The left edge is 0 and the right edge is the full duration.
    pub fn seek_target(&self, column: u16) -> u32 {
        let span = self.progress.width.saturating_sub(1);
        if span == 0 {
            return 0;
        }
        let offset = column.saturating_sub(self.progress.x).min(span);
        let fraction = f64::from(offset) / f64::from(span);
        (fraction * f64::from(self.progress_duration)).round() as u32
    }
}
