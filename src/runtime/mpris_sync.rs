use crate::app::{Action, App};
use crate::mpris::{ControlCmd, MprisHandle};
use crate::transport::PlaybackState;

const MICROS_PER_SEC: i64 = 1_000_000;

/// Last snapshot pushed to MPRIS, so unchanged state is not re-sent.
#[derive(Debug, Default)]
pub struct MprisSync {
    track: Option<usize>,
    playback: Option<(PlaybackState, u32)>,
}

impl MprisSync {
    /// Push whatever changed since the last call. Returns true when anything
    /// was sent.
    pub fn update(&mut self, mpris: &MprisHandle, app: &App) -> bool {
        let mut changed = false;

        let index = app.transport.current_index();
        if self.track != Some(index) {
            mpris.set_track(app.current_track());
            self.track = Some(index);
            changed = true;
        }

        let playback = (app.transport.playback(), app.transport.elapsed_secs());
        if self.playback != Some(playback) {
            mpris.set_playback(playback.0, playback.1);
            self.playback = Some(playback);
            changed = true;
        }

        changed
    }
}

/// Microseconds to whole seconds, rounding half away from zero.
fn micros_to_secs(micros: i64) -> i64 {
    let half = MICROS_PER_SEC / 2;
    if micros >= 0 {
        micros.saturating_add(half) / MICROS_PER_SEC
    } else {
        micros.saturating_sub(half) / MICROS_PER_SEC
    }
}

/// Map an MPRIS request to the action it stands for.
pub fn control_action(cmd: ControlCmd) -> Action {
    match cmd {
        ControlCmd::Quit => Action::Quit,
        ControlCmd::Play => Action::Play,
        ControlCmd::Pause => Action::Pause,
        ControlCmd::PlayPause => Action::PlayPause,
        ControlCmd::Stop => Action::Stop,
        ControlCmd::Next => Action::Next,
        ControlCmd::Prev => Action::Previous,
        ControlCmd::Seek(micros) => Action::SeekBy(micros_to_secs(micros)),
        ControlCmd::SetPosition(micros) => {
            let secs = micros_to_secs(micros).max(0);
            Action::Seek(u32::try_from(secs).unwrap_or(u32::MAX))
        }
    }
}
