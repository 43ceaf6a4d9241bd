//! MPRIS service so desktop media keys and `playerctl` can drive the player.
//!
//! The D-Bus side runs on its own thread. Method calls are forwarded to the UI
//! thread as `ControlCmd`s; properties are served from a shared snapshot the
//! UI thread refreshes through `MprisHandle`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};
use std::time::Duration;

use async_io::{Timer, block_on};
use tracing::{debug, info, warn};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

use crate::catalog::Track;
use crate::transport::PlaybackState;

const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";
const BUS_NAME: &str = "org.mpris.MediaPlayer2.encore";
const TRACK_PATH_PREFIX: &str = "/org/mpris/MediaPlayer2/track/";
const MICROS_PER_SEC: i64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
    /// Relative seek in microseconds.
    Seek(i64),
    /// Absolute position in microseconds.
    SetPosition(i64),
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackState,
    position_secs: u32,
    track_id: Option<String>,
    title: Option<String>,
    artist: Option<String>,
    length_secs: u32,
    art_url: Option<String>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    /// A handle with no bus service behind it.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self {
            state: Arc::new(Mutex::new(SharedState::default())),
        }
    }

    pub fn set_playback(&self, playback: PlaybackState, position_secs: u32) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
            s.position_secs = position_secs;
        }
    }

    pub fn set_track(&self, track: &Track) {
        if let Ok(mut s) = self.state.lock() {
            s.track_id = Some(track.id.clone());
            s.title = Some(track.title.clone());
            s.artist = Some(track.artist.clone());
            s.length_secs = track.duration_secs;
            s.art_url = track.cover_url.clone();
        }
    }
}

/// Object path for a track id. Characters D-Bus does not allow in a path
/// element are replaced with `_`.
fn track_object_path(id: &str) -> String {
    let element: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{TRACK_PATH_PREFIX}{element}")
}

fn owned<'a>(value: impl Into<Value<'a>>) -> Option<OwnedValue> {
    OwnedValue::try_from(value.into()).ok()
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {}

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "encore"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    fn seek(&self, offset: i64) {
        let _ = self.tx.send(ControlCmd::Seek(offset));
    }

    /// Ignored unless `track_id` names the current track.
    fn set_position(&self, track_id: OwnedObjectPath, position: i64) {
        let current = self
            .state
            .lock()
            .ok()
            .and_then(|s| s.track_id.as_deref().map(track_object_path));
        if current.as_deref() != Some(track_id.as_str()) {
            debug!(track_id = track_id.as_str(), "set_position for a stale track ignored");
            return;
        }
        let _ = self.tx.send(ControlCmd::SetPosition(position));
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn position(&self) -> i64 {
        self.state
            .lock()
            .map(|s| i64::from(s.position_secs) * MICROS_PER_SEC)
            .unwrap_or(0)
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        if let Some(id) = s.track_id.as_deref() {
            let path = track_object_path(id);
            if let Some(v) = ObjectPath::try_from(path.as_str()).ok().and_then(owned) {
                map.insert("mpris:trackid".to_string(), v);
            }
            if let Some(v) = owned(i64::from(s.length_secs) * MICROS_PER_SEC) {
                map.insert("mpris:length".to_string(), v);
            }
        }
        if let Some(v) = s.title.clone().and_then(owned) {
            map.insert("xesam:title".to_string(), v);
        }
        if let Some(v) = s.artist.clone().and_then(|a| owned(vec![a])) {
            map.insert("xesam:artist".to_string(), v);
        }
        if let Some(v) = s.art_url.clone().and_then(owned) {
            map.insert("mpris:artUrl".to_string(), v);
        }
        map
    }
}

/// Register the MPRIS service on the session bus from a background thread.
///
/// Bus failures are logged and leave the player running without MPRIS.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    warn!(error = %e, "mpris: failed to connect to session bus");
                    return;
                }
            };

            if let Err(e) = connection.request_name(BUS_NAME).await {
                warn!(error = %e, "mpris: failed to acquire name");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server
                .at(OBJECT_PATH, RootIface { tx: tx.clone() })
                .await
            {
                warn!(error = %e, "mpris: failed to register root iface");
                return;
            }

            if let Err(e) = object_server
                .at(
                    OBJECT_PATH,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                warn!(error = %e, "mpris: failed to register player iface");
                return;
            }

            info!(name = BUS_NAME, "mpris service registered");

            // Keep the service alive.
            loop {
                Timer::after(Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}
