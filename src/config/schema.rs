use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub playback: PlaybackSettings,
    pub cover: CoverSettings,
    pub log: LogSettings,
    pub mpris: MprisSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Which palette to start with (`t` toggles at runtime).
    pub theme: ThemeSetting,
    /// Heading rendered at the top of the screen.
    pub header_text: String,
    /// Smaller line rendered under the heading.
    pub subtitle_text: String,
    /// Whether the list cursor follows the current track after next/previous.
    pub follow_playback: bool,
    /// Whether to fetch and draw cover art in the player card.
    pub show_cover: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::Dark,
            header_text: "Music Player".to_string(),
            subtitle_text: "A single-screen transport demo".to_string(),
            follow_playback: true,
            show_cover: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSetting {
    #[serde(alias = "Light", alias = "day")]
    Light,
    #[serde(alias = "Dark", alias = "night")]
    Dark,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Period of the simulated playback clock (milliseconds).
    pub tick_ms: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Start playing immediately.
    pub autoplay: bool,
    /// Id of the track to start on (defaults to the first).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_track: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverSettings {
    /// Whether cover URLs are fetched at all. When off, the placeholder is shown.
    pub enabled: bool,
    /// Whole-request timeout for a cover download (milliseconds).
    pub timeout_ms: u64,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when `ENCORE_LOG` is unset (e.g. `info`, `encore=debug`).
    pub level: String,
    /// Log file; defaults to `$XDG_STATE_HOME/encore/encore.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MprisSettings {
    /// Register `org.mpris.MediaPlayer2.encore` on the session bus.
    pub enabled: bool,
}

impl Default for MprisSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Replaces the built-in sample catalog when non-empty.
    pub tracks: Vec<TrackSetting>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackSetting {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_secs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}
