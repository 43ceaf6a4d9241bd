use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::test_env::{EnvGuard, env_lock};

#[test]
fn resolve_config_path_prefers_encore_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", "/tmp/encore-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/encore-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_theme_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
theme = "day"
header_text = "hello"
follow_playback = false
show_cover = false

[controls]
scrub_seconds = 9
tick_ms = 250

[playback]
autoplay = true
start_track = "2"

[cover]
enabled = false
timeout_ms = 1500

[log]
level = "encore=debug"
file = "/tmp/encore.log"

[mpris]
enabled = false

[[catalog.tracks]]
id = "intro"
title = "Intro"
artist = "Nobody"
duration_secs = 42

[[catalog.tracks]]
id = "outro"
title = "Outro"
artist = "Nobody"
duration_secs = 61
cover_url = "https://example.invalid/outro.png"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ENCORE__CONTROLS__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.theme, ThemeSetting::Light);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.subtitle_text, UiSettings::default().subtitle_text);
    assert!(!s.ui.follow_playback);
    assert!(!s.ui.show_cover);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.controls.tick_ms, 250);
    assert!(s.playback.autoplay);
    assert_eq!(s.playback.start_track.as_deref(), Some("2"));
    assert!(!s.cover.enabled);
    assert_eq!(s.cover.timeout_ms, 1500);
    assert_eq!(s.log.level, "encore=debug");
    assert_eq!(s.log.file, Some(std::path::PathBuf::from("/tmp/encore.log")));
    assert!(!s.mpris.enabled);
    assert_eq!(s.catalog.tracks.len(), 2);
    assert_eq!(s.catalog.tracks[0].id, "intro");
    assert_eq!(s.catalog.tracks[0].cover_url, None);
    assert_eq!(s.catalog.tracks[1].duration_secs, 61);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
tick_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ENCORE__CONTROLS__TICK_MS", "100");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.tick_ms, 100);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("does-not-exist.toml");
    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ENCORE__CONTROLS__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.tick_ms, 1000);
    assert_eq!(s.ui.theme, ThemeSetting::Dark);
    assert!(s.catalog.tracks.is_empty());
}

#[test]
fn validate_rejects_zero_periods_and_bad_catalogs() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.controls.tick_ms = 0;
    assert!(s.validate().unwrap_err().contains("tick_ms"));
    s.controls.tick_ms = 1000;

    s.cover.timeout_ms = 0;
    assert!(s.validate().unwrap_err().contains("timeout_ms"));
    s.cover.timeout_ms = 1;

    let dup = TrackSetting {
        id: "a".into(),
        title: "A".into(),
        artist: "B".into(),
        duration_secs: 10,
        cover_url: None,
    };
    s.catalog.tracks = vec![dup.clone(), dup];
    assert!(s.validate().unwrap_err().starts_with("catalog:"));
}

#[test]
fn to_toml_round_trips_through_the_schema() {
    let mut s = Settings::default();
    s.playback.start_track = Some("3".into());
    let text = s.to_toml().unwrap();

    assert!(text.contains("[ui]"));
    assert!(text.contains("theme = \"dark\""));
    assert!(text.contains("start_track = \"3\""));

    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed.playback.start_track.as_deref(), Some("3"));
    assert_eq!(parsed.controls.tick_ms, s.controls.tick_ms);
}
