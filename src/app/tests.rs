use super::*;
use crate::catalog::Catalog;
use crate::config::CoverSettings;
use crate::cover::CoverStore;
use crate::theme::ThemeName;
use crate::transport::Transport;

fn app() -> App {
    let covers = CoverStore::new(&CoverSettings {
        enabled: false,
        ..CoverSettings::default()
    });
    App::new(Transport::new(Catalog::sample()), covers)
}

#[test]
fn new_app_starts_on_first_track_paused() {
    let app = app();
    assert_eq!(app.cursor, 0);
    assert_eq!(app.current_track().title, "Bohemian Rhapsody");
    assert!(!app.transport.is_playing());
    assert_eq!(app.track_count(), 3);
}

#[test]
fn next_previous_move_cursor_when_following() {
    let mut app = app();
    app.apply(Action::Next);
    assert_eq!(app.cursor, 1);
    app.apply(Action::Previous);
    app.apply(Action::Previous);
    assert_eq!(app.cursor, 2);
    assert_eq!(app.current_track().title, "Hotel California");
}

#[test]
fn free_roaming_cursor_stays_put() {
    let mut app = app();
    app.follow_playback = false;
    app.apply(Action::Next);
    assert_eq!(app.cursor, 0);
    assert_eq!(app.transport.current_index(), 1);
}

#[test]
fn cursor_moves_wrap() {
    let mut app = app();
    app.apply(Action::CursorUp);
    assert_eq!(app.cursor, 2);
    app.apply(Action::CursorDown);
    assert_eq!(app.cursor, 0);
    app.apply(Action::CursorBottom);
    assert_eq!(app.cursor, 2);
    app.apply(Action::CursorTop);
    assert_eq!(app.cursor, 0);
}

#[test]
fn select_cursor_plays_that_track() {
    let mut app = app();
    app.apply(Action::CursorDown);
    app.apply(Action::SelectCursor);
    assert_eq!(app.current_track().title, "Stairway to Heaven");
    assert!(app.transport.is_playing());
    assert_eq!(app.transport.elapsed_secs(), 0);
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut app = app();
    app.apply(Action::Select(99));
    assert_eq!(app.transport.current_index(), 0);
    assert!(!app.transport.is_playing());
}

#[test]
fn select_moves_cursor_to_selection() {
    let mut app = app();
    app.apply(Action::Select(2));
    assert_eq!(app.cursor, 2);
    assert!(app.transport.is_playing());
}

#[test]
fn seek_actions_reach_transport() {
    let mut app = app();
    app.apply(Action::Seek(100));
    assert_eq!(app.transport.elapsed_secs(), 100);
    app.apply(Action::SeekBy(-30));
    assert_eq!(app.transport.elapsed_secs(), 70);
    app.apply(Action::Seek(u32::MAX));
    assert_eq!(app.transport.elapsed_secs(), 354);
}

#[test]
fn play_pause_stop_actions() {
    let mut app = app();
    app.apply(Action::Play);
    assert!(app.transport.is_playing());
    app.apply(Action::Pause);
    assert!(!app.transport.is_playing());
    app.apply(Action::PlayPause);
    assert!(app.transport.is_playing());
    app.apply(Action::Seek(12));
    app.apply(Action::Stop);
    assert!(!app.transport.is_playing());
    assert_eq!(app.transport.elapsed_secs(), 0);
}

#[test]
fn toggle_theme_and_quit() {
    let mut app = app();
    assert_eq!(app.theme, ThemeName::Dark);
    assert!(!app.apply(Action::ToggleTheme));
    assert_eq!(app.theme, ThemeName::Light);
    assert!(app.apply(Action::Quit));
}

#[test]
fn request_current_cover_respects_show_cover() {
    let mut app = app();
    app.show_cover = false;
    app.request_current_cover();
    let url = app.current_track().cover_url.clone().unwrap();
    assert!(app.covers.get(&url).is_none());
}
