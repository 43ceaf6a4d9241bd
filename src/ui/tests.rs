use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

use super::*;
use crate::app::Action;
use crate::catalog::{Catalog, Track};
use crate::config::CoverSettings;
use crate::cover::CoverStore;
use crate::transport::Transport;

fn app() -> App {
    let covers = CoverStore::new(&CoverSettings {
        enabled: false,
        ..CoverSettings::default()
    });
    App::new(Transport::new(Catalog::sample()), covers)
}

fn render(app: &App) -> (Buffer, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    let mut hits = HitMap::default();
    terminal
        .draw(|frame| {
            hits = draw(
                frame,
                app,
                &UiSettings::default(),
                &ControlsSettings::default(),
            )
        })
        .unwrap();
    (terminal.backend().buffer().clone(), hits)
}

fn screen_text(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width);
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn clock_formats() {
    assert_eq!(format_clock(0), "0:00");
    assert_eq!(format_clock(354), "5:54");
    assert_eq!(format_clock(3600), "60:00");
    assert_eq!(format_mmss(5), "00:05");
    assert_eq!(format_mmss(482), "08:02");
}

#[test]
fn controls_text_includes_scrub_seconds() {
    let text = controls_text(7);
    assert!(text.contains("[H/L] scrub -/+7s"));
    assert!(text.contains("[t] theme"));
    assert!(text.starts_with("[j/k] up/down"));
}

#[test]
fn renders_current_track_and_list() {
    let (buf, _) = render(&app());
    let text = screen_text(&buf);

    assert!(text.contains("Music Player"));
    assert!(text.contains("Bohemian Rhapsody"));
    assert!(text.contains("Queen"));
    assert!(text.contains("Stairway to Heaven"));
    assert!(text.contains("Hotel California"));
    assert!(text.contains("0:00"));
    assert!(text.contains("5:54"));
    assert!(text.contains("05:54"));
    assert!(text.contains("08:02"));
    assert!(text.contains("06:30"));
    assert!(text.contains("Paused"));
    assert!(text.contains("track 1 of 3"));
}

#[test]
fn renders_playing_status_and_elapsed() {
    let mut app = app();
    app.apply(Action::Play);
    app.apply(Action::Seek(65));
    let (buf, _) = render(&app);
    let text = screen_text(&buf);

    assert!(text.contains("Playing"));
    assert!(text.contains("1:05"));
}

#[test]
fn placeholder_shown_without_cover_pixels() {
    let (buf, _) = render(&app());
    assert!(screen_text(&buf).contains('♪'));

    let mut app = app();
    app.show_cover = false;
    let (buf, _) = render(&app);
    assert!(!screen_text(&buf).contains('♪'));
}

#[test]
fn theme_changes_surface_color() {
    let mut app = app();
    let (dark, _) = render(&app);
    app.apply(Action::ToggleTheme);
    let (light, _) = render(&app);

    let corner_dark = dark[(0, 0)].bg;
    let corner_light = light[(0, 0)].bg;
    assert_ne!(corner_dark, corner_light);
}

#[test]
fn hit_map_resolves_transport_buttons() {
    let (_, hits) = render(&app());

    let (x, y) = center(hits.play_pause);
    assert_eq!(hits.action_at(x, y), Some(Action::PlayPause));
    let (x, y) = center(hits.previous);
    assert_eq!(hits.action_at(x, y), Some(Action::Previous));
    let (x, y) = center(hits.next);
    assert_eq!(hits.action_at(x, y), Some(Action::Next));
    assert_eq!(hits.action_at(0, 0), None);
}

#[test]
fn hit_map_progress_click_seeks_to_target() {
    let (_, hits) = render(&app());
    let bar = hits.progress;
    assert_eq!(hits.progress_duration, 354);

    assert_eq!(hits.action_at(bar.x, bar.y), Some(Action::Seek(0)));
    assert_eq!(
        hits.action_at(bar.x + bar.width - 1, bar.y),
        Some(Action::Seek(354))
    );
    match hits.action_at(bar.x + bar.width / 2, bar.y) {
        Some(Action::Seek(secs)) => assert!((170..=184).contains(&secs)),
        other => panic!("expected a seek, got {other:?}"),
    }
}

#[test]
fn hit_map_list_rows_select_tracks() {
    let (_, hits) = render(&app());
    let list = hits.list;
    assert_eq!(hits.list_len, 3);

    assert_eq!(hits.action_at(list.x + 4, list.y), Some(Action::Select(0)));
    assert_eq!(
        hits.action_at(list.x + 4, list.y + 2),
        Some(Action::Select(2))
    );
    // Rows below the last track are empty.
    assert_eq!(hits.action_at(list.x + 4, list.y + 3), None);
}

#[test]
fn seek_target_handles_degenerate_bar() {
    let hits = HitMap {
        progress: Rect::new(10, 5, 1, 1),
        progress_duration: 100,
        ..HitMap::default()
    };
    assert_eq!(hits.seek_target(10), 0);

    let hits = HitMap {
        progress: Rect::new(10, 5, 11, 1),
        progress_duration: 100,
        ..HitMap::default()
    };
    assert_eq!(hits.seek_target(0), 0);
    assert_eq!(hits.seek_target(15), 50);
    assert_eq!(hits.seek_target(200), 100);
}

fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect()
}

#[test]
fn wide_titles_keep_duration_inside_the_row() {
    let track = |id: &str, title: &str, artist: &str, secs| Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        duration_secs: secs,
        cover_url: None,
    };
    let catalog = Catalog::new(vec![
        track("1", "Plain", "Someone", 200),
        track("2", "夜に駆ける", "YOASOBI", 258),
    ])
    .unwrap();
    let covers = CoverStore::new(&CoverSettings {
        enabled: false,
        ..CoverSettings::default()
    });
    let app = App::new(Transport::new(catalog), covers);

    let (buf, hits) = render(&app);
    let row = row_text(&buf, hits.list, hits.list.y + 1);
    assert!(row.contains("YOASOBI"), "row: {row:?}");
    assert!(row.trim_end().ends_with("04:18"), "row: {row:?}");
}
