//! UI rendering for the terminal user interface.
//!
//! `draw` renders one frame from `App` state and reports where the clickable
//! regions ended up, so mouse input can be resolved against what is on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};

mod controls;
mod format;
mod hit;
mod player;
mod track_list;

#[cfg(test)]
mod tests;

pub use format::{format_clock, format_mmss};
pub use hit::HitMap;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter", "play selected song");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L is filled dynamically from config.
    map.insert("t", "theme");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let order = ["j/k", "h/l", "H/L", "enter", "space/p", "gg/G", "t", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] scrub -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> HitMap {
    let palette = app.theme.palette();
    let base = Style::default()
        .bg(palette.surface.into())
        .fg(palette.text.into());
    frame.render_widget(Block::default().style(base), frame.area());

    let card_height = player::card_height(app.show_cover) + palette.shadow.offset_y;
    let [header_area, card_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(card_height),
        Constraint::Min(3),
        Constraint::Length(4),
    ])
    .areas(frame.area());

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            ui_settings.header_text.as_str(),
            Style::default()
                .fg(palette.text.into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            ui_settings.subtitle_text.as_str(),
            Style::default().fg(palette.text_secondary.into()),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.separator.into()))
            .title(" encore ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, header_area);

    let transport = player::draw_player_card(frame, card_area, app, palette);
    let (list, list_offset) = track_list::draw_track_list(frame, list_area, app, palette);

    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .style(Style::default().fg(palette.text_secondary.into()))
        .block(
            Block::bordered()
                .border_style(Style::default().fg(palette.separator.into()))
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, footer_area);

    HitMap {
        previous: transport.previous,
        play_pause: transport.play_pause,
        next: transport.next,
        progress: transport.progress,
        progress_duration: app.transport.duration_secs(),
        list,
        list_offset,
        list_len: app.track_count(),
    }
}
