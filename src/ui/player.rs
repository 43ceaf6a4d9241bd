use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::cover::{ART_COLS, ART_ROWS, ArtPixels};
use crate::theme::Palette;

use super::controls::{TRANSPORT_HEIGHT, TransportHits, draw_transport};

const PLACEHOLDER_GLYPH: &str = "♪";
const INFO_HEIGHT_WITHOUT_COVER: u16 = 4;

/// Total height of the player card, borders included.
pub(super) fn card_height(show_cover: bool) -> u16 {
    let top = if show_cover {
        ART_ROWS
    } else {
        INFO_HEIGHT_WITHOUT_COVER
    };
    top + 1 + TRANSPORT_HEIGHT + 2
}

/// Half-block renderer: each cell shows a top pixel (fg) and a bottom pixel (bg).
struct CoverArt<'a> {
    pixels: &'a ArtPixels,
}

impl Widget for CoverArt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let art_rows = self.pixels.len() / 2;
        let art_cols = self.pixels.first().map(|r| r.len()).unwrap_or(0);
        let rows = usize::from(area.height).min(art_rows);
        let cols = usize::from(area.width).min(art_cols);

        for cy in 0..rows {
            let top_row = &self.pixels[cy * 2];
            let bottom_row = self.pixels.get(cy * 2 + 1).unwrap_or(top_row);
            for cx in 0..cols {
                let (tr, tg, tb) = top_row[cx];
                let (br, bg, bb) = bottom_row.get(cx).copied().unwrap_or(top_row[cx]);
                let x = area.x + cx as u16;
                let y = area.y + cy as u16;
                buf[(x, y)]
                    .set_char('▀')
                    .set_fg(Color::Rgb(tr, tg, tb))
                    .set_bg(Color::Rgb(br, bg, bb));
            }
        }
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines: Vec<Line> = vec![Line::raw(""); usize::from(area.height.saturating_sub(1) / 2)];
    lines.push(Line::from(Span::styled(
        PLACEHOLDER_GLYPH,
        Style::default()
            .fg(palette.text_tertiary.into())
            .add_modifier(Modifier::BOLD),
    )));

    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.tint(palette.secondary, 0.1, palette.card)));
    frame.render_widget(placeholder, area);
}

fn draw_cover(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let pixels = app
        .current_track()
        .cover_url
        .as_deref()
        .and_then(|url| app.covers.pixels(url));

    match pixels {
        Some(pixels) => frame.render_widget(CoverArt { pixels }, area),
        None => draw_placeholder(frame, area, palette),
    }
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let track = app.current_track();
    let (status, status_color) = if app.transport.is_playing() {
        ("▶ Playing", palette.success)
    } else {
        ("⏸ Paused", palette.text_tertiary)
    };

    let lines = vec![
        Line::from(Span::styled(
            track.title.as_str(),
            Style::default()
                .fg(palette.text.into())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            track.artist.as_str(),
            Style::default().fg(palette.text_secondary.into()),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(status, Style::default().fg(status_color.into())),
            Span::styled(
                format!(
                    "  ·  track {} of {}",
                    app.transport.current_index() + 1,
                    app.track_count()
                ),
                Style::default().fg(palette.text_tertiary.into()),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the shadowed player card and return the transport's clickable regions.
///
/// `area` includes room for the shadow offset below and to the right.
pub(super) fn draw_player_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
) -> TransportHits {
    let shadow = palette.shadow;
    let card = Rect {
        width: area.width.saturating_sub(shadow.offset_x),
        height: area.height.saturating_sub(shadow.offset_y),
        ..area
    };
    let shadow_rect = Rect {
        x: card.x + shadow.offset_x,
        y: card.y + shadow.offset_y,
        ..card
    }
    .intersection(frame.area());
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.shadow_color())),
        shadow_rect,
    );

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border.into()))
        .title(" now playing ")
        .style(
            Style::default()
                .bg(palette.card.into())
                .fg(palette.text.into()),
        );
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let top_height = if app.show_cover {
        ART_ROWS
    } else {
        INFO_HEIGHT_WITHOUT_COVER
    };
    let [top, _, transport] = Layout::vertical([
        Constraint::Length(top_height),
        Constraint::Length(1),
        Constraint::Length(TRANSPORT_HEIGHT),
    ])
    .areas(inner);

    if app.show_cover {
        let [cover, _, info] = Layout::horizontal([
            Constraint::Length(ART_COLS),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(top);
        draw_cover(frame, cover, app, palette);
        draw_info(frame, info, app, palette);
    } else {
        draw_info(frame, top, app, palette);
    }

    draw_transport(frame, transport, app, palette)
}
