use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Gauge, Paragraph},
};

use crate::app::App;
use crate::theme::Palette;

use super::format::format_clock;

/// Rows used by the transport: clock, progress bar, spacer, buttons.
pub(super) const TRANSPORT_HEIGHT: u16 = 4;

const BUTTON_WIDTH: u16 = 5;
const BUTTON_GAP: u16 = 2;

/// Clickable regions of the transport controls.
pub(super) struct TransportHits {
    pub previous: Rect,
    pub play_pause: Rect,
    pub next: Rect,
    pub progress: Rect,
}

/// Lay out three buttons centered in `row`.
fn button_rects(row: Rect) -> [Rect; 3] {
    let total = BUTTON_WIDTH * 3 + BUTTON_GAP * 2;
    let start = row.x + row.width.saturating_sub(total) / 2;
    let at = |i: u16| {
        Rect::new(start + i * (BUTTON_WIDTH + BUTTON_GAP), row.y, BUTTON_WIDTH, row.height)
            .intersection(row)
    };
    [at(0), at(1), at(2)]
}

pub(super) fn draw_transport(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
) -> TransportHits {
    let [clock_row, progress_row, _, button_row] =
        Layout::vertical([Constraint::Length(1); 4]).areas(area);

    let transport = &app.transport;
    let dim = Style::default().fg(palette.text_secondary.into());

    frame.render_widget(
        Paragraph::new(format_clock(transport.elapsed_secs())).style(dim),
        clock_row,
    );
    frame.render_widget(
        Paragraph::new(format_clock(transport.duration_secs()))
            .style(dim)
            .alignment(Alignment::Right),
        clock_row,
    );

    let ratio = (transport.progress_percent() / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .ratio(ratio)
        .label("")
        .use_unicode(true)
        .gauge_style(
            Style::default()
                .fg(palette.primary.into())
                .bg(palette.input_border.into()),
        );
    frame.render_widget(gauge, progress_row);

    let [previous, play_pause, next] = button_rects(button_row);
    let glyph = Style::default()
        .fg(palette.text.into())
        .add_modifier(Modifier::BOLD);

    frame.render_widget(
        Paragraph::new("⏮").style(glyph).alignment(Alignment::Center),
        previous,
    );

    let (play_glyph, play_bg) = if transport.is_playing() {
        ("⏸", palette.button_pressed)
    } else {
        ("▶", palette.button)
    };
    frame.render_widget(
        Paragraph::new(play_glyph)
            .style(
                Style::default()
                    .fg(palette.card.into())
                    .bg(play_bg.into())
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        play_pause,
    );

    frame.render_widget(
        Paragraph::new("⏭").style(glyph).alignment(Alignment::Center),
        next,
    );

    TransportHits {
        previous,
        play_pause,
        next,
        progress: progress_row,
    }
}
