use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, HighlightSpacing, List, ListItem, ListState},
};

use crate::app::App;
use crate::catalog::Track;
use crate::theme::Palette;

use super::format::format_mmss;

const CURRENT_BAR: &str = "▌";

/// One list row: marker, title, artist, then the duration pushed right.
fn track_row<'a>(track: &'a Track, current: bool, width: u16, palette: &Palette) -> ListItem<'a> {
    let (marker, title_style, bg) = if current {
        (
            Span::styled(CURRENT_BAR, Style::default().fg(palette.primary.into())),
            Style::default()
                .fg(palette.text.into())
                .add_modifier(Modifier::BOLD),
            palette.tint(palette.primary, 0.2, palette.card),
        )
    } else {
        (
            Span::raw(" "),
            Style::default().fg(palette.text.into()),
            palette.tint(palette.secondary, 0.1, palette.card),
        )
    };

    let title = Span::styled(track.title.as_str(), title_style);
    let artist = Span::styled(
        format!("  {}", track.artist),
        Style::default().fg(palette.text_secondary.into()),
    );
    let duration = Span::styled(
        format_mmss(track.duration_secs),
        Style::default().fg(palette.text_tertiary.into()),
    );
    // Display columns, so wide glyphs count double.
    let used = marker.width() + title.width() + artist.width() + duration.width();
    let pad = usize::from(width).saturating_sub(used).max(1);

    let line = Line::from(vec![marker, title, artist, Span::raw(" ".repeat(pad)), duration]);
    ListItem::new(line).style(Style::default().bg(bg))
}

/// Draw the track list. Returns the inner area and the index of the first
/// visible row, so clicks can be mapped back to tracks.
pub(super) fn draw_track_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
) -> (Rect, usize) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border.into()))
        .title(" tracks ")
        .style(
            Style::default()
                .bg(palette.card.into())
                .fg(palette.text.into()),
        );
    let inner = block.inner(area);

    // The highlight symbol takes two columns of every row.
    let row_width = inner.width.saturating_sub(2);
    let current = app.transport.current_index();
    let items: Vec<ListItem> = app
        .transport
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, track)| track_row(track, i == current, row_width, palette))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);

    (inner, state.offset())
}
