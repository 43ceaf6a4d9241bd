/// A request to change application state, from keys, clicks or MPRIS.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    /// Seek to an absolute position (seconds).
    Seek(u32),
    /// Scrub relative to the current position (seconds, may be negative).
    SeekBy(i64),
    /// Select the catalog entry at this index and start playing it.
    Select(usize),
    CursorDown,
    CursorUp,
    CursorTop,
    CursorBottom,
    /// Select whatever the list cursor is on.
    SelectCursor,
    ToggleTheme,
    Quit,
}
