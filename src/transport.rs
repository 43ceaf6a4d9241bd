//! Simulated playback transport.
//!
//! `Transport` is the play/pause/next/previous/seek state machine over a
//! `Catalog`; `Ticker` is the cancellable one-second clock that drives it.

mod machine;
mod ticker;

pub use machine::*;
pub use ticker::*;
