//! The song catalog: a fixed, ordered list of tracks.
//!
//! The catalog is built once at startup (either the built-in sample or the
//! configured track list) and never changes afterwards.

mod model;
mod sample;

pub use model::*;
