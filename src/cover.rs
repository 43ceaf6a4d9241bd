//! Cover art loading.
//!
//! Covers are downloaded on background threads, decoded into a half-block
//! pixel grid and kept for the rest of the run. Anything that goes wrong
//! (bad URL, network failure, undecodable image) leaves the slot `Failed`,
//! which the player card renders as a placeholder glyph.

mod fetch;
mod store;

pub use fetch::*;
pub use store::*;

#[cfg(test)]
mod tests;
