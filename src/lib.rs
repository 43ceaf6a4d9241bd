//! encore: a single-screen terminal music player with a simulated transport.
//!
//! Nothing is decoded or played; a one-second clock stands in for audio so the
//! player card, transport controls and track list behave like the real thing.

pub mod app;
pub mod catalog;
pub mod config;
pub mod cover;
pub mod logging;
pub mod mpris;
pub mod runtime;
pub mod theme;
pub mod transport;
pub mod ui;

#[cfg(test)]
mod test_env;
