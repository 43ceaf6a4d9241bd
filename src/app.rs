//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the transport, list cursor
//! and view preferences. `Action` lists every request a surface can make.

mod action;
mod model;

pub use action::*;
pub use model::*;

#[cfg(test)]
mod tests;
