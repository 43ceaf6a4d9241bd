//! Colour palettes and opacity helpers.
//!
//! Two palettes (`Palette::LIGHT`, `Palette::DARK`) share one shape. Terminals
//! have no alpha channel, so translucent colours are blended onto an opaque
//! background before rendering.

mod color;
mod palette;

pub use color::*;
pub use palette::*;
