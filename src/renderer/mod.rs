//! Renderer Module - Terminal display surfaces
//!
//! - [`LineRenderer`] - Draws revealed text on one terminal row

mod line;

pub use line::LineRenderer;
