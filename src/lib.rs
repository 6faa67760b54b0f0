//! # retro-text
//!
//! Retro typewriter text effects for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): the
//! revealed text and completion flag are published as signals that any
//! display surface can bind to.
//!
//! ## Architecture
//!
//! ```text
//! Tick clock (shared per interval) → TypedText::update → TypewriterEngine::advance
//!                                                      → content / finished signals
//!                                                      → LineRenderer (crossterm)
//! ```
//!
//! The engine is a plain state machine with no timers or shared state, so it
//! can also be driven directly from any frame loop.
//!
//! ## Modules
//!
//! - [`typewriter`] - Reveal state machine and speed levels
//! - [`state`] - Shared tick clocks
//! - [`primitives`] - TypedText component
//! - [`renderer`] - Terminal line renderer
//! - [`font`] - Bundled retro fonts and font styling
//! - [`config`] - Typewriter configuration and constants
//! - [`types`] - Colors and text attributes
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod font;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;
pub mod typewriter;

// Re-export commonly used items
pub use types::*;

pub use config::{
    TypewriterConfig, DEFAULT_MESSAGE, DEFAULT_SENTENCE_PAUSE, DEFAULT_TICK_INTERVAL, PAUSE_MARKER,
};

pub use error::{Result, RetroTextError};

pub use font::{
    is_font_registered, register_fonts, registered_fonts, retro_font, FontStyle, RetroFont,
    DEFAULT_FONT_SIZE,
};

pub use typewriter::{Snapshot, Speed, TypewriterEngine};

pub use primitives::{typed_text, Cleanup, PropValue, TypedText, TypedTextProps};

pub use renderer::LineRenderer;
