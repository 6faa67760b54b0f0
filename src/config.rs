//! Typewriter configuration.
//!
//! Plain value parameters, no file or wire format involved.

use std::time::Duration;

use crate::error::{Result, RetroTextError};
use crate::typewriter::Speed;

// =============================================================================
// Constants
// =============================================================================

/// Grapheme that pauses typing for one gated tick without being shown.
pub const PAUSE_MARKER: &str = "#";

/// Extra gated ticks spent on a sentence-ending period.
pub const DEFAULT_SENTENCE_PAUSE: u32 = 10;

/// Period of the driving clock.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Message typed when none is given.
pub const DEFAULT_MESSAGE: &str = "Come with me###, and see what has been foretold#.#.#.";

// =============================================================================
// TypewriterConfig
// =============================================================================

/// Configuration for a typewriter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Characters are considered every `speed.divisor()` ticks.
    pub speed: Speed,
    /// Wall-clock period between ticks.
    pub tick_interval: Duration,
    /// Extra gated ticks held on a sentence-ending period.
    pub sentence_pause: u32,
    /// Draw a frame around the text on the display surface.
    pub debug: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed: Speed::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            sentence_pause: DEFAULT_SENTENCE_PAUSE,
            debug: false,
        }
    }
}

impl TypewriterConfig {
    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_sentence_pause(mut self, sentence_pause: u32) -> Self {
        self.sentence_pause = sentence_pause;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Check that the configuration can drive a clock.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(RetroTextError::InvalidTickInterval(self.tick_interval));
        }
        Ok(())
    }
}
