//! Typewriter Engine - character-by-character reveal state machine.
//!
//! The engine owns the animation state for one message and exposes a single
//! transition, [`TypewriterEngine::advance`], called once per clock tick.
//! Timing is owned by whoever delivers the ticks.
//!
//! # Rules applied on each tick
//!
//! 1. Runs of spaces are revealed immediately, ignoring the speed gate.
//! 2. The tick counter increments; only every `speed.divisor()`-th tick
//!    considers a character.
//! 3. A pause marker (`#`) or a control character is consumed without
//!    being shown.
//! 4. A sentence-ending period (last grapheme, or followed by a space) is
//!    shown on its first visit, then held for `sentence_pause` more gated
//!    ticks before the cursor moves past it.
//! 5. Anything else is revealed and the cursor moves on.
//!
//! # Example
//!
//! ```ignore
//! use retro_text::typewriter::{Speed, TypewriterEngine};
//!
//! let mut engine = TypewriterEngine::new("Hi there", Speed::VeryFast);
//! while !engine.advance().finished {}
//! assert_eq!(engine.revealed(), "Hi there");
//! ```

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{DEFAULT_SENTENCE_PAUSE, PAUSE_MARKER, TypewriterConfig};
use super::Speed;

const SPACE: &str = " ";
const PERIOD: &str = ".";

// =============================================================================
// Snapshot
// =============================================================================

/// What the display surface should show after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Revealed prefix of the message, pause markers stripped.
    pub revealed: &'a str,
    /// True once the whole message has been consumed.
    pub finished: bool,
}

// =============================================================================
// TypewriterEngine
// =============================================================================

/// Reveal state for one message.
///
/// The message is segmented into extended grapheme clusters once, at
/// construction or [`reset`](Self::reset). Changing the message requires a
/// `reset`; `advance` assumes the message it was given is still current.
#[derive(Debug, Clone)]
pub struct TypewriterEngine {
    message: String,
    /// Byte range of each grapheme in `message`.
    graphemes: Vec<Range<usize>>,
    speed: Speed,
    sentence_pause: u32,
    cursor: usize,
    tick_count: u64,
    sentence_pause_countdown: u32,
    revealed: String,
    finished: bool,
}

impl TypewriterEngine {
    /// Create an engine using the default sentence pause.
    pub fn new(message: impl Into<String>, speed: Speed) -> Self {
        Self::with_sentence_pause(message, speed, DEFAULT_SENTENCE_PAUSE)
    }

    /// Create an engine holding sentence-ending periods for `sentence_pause`
    /// extra gated ticks.
    pub fn with_sentence_pause(message: impl Into<String>, speed: Speed, sentence_pause: u32) -> Self {
        let mut engine = Self {
            message: String::new(),
            graphemes: Vec::new(),
            speed,
            sentence_pause,
            cursor: 0,
            tick_count: 0,
            sentence_pause_countdown: sentence_pause,
            revealed: String::new(),
            finished: false,
        };
        engine.reset(message, speed);
        engine
    }

    /// Create an engine from a typewriter configuration.
    pub fn from_config(message: impl Into<String>, config: &TypewriterConfig) -> Self {
        Self::with_sentence_pause(message, config.speed, config.sentence_pause)
    }

    /// Start over with a new message and speed.
    ///
    /// Clears everything revealed so far. An empty message is finished
    /// immediately. Control characters (newlines, tabs, escapes) are never
    /// revealed; like pause markers they cost one gated tick each.
    pub fn reset(&mut self, message: impl Into<String>, speed: Speed) {
        self.message = message.into();
        self.graphemes = self
            .message
            .grapheme_indices(true)
            .map(|(start, g)| start..start + g.len())
            .collect();
        self.speed = speed;
        self.cursor = 0;
        self.tick_count = 0;
        self.sentence_pause_countdown = self.sentence_pause;
        self.revealed.clear();
        self.finished = self.graphemes.is_empty();

        log::debug!(
            "typewriter reset: {} graphemes at {:?}",
            self.graphemes.len(),
            speed
        );
    }

    /// Process one clock tick.
    ///
    /// Once finished, further calls return the same snapshot unchanged; the
    /// caller should stop its clock.
    pub fn advance(&mut self) -> Snapshot<'_> {
        if self.finished {
            return self.snapshot();
        }

        // Spaces are not rate limited.
        while self.grapheme_at(self.cursor) == Some(SPACE) {
            self.revealed.push_str(SPACE);
            self.cursor += 1;
            if self.cursor == self.graphemes.len() {
                self.finish();
                return self.snapshot();
            }
        }

        self.tick_count += 1;
        if self.tick_count % self.speed.divisor() != 0 {
            return self.snapshot();
        }

        let Some(current) = self.grapheme_at(self.cursor) else {
            // Out of range means the message is used up.
            self.finish();
            return self.snapshot();
        };

        if current == PAUSE_MARKER || is_control(current) {
            self.cursor += 1;
        } else if current == PERIOD && self.ends_sentence(self.cursor) {
            if self.sentence_pause_countdown == self.sentence_pause {
                self.revealed.push_str(PERIOD);
            }
            if self.sentence_pause_countdown > 0 {
                self.sentence_pause_countdown -= 1;
                return self.snapshot();
            }
            self.cursor += 1;
            self.sentence_pause_countdown = self.sentence_pause;
        } else {
            let range = self.graphemes[self.cursor].clone();
            self.revealed.push_str(&self.message[range]);
            self.cursor += 1;
        }

        if self.cursor == self.graphemes.len() {
            self.finish();
        }
        self.snapshot()
    }

    /// Current output without advancing.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            revealed: &self.revealed,
            finished: self.finished,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn sentence_pause(&self) -> u32 {
        self.sentence_pause
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Index of the next grapheme to consider.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ticks observed since the last reset (spaces-only ticks excluded).
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of graphemes in the message.
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    fn grapheme_at(&self, index: usize) -> Option<&str> {
        self.graphemes
            .get(index)
            .map(|range| &self.message[range.clone()])
    }

    fn ends_sentence(&self, index: usize) -> bool {
        match self.grapheme_at(index + 1) {
            None => true,
            Some(next) => next == SPACE,
        }
    }

    fn finish(&mut self) {
        self.cursor = self.graphemes.len();
        self.finished = true;
        log::trace!("typewriter finished after {} ticks", self.tick_count);
    }
}

/// Control graphemes stay out of the revealed text.
fn is_control(grapheme: &str) -> bool {
    grapheme.chars().any(char::is_control)
}

// =============================================================================
// Tests
// =============================================================================
