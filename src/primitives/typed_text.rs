//! TypedText Primitive - A message revealed one character at a time.
//!
//! Wraps a [`TypewriterEngine`] and connects it to a shared tick clock.
//! The revealed text and the "typing has finished" flag are published as
//! signals so any display surface can bind to them.
//!
//! # Lifecycle
//!
//! - [`start`](TypedText::start) subscribes to the tick clock for the
//!   configured interval
//! - [`update`](TypedText::update) drains pending ticks, advancing the engine
//!   once per tick on the caller's thread
//! - Typing stops by itself once finished; [`stop`](TypedText::stop) or
//!   dropping the component cancels early
//! - When the message prop changes the engine restarts from scratch
//!
//! # Example
//!
//! ```ignore
//! use retro_text::primitives::{typed_text, TypedTextProps};
//!
//! let mut typed = typed_text(TypedTextProps {
//!     message: "Hello###, world.".into(),
//!     ..Default::default()
//! })?;
//! typed.start();
//!
//! while !typed.is_finished() {
//!     typed.update();
//!     draw(&typed.content().get());
//! }
//! ```

use std::time::Duration;

use spark_signals::{signal, Signal};

use crate::error::Result;
use crate::font::FontStyle;
use crate::state::animate::{get_tick_total, subscribe_to_ticks};
use crate::types::{Attr, Rgba};
use crate::typewriter::{Speed, TypewriterEngine};
use super::types::{Cleanup, PropValue, TypedTextProps};

// =============================================================================
// TypedText Component
// =============================================================================

/// Create a typed text component.
///
/// Fails if the props carry an invalid timing configuration.
pub fn typed_text(props: TypedTextProps) -> Result<TypedText> {
    TypedText::new(props)
}

/// A message being typed on to a display surface.
pub struct TypedText {
    message: PropValue<String>,
    engine: TypewriterEngine,
    tick_interval: Duration,
    content: Signal<String>,
    finished: Signal<bool>,
    font: Option<FontStyle>,
    attrs: Attr,
    fg: Rgba,
    debug: bool,
    unsubscribe: Option<Cleanup>,
    last_tick_total: u64,
}

impl TypedText {
    pub fn new(props: TypedTextProps) -> Result<Self> {
        props.config().validate()?;

        let engine =
            TypewriterEngine::with_sentence_pause(props.message.get(), props.speed, props.sentence_pause);
        let finished = props.finished.unwrap_or_else(|| signal(false));
        finished.set(engine.is_finished());

        Ok(Self {
            message: props.message,
            engine,
            tick_interval: props.tick_interval,
            content: signal(String::new()),
            finished,
            font: props.font,
            attrs: props.attrs,
            fg: props.fg,
            debug: props.debug,
            unsubscribe: None,
            last_tick_total: 0,
        })
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Subscribe to the shared tick clock. No-op if running or finished.
    pub fn start(&mut self) {
        if self.unsubscribe.is_some() || self.engine.is_finished() {
            return;
        }
        self.unsubscribe = Some(subscribe_to_ticks(self.tick_interval));
        self.last_tick_total = get_tick_total(self.tick_interval);
        log::debug!("typed text started at {:?}", self.tick_interval);
    }

    /// Cancel the clock subscription. Already revealed text stays.
    pub fn stop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
            log::debug!("typed text stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Process the ticks the clock emitted since the last call.
    ///
    /// Restarts the clock when a new message arrived after a finished run.
    /// Returns the number of ticks processed.
    pub fn update(&mut self) -> usize {
        if self.sync_message() {
            self.start();
        }
        if !self.is_running() {
            return 0;
        }

        let total = get_tick_total(self.tick_interval);
        let pending = total.saturating_sub(self.last_tick_total);
        self.last_tick_total = total;

        let mut processed = 0;
        for _ in 0..pending {
            processed += 1;
            if self.tick() {
                break;
            }
        }
        processed
    }

    /// Advance by exactly one tick, independent of the clock.
    ///
    /// Returns true once typing has finished.
    pub fn tick(&mut self) -> bool {
        self.sync_message();

        let snapshot = self.engine.advance();
        let finished = snapshot.finished;
        let revealed = snapshot.revealed.to_string();

        self.content.set(revealed);
        if finished {
            self.finished.set(true);
            self.stop();
        }
        finished
    }

    // =========================================================================
    // Message
    // =========================================================================

    /// Replace the message with a static value.
    ///
    /// Takes effect on the next tick or update.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = PropValue::Static(message.into());
    }

    /// Reset the engine if the message prop no longer matches what is typed.
    fn sync_message(&mut self) -> bool {
        let current = self.message.get();
        if current == self.engine.message() {
            return false;
        }

        log::debug!("typed text message changed, restarting");
        let speed = self.engine.speed();
        self.engine.reset(current, speed);
        self.content.set(String::new());
        self.finished.set(self.engine.is_finished());
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Revealed text signal for binding to a display surface.
    pub fn content(&self) -> Signal<String> {
        self.content.clone()
    }

    /// Signal that turns true once typing has finished.
    pub fn finished(&self) -> Signal<bool> {
        self.finished.clone()
    }

    pub fn revealed(&self) -> &str {
        self.engine.revealed()
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn speed(&self) -> Speed {
        self.engine.speed()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Font for GUI hosts; terminal rendering does not use it.
    pub fn font(&self) -> Option<FontStyle> {
        self.font
    }

    pub fn attrs(&self) -> Attr {
        self.attrs
    }

    pub fn fg(&self) -> Rgba {
        self.fg
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn engine(&self) -> &TypewriterEngine {
        &self.engine
    }
}

impl Drop for TypedText {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Tests
// =============================================================================
