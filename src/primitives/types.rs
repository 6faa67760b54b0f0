//! Primitive types - Props and cleanup.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;
use std::time::Duration;

use spark_signals::Signal;

use crate::config::{DEFAULT_MESSAGE, TypewriterConfig};
use crate::font::FontStyle;
use crate::types::{Attr, Rgba};
use crate::typewriter::Speed;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by subscriptions.
///
/// Call this to release the subscription.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes are picked up on the next tick).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// =============================================================================
// Typed Text Props
// =============================================================================

/// Properties for the TypedText component.
///
/// # Example
///
/// ```ignore
/// use retro_text::primitives::{typed_text, TypedTextProps};
/// use spark_signals::signal;
///
/// let message = signal("Come with me###, and see.".to_string());
/// let done = signal(false);
///
/// let mut typed = typed_text(TypedTextProps {
///     message: message.clone().into(),
///     speed: Speed::Fast,
///     finished: Some(done.clone()),
///     ..Default::default()
/// })?;
///
/// // Later: a new message restarts the effect
/// message.set("Something else.".to_string());
/// ```
pub struct TypedTextProps {
    // =========================================================================
    // Content
    // =========================================================================

    /// The message to type. `#` pauses, sentence-ending periods hold.
    pub message: PropValue<String>,

    // =========================================================================
    // Timing
    // =========================================================================

    /// Characters are considered every `speed.divisor()` ticks.
    pub speed: Speed,
    /// Extra gated ticks held on a sentence-ending period.
    pub sentence_pause: u32,
    /// Period of the shared tick clock.
    pub tick_interval: Duration,

    // =========================================================================
    // Style
    // =========================================================================

    /// Font for GUI hosts that can select one. Terminal surfaces such as
    /// `LineRenderer` ignore it.
    pub font: Option<FontStyle>,
    /// Text attributes (bold, underline, ...).
    pub attrs: Attr,
    /// Foreground color.
    pub fg: Rgba,
    /// Frame the text region when rendered.
    pub debug: bool,

    // =========================================================================
    // Output binding
    // =========================================================================

    /// Signal set to true once typing has finished. Created internally if None.
    pub finished: Option<Signal<bool>>,
}

impl Default for TypedTextProps {
    fn default() -> Self {
        let config = TypewriterConfig::default();
        Self {
            message: PropValue::Static(DEFAULT_MESSAGE.to_string()),
            speed: config.speed,
            sentence_pause: config.sentence_pause,
            tick_interval: config.tick_interval,
            font: None,
            attrs: Attr::NONE,
            fg: Rgba::TERMINAL_DEFAULT,
            debug: config.debug,
            finished: None,
        }
    }
}

impl TypedTextProps {
    /// Props taking timing from a typewriter configuration.
    pub fn from_config(message: impl Into<PropValue<String>>, config: &TypewriterConfig) -> Self {
        Self {
            message: message.into(),
            speed: config.speed,
            sentence_pause: config.sentence_pause,
            tick_interval: config.tick_interval,
            debug: config.debug,
            ..Default::default()
        }
    }

    /// Timing part of the props as a configuration.
    pub fn config(&self) -> TypewriterConfig {
        TypewriterConfig {
            speed: self.speed,
            tick_interval: self.tick_interval,
            sentence_pause: self.sentence_pause,
            debug: self.debug,
        }
    }
}
