//! Primitives - Component building blocks.
//!
//! - [`typed_text`] - A message typed on to the screen one character at a time
//!
//! Props can be static values, signals or getters. Pass signals directly
//! rather than reading them first, or later changes will not be seen:
//!
//! ```ignore
//! // CORRECT - message changes restart the effect
//! typed_text(TypedTextProps { message: message_signal.into(), ..Default::default() });
//!
//! // WRONG - snapshot of the current message only
//! typed_text(TypedTextProps { message: message_signal.get().into(), ..Default::default() });
//! ```

mod types;
mod typed_text;

pub use types::*;
pub use typed_text::{typed_text, TypedText};
