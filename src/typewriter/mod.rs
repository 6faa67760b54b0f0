//! Typewriter Module - progressive reveal of a message over clock ticks.
//!
//! - [`Speed`] - tick divisor levels
//! - [`TypewriterEngine`] - the reveal state machine
//! - [`Snapshot`] - per-tick output for display surfaces
//!
//! The engine has no timers of its own. Something else (a shared tick clock,
//! a frame loop, a test) calls [`TypewriterEngine::advance`] once per tick and
//! stops calling it once the snapshot reports `finished`.

mod engine;
mod speed;

pub use engine::{Snapshot, TypewriterEngine};
pub use speed::Speed;

#[cfg(test)]
mod proptests;
