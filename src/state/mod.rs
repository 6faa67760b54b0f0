//! State Module - Runtime state shared between components
//!
//! - **Animate** - Shared tick clocks driving typewriter effects

pub mod animate;

pub use animate::{
    get_subscriber_count, get_tick_signal, get_tick_total, is_clock_running,
    reset_tick_clocks, subscribe_to_ticks,
};
