//! Tick Clocks - Shared clocks per interval
//!
//! Drives typewriter effects with shared timers.
//! All typewriters at the same interval share a single timer so they type in step.
//!
//! # Pattern
//!
//! - Several messages typing every 50ms share one timer thread
//! - Timer starts with the first subscriber, stops when the last unsubscribes
//! - The timer thread only bumps an atomic total; engines are advanced by the
//!   subscriber on its own thread when it reads the total
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use retro_text::state::animate::{subscribe_to_ticks, get_tick_total};
//!
//! let interval = Duration::from_millis(50);
//! let unsubscribe = subscribe_to_ticks(interval);
//!
//! let seen = get_tick_total(interval);
//!
//! unsubscribe();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use spark_signals::{signal, Signal};

// =============================================================================
// CLOCK REGISTRY
// =============================================================================

/// Per-interval clock containing shared timer state
struct TickClock {
    /// Tick total signal (local, updated from the atomic on read)
    total: Signal<u64>,
    /// Thread-safe tick total written by the timer thread
    total_atomic: Arc<AtomicU64>,
    /// Background timer thread handle
    handle: Option<JoinHandle<()>>,
    /// Flag to signal timer thread to stop
    running: Arc<AtomicBool>,
    /// Number of active subscribers
    subscribers: usize,
}

thread_local! {
    /// Map from tick interval to clock
    static TICK_CLOCKS: RefCell<HashMap<Duration, TickClock>> = RefCell::new(HashMap::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to the tick clock for `interval`.
///
/// Returns an unsubscribe function that must be called when done.
/// Subscribers at the same interval share one timer.
///
/// A zero interval returns a no-op unsubscribe and starts nothing.
pub fn subscribe_to_ticks(interval: Duration) -> Box<dyn FnOnce()> {
    if interval.is_zero() {
        return Box::new(|| {});
    }

    TICK_CLOCKS.with(|clocks| {
        let mut clocks = clocks.borrow_mut();

        let clock = clocks.entry(interval).or_insert_with(|| TickClock {
            total: signal(0),
            total_atomic: Arc::new(AtomicU64::new(0)),
            handle: None,
            running: Arc::new(AtomicBool::new(false)),
            subscribers: 0,
        });

        clock.subscribers += 1;

        // Start timer if first subscriber
        if clock.subscribers == 1 {
            // Fresh flag so a thread left over from a previous run still exits
            clock.running = Arc::new(AtomicBool::new(true));
            let total_atomic = clock.total_atomic.clone();
            let running = clock.running.clone();

            log::debug!("tick clock {:?} started", interval);
            clock.handle = Some(thread::spawn(move || {
                while running.load(Ordering::SeqCst) {
                    thread::sleep(interval);
                    if running.load(Ordering::SeqCst) {
                        total_atomic.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }));
        }
    });

    Box::new(move || {
        TICK_CLOCKS.with(|clocks| {
            let mut clocks = clocks.borrow_mut();
            if let Some(clock) = clocks.get_mut(&interval) {
                clock.subscribers = clock.subscribers.saturating_sub(1);

                // Stop timer if no more subscribers
                if clock.subscribers == 0 {
                    clock.running.store(false, Ordering::SeqCst);
                    // Thread exits on its next wake; not joined to avoid blocking
                    clock.handle = None;
                    log::debug!("tick clock {:?} stopped", interval);
                }
            }
        });
    })
}

/// Total ticks emitted by the clock for `interval`.
///
/// Returns 0 if no clock exists. Also syncs the atomic total to the signal.
/// The total keeps counting across stop/start, so compare against a
/// previously read value rather than assuming it starts at zero.
pub fn get_tick_total(interval: Duration) -> u64 {
    TICK_CLOCKS.with(|clocks| {
        let mut clocks = clocks.borrow_mut();
        if let Some(clock) = clocks.get_mut(&interval) {
            let total = clock.total_atomic.load(Ordering::SeqCst);
            if clock.total.get() != total {
                clock.total.set(total);
            }
            total
        } else {
            0
        }
    })
}

/// Tick total signal for `interval`, or None if no clock exists.
///
/// Synced from the atomic whenever [`get_tick_total`] is called.
pub fn get_tick_signal(interval: Duration) -> Option<Signal<u64>> {
    TICK_CLOCKS.with(|clocks| {
        let clocks = clocks.borrow();
        clocks.get(&interval).map(|c| c.total.clone())
    })
}

/// Whether a clock is running for `interval`.
pub fn is_clock_running(interval: Duration) -> bool {
    TICK_CLOCKS.with(|clocks| {
        let clocks = clocks.borrow();
        clocks
            .get(&interval)
            .map(|c| c.running.load(Ordering::SeqCst) && c.subscribers > 0)
            .unwrap_or(false)
    })
}

/// Number of subscribers for `interval` (0 if no clock).
pub fn get_subscriber_count(interval: Duration) -> usize {
    TICK_CLOCKS.with(|clocks| {
        let clocks = clocks.borrow();
        clocks.get(&interval).map(|c| c.subscribers).unwrap_or(0)
    })
}

/// Stop all clocks and clear the registry (for testing).
pub fn reset_tick_clocks() {
    TICK_CLOCKS.with(|clocks| {
        let mut clocks = clocks.borrow_mut();

        for clock in clocks.values_mut() {
            clock.running.store(false, Ordering::SeqCst);
            clock.subscribers = 0;
        }

        clocks.clear();
    });
}

// =============================================================================
// TESTS
// =============================================================================
