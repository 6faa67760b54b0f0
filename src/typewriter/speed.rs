//! Typing speed levels.

/// How fast a message is typed.
///
/// The value is a tick divisor: one character is considered every
/// `divisor()` ticks of the driving clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Speed {
    VeryFast = 1,
    Fast = 2,
    #[default]
    Normal = 4,
    Slow = 6,
}

impl Speed {
    /// Every speed level, fastest first.
    pub const ALL: [Speed; 4] = [Speed::VeryFast, Speed::Fast, Speed::Normal, Speed::Slow];

    /// Number of ticks required to advance one character position.
    pub const fn divisor(self) -> u64 {
        self as u64
    }
}
