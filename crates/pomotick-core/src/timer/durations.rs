use serde::{Deserialize, Serialize};

use super::mode::{Direction, Mode};

pub const DEFAULT_FOCUS_MIN: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MIN: u32 = 5;
pub const DEFAULT_LONG_BREAK_MIN: u32 = 10;

/// Shortest interval a mode can be configured to.
pub const MIN_DURATION_MIN: u32 = 1;

/// Configured length of each mode, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl Durations {
    /// Values below one minute are raised to one.
    pub fn new(focus: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            focus: focus.max(MIN_DURATION_MIN),
            short_break: short_break.max(MIN_DURATION_MIN),
            long_break: long_break.max(MIN_DURATION_MIN),
        }
    }

    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Configured duration in seconds.
    ///
    /// Uses saturating arithmetic so absurd minute counts cannot overflow.
    pub fn secs(&self, mode: Mode) -> u64 {
        u64::from(self.minutes(mode)).saturating_mul(60)
    }

    /// Adjust `mode` by one minute. Returns the new value, or `None` when a
    /// decrement would drop below one minute.
    pub fn adjust(&mut self, mode: Mode, direction: Direction) -> Option<u32> {
        let slot = self.slot_mut(mode);
        match direction {
            Direction::Increment => *slot = slot.saturating_add(1),
            Direction::Decrement => {
                if *slot <= MIN_DURATION_MIN {
                    return None;
                }
                *slot -= 1;
            }
        }
        Some(*slot)
    }

    fn slot_mut(&mut self, mode: Mode) -> &mut u32 {
        match mode {
            Mode::Focus => &mut self.focus,
            Mode::ShortBreak => &mut self.short_break,
            Mode::LongBreak => &mut self.long_break,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus: DEFAULT_FOCUS_MIN,
            short_break: DEFAULT_SHORT_BREAK_MIN,
            long_break: DEFAULT_LONG_BREAK_MIN,
        }
    }
}
