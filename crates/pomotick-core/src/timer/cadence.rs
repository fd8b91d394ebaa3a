use serde::{Deserialize, Serialize};

use super::mode::Mode;

pub const DEFAULT_LONG_BREAK_EVERY: u32 = 4;

/// Rule deciding which mode follows a finished interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cadence {
    /// Short breaks, with a long break after every `long_break_every`-th focus.
    Classic { long_break_every: u32 },
    /// Legacy Focus/ShortBreak alternation. Never produces a long break.
    Alternating,
}

impl Cadence {
    /// Next mode after `finished` completes. `completed_focus_count` must
    /// already include the interval that just finished.
    pub fn next(&self, finished: Mode, completed_focus_count: u32) -> Mode {
        if finished.is_break() {
            return Mode::Focus;
        }
        match *self {
            Cadence::Classic { long_break_every } => {
                let every = long_break_every.max(1);
                if completed_focus_count > 0 && completed_focus_count % every == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Cadence::Alternating => Mode::ShortBreak,
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::Classic {
            long_break_every: DEFAULT_LONG_BREAK_EVERY,
        }
    }
}
