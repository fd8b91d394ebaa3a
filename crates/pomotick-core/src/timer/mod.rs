mod cadence;
pub mod clock;
mod durations;
mod engine;
mod mode;

pub use cadence::{Cadence, DEFAULT_LONG_BREAK_EVERY};
pub use durations::{
    Durations, DEFAULT_FOCUS_MIN, DEFAULT_LONG_BREAK_MIN, DEFAULT_SHORT_BREAK_MIN,
    MIN_DURATION_MIN,
};
pub use engine::TimerEngine;
pub use mode::{Direction, Mode};
