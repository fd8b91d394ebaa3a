//! # Pomotick Core Library
//!
//! Core logic for the Pomotick Pomodoro timer: a single countdown that cycles
//! between focus intervals and breaks, with per-mode adjustable durations.
//! The CLI is a thin terminal shell over this library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A pure state machine; the caller invokes `tick()` once
//!   per elapsed second while it runs
//! - **Scheduler**: Repeating tick sources identified by handles, so stale
//!   ticks can be told apart from live ones
//! - **Session**: Serializes commands and ticks, owns the single tick
//!   registration, and drives the display and alert sinks
//! - **Storage**: TOML-based preferences for starting durations and cadence
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`Session`]: Driver wiring engine, scheduler and sinks together
//! - [`Scheduler`]: Trait for tick sources
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod input;
pub mod scheduler;
pub mod session;
pub mod sink;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use input::Command;
pub use scheduler::{ManualScheduler, Scheduler, TickHandle, TokioScheduler, TICK_INTERVAL};
pub use session::Session;
pub use sink::{AlertSink, DisplaySink, Frame, SilentAlert};
pub use storage::Config;
pub use timer::{Cadence, Direction, Durations, Mode, TimerEngine};
