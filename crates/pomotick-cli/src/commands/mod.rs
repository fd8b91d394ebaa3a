pub mod config;
pub mod run;
pub mod simulate;

use clap::Args;
use pomotick_core::error::Result;
use pomotick_core::Config;

/// Per-invocation overrides layered over the config file.
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// Focus interval in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub focus: Option<u32>,
    /// Short break in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub short: Option<u32>,
    /// Long break in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub long: Option<u32>,
    /// Alternate focus and short breaks only, never taking a long break
    #[arg(long)]
    pub legacy: bool,
}

impl EngineArgs {
    /// Load the config file and apply these overrides on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(focus) = self.focus {
            config.durations.focus = focus;
        }
        if let Some(short) = self.short {
            config.durations.short_break = short;
        }
        if let Some(long) = self.long {
            config.durations.long_break = long;
        }
        if self.legacy {
            config.cadence.legacy_alternating = true;
        }
        Ok(config)
    }
}
