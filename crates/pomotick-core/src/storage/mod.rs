mod config;

pub use config::{AlertConfig, CadenceConfig, ClockConfig, Config, DurationsConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the pomotick config directory.
///
/// `POMOTICK_CONFIG_DIR` overrides the platform location
/// (`~/.config/pomotick` on Linux). The directory is not created here.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os("POMOTICK_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|base| base.join("pomotick"))
        .ok_or(ConfigError::NoConfigDir)
}
