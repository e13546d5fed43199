//! Configuration system for luach with validation and location defaults.
//!
//! This module handles the TOML-based configuration file, validation, and
//! the search path for it. Every field is optional: anything absent falls
//! back to a built-in default or, for the regional values, to the policy
//! derived from the configured coordinates.
//!
//! ## Configuration Sources
//!
//! The configuration is read from `luach.toml`:
//! 1. A custom directory passed via `--config <dir>`
//! 2. **XDG_CONFIG_HOME**/luach/luach.toml otherwise
//!
//! A missing file is not an error; the built-in defaults are used.
//!
//! ## Configuration Structure
//!
//! ```toml
//! latitude = 31.778          # Geographic latitude (-90 to +90)
//! longitude = 35.235         # Geographic longitude (-180 to +180)
//! elevation = 650            # Observer elevation in meters (>= 0)
//! timezone = "Asia/Jerusalem" # IANA timezone name; omit for auto-resolution
//! candle_minutes = 40        # Candle lighting lead before sunset (0-120)
//! tefillin_degrees = 11.5    # Misheyakir depression angle (0-20)
//! ```
//!
//! ## Validation and Error Handling
//!
//! Out-of-range values produce errors naming the offending field and the
//! accepted range, so a typo in the file fails fast instead of producing
//! silently wrong times.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::*;

#[cfg(test)]
mod tests;

/// User configuration, loaded from `luach.toml`.
///
/// All fields are optional at this layer; coordinates must ultimately
/// come from here or from the command line before a calculation runs.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// Observer elevation in meters above sea level
    pub elevation: Option<f64>,
    /// IANA timezone name; when absent the timezone is resolved from coordinates
    pub timezone: Option<String>,
    /// Candle lighting lead before sunset, in minutes
    pub candle_minutes: Option<u32>,
    /// Misheyakir depression angle override, in degrees below the horizon
    pub tefillin_degrees: Option<f64>,
}

impl Config {
    /// Load the configuration, searching the standard path or a custom
    /// directory. A missing file yields the all-defaults configuration.
    pub fn load(custom_dir: Option<&str>) -> Result<Config> {
        let path = get_config_path(custom_dir)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_path(&path)
    }

    /// Load and validate the configuration at an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every present field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        if let Some(lat) = self.latitude {
            if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) || !lat.is_finite() {
                return Err(anyhow!(
                    "latitude must be between {} and {} degrees (got {})",
                    MIN_LATITUDE,
                    MAX_LATITUDE,
                    lat
                ));
            }
        }
        if let Some(lon) = self.longitude {
            if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) || !lon.is_finite() {
                return Err(anyhow!(
                    "longitude must be between {} and {} degrees (got {})",
                    MIN_LONGITUDE,
                    MAX_LONGITUDE,
                    lon
                ));
            }
        }
        if let Some(elev) = self.elevation {
            if !elev.is_finite() || elev < 0.0 {
                return Err(anyhow!(
                    "elevation must be a non-negative number of meters (got {})",
                    elev
                ));
            }
        }
        if let Some(tz) = &self.timezone {
            if tz.parse::<chrono_tz::Tz>().is_err() {
                return Err(anyhow!(
                    "timezone must be a valid IANA name such as \"Asia/Jerusalem\" (got \"{}\")",
                    tz
                ));
            }
        }
        if let Some(candles) = self.candle_minutes {
            if candles > MAX_CANDLE_MINUTES {
                return Err(anyhow!(
                    "candle_minutes must be at most {} (got {})",
                    MAX_CANDLE_MINUTES,
                    candles
                ));
            }
        }
        if let Some(deg) = self.tefillin_degrees {
            if !deg.is_finite() || !(0.0..=MAX_TEFILLIN_DEGREES).contains(&deg) {
                return Err(anyhow!(
                    "tefillin_degrees must be between 0 and {} (got {})",
                    MAX_TEFILLIN_DEGREES,
                    deg
                ));
            }
        }
        Ok(())
    }
}

/// Resolve the path of the configuration file.
pub fn get_config_path(custom_dir: Option<&str>) -> Result<PathBuf> {
    match custom_dir {
        Some(dir) => Ok(PathBuf::from(dir).join("luach.toml")),
        None => {
            let config_dir = dirs::config_dir()
                .context("Could not determine the user configuration directory")?;
            Ok(config_dir.join("luach").join("luach.toml"))
        }
    }
}
