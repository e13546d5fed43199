//! # Luach Library
//!
//! Internal library for the luach binary.
//!
//! This library exists to enable testing of the calculation internals and
//! to keep CLI dispatch (main.rs) separate from the domain logic.
//!
//! ## Architecture
//!
//! - **Solar**: `solar` module, the Meeus low-precision ephemeris
//!   (Julian dates, declination, equation of time, hour-angle solver,
//!   refraction and elevation corrections)
//! - **Derivation**: `zmanim` module, turning sun times into the halachic
//!   marker sets (GRA and Alter Rebbe) and the Shabbat boundary times
//! - **Geographic**: `geo` module for coordinate-to-timezone resolution
//!   and the regional candle/tefillin defaults
//! - **Configuration**: `config` module for TOML-based settings
//! - **Infrastructure**: argument parsing and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod config;
pub mod constants;
pub mod geo;
pub mod solar;
pub mod zmanim;

// Re-export for binary
pub use config::Config;
pub use zmanim::{ChabadZmanim, GraZmanim, Location, LocationOptions, ShabbosTimes, SolarDay};
