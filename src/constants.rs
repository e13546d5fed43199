//! Fixed astronomical and halachic constants.
//!
//! Everything here is read-only process-wide state: zenith angles for the
//! individual markers, the fixed-minute offsets of the Alter Rebbe system,
//! and the physical constants feeding the refraction/elevation models.

/// Mean Earth radius in meters, used for the geometric horizon dip.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Standard-atmosphere pressure at sea level in hPa.
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// Apparent solar semi-diameter in degrees (16 arc minutes).
pub const SOLAR_SEMI_DIAMETER_DEG: f64 = 16.0 / 60.0;

/// Atmospheric refraction at the horizon at sea level in degrees (34 arc minutes).
pub const SEA_LEVEL_REFRACTION_DEG: f64 = 34.0 / 60.0;

/// Zenith for alos hashachar (dawn): sun 16.1° below the horizon.
pub const ALOS_ZENITH_DEG: f64 = 106.1;

/// Zenith for tzeis hakochavim (nightfall): sun 8.5° below the horizon.
pub const TZEIS_ZENITH_DEG: f64 = 98.5;

/// Fixed dawn/dusk offset of the Alter Rebbe system, in minutes.
pub const FIXED_ALOS_TZEIS_MINUTES: f64 = 72.0;

/// Misheyakir depression angle used inside Israel.
pub const TEFILLIN_DEGREES_ISRAEL: f64 = 11.5;

/// Misheyakir depression angle used outside Israel.
pub const TEFILLIN_DEGREES_DIASPORA: f64 = 10.2;

/// Candle lighting lead before sunset, in minutes.
pub const CANDLE_MINUTES_DEFAULT: u32 = 18;
pub const CANDLE_MINUTES_JERUSALEM: u32 = 40;
pub const CANDLE_MINUTES_ISRAEL: u32 = 30;

/// Validation bounds for configuration values.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MAX_CANDLE_MINUTES: u32 = 120;
pub const MAX_TEFILLIN_DEGREES: f64 = 20.0;
