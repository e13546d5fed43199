//! Geographic policy: timezone resolution and regional defaults.
//!
//! Given coordinates and a civil date this module produces the UTC offset
//! actually in force on that date (DST included), plus the regional
//! defaults that depend on location: the candle lighting lead time and
//! the misheyakir depression angle.

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::constants::*;

mod timezone;

#[cfg(test)]
mod tests;

pub use timezone::guess_timezone_name;

/// Resolved timezone for one coordinate pair and date.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneInfo {
    /// IANA timezone name the offset was derived from
    pub name: String,
    /// UTC offset in hours in force on the query date, DST included
    pub offset_hours: f64,
    /// Whether daylight saving time is active on the query date
    pub dst: bool,
    /// Human label for the DST state, Hebrew for Israel
    pub dst_label: &'static str,
}

/// Resolve the timezone for a coordinate pair on a specific date.
///
/// An explicit IANA name bypasses the coordinate lookup. Without one,
/// coordinates outside every known region are a hard error; guessing an
/// offset would silently shift every computed time.
pub fn resolve_timezone(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    timezone_name: Option<&str>,
) -> Result<TimezoneInfo> {
    let name = match timezone_name {
        Some(name) => name.to_string(),
        None => guess_timezone_name(latitude, longitude)
            .ok_or_else(|| {
                anyhow!(
                    "Cannot determine timezone for coordinates ({}, {}). \
                     Please set an explicit timezone (e.g. \"Asia/Jerusalem\", \"America/New_York\").",
                    latitude,
                    longitude
                )
            })?
            .to_string(),
    };

    let tz: Tz = name
        .parse()
        .map_err(|_| anyhow!("Unknown IANA timezone name: {}", name))?;

    // Noon UTC avoids date boundary ambiguity near midnight offsets.
    let offset_hours = offset_hours_at(tz, noon_utc(date)?);

    // The standard offset is the smaller of the mid-January and mid-July
    // offsets, which works in both hemispheres. Mid-month avoids the
    // transition edges themselves.
    let year = date.year();
    let jan_offset = offset_hours_at(tz, noon_utc(mid_month(year, 1)?)?);
    let jul_offset = offset_hours_at(tz, noon_utc(mid_month(year, 7)?)?);
    let dst = offset_hours != jan_offset.min(jul_offset);

    let dst_label = match (name == "Asia/Jerusalem", dst) {
        (true, true) => "שעון קיץ",
        (true, false) => "שעון חורף",
        (false, true) => "Summer Time",
        (false, false) => "Standard Time",
    };

    Ok(TimezoneInfo {
        name,
        offset_hours,
        dst,
        dst_label,
    })
}

fn noon_utc(date: NaiveDate) -> Result<NaiveDateTime> {
    date.and_hms_opt(12, 0, 0)
        .ok_or_else(|| anyhow!("Invalid date: {}", date))
}

fn mid_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 15)
        .ok_or_else(|| anyhow!("Invalid date: {}-{:02}-15", year, month))
}

fn offset_hours_at(tz: Tz, datetime: NaiveDateTime) -> f64 {
    let offset_secs = tz.from_utc_datetime(&datetime).offset().fix().local_minus_utc();
    f64::from(offset_secs) / 3600.0
}

/// Coordinates inside the Israel bounding box.
pub fn is_israel(latitude: f64, longitude: f64) -> bool {
    (29.0..=34.0).contains(&latitude) && (34.0..=36.0).contains(&longitude)
}

/// Coordinates inside the Jerusalem metropolitan box.
pub fn is_jerusalem(latitude: f64, longitude: f64) -> bool {
    (31.7..=31.85).contains(&latitude) && (35.1..=35.25).contains(&longitude)
}

/// Regional default for the candle lighting lead time, in minutes.
///
/// Jerusalem keeps the 40 minute custom, the rest of Israel 30, and
/// everywhere else the common 18.
pub fn default_candle_minutes(latitude: f64, longitude: f64) -> u32 {
    if is_jerusalem(latitude, longitude) {
        CANDLE_MINUTES_JERUSALEM
    } else if is_israel(latitude, longitude) {
        CANDLE_MINUTES_ISRAEL
    } else {
        CANDLE_MINUTES_DEFAULT
    }
}

/// Regional default for the misheyakir depression angle, in degrees.
pub fn default_tefillin_degrees(latitude: f64, longitude: f64) -> f64 {
    if is_israel(latitude, longitude) {
        TEFILLIN_DEGREES_ISRAEL
    } else {
        TEFILLIN_DEGREES_DIASPORA
    }
}
