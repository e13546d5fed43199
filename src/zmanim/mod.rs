//! Halachic time derivation.
//!
//! `SolarDay` binds a [`Location`] to one civil date and derives the
//! daily markers from repeated ephemeris queries: the GRA set (the
//! default, proportional hours between sea-level-adjusted sunrise and
//! sunset), the Alter Rebbe set (fixed 72-minute dawn/dusk bounds for
//! Shema and Tefila), and the Shabbat boundary times for the
//! surrounding Friday/Saturday.
//!
//! Every marker is an independent `Option<f64>` of decimal local hours.
//! A marker whose geometry has no solution on the query date is `None`;
//! its siblings are computed normally and never substituted.

use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate};

use crate::constants::*;
use crate::geo::{self, TimezoneInfo};
use crate::solar::{self, SunTimes};

pub mod display;


/// Observer position and the per-location halachic parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Geographic latitude in degrees
    pub latitude: f64,
    /// Geographic longitude in degrees
    pub longitude: f64,
    /// Observer elevation in meters above sea level
    pub elevation: f64,
    /// UTC offset in hours in force on the query date, DST included
    pub utc_offset_hours: f64,
    /// Candle lighting lead before Friday sunset, in minutes
    pub candle_minutes: u32,
    /// Misheyakir depression angle below the horizon, in degrees
    pub tefillin_degrees: f64,
}

/// Optional overrides for [`Location::from_coordinates`].
#[derive(Debug, Clone, Default)]
pub struct LocationOptions {
    pub elevation: Option<f64>,
    pub timezone_name: Option<String>,
    pub candle_minutes: Option<u32>,
    pub tefillin_degrees: Option<f64>,
}

impl Location {
    /// Build a location from bare coordinates, resolving the timezone for
    /// the query date and filling the regional defaults for anything not
    /// overridden.
    ///
    /// Fails when the coordinates match no known timezone region and no
    /// explicit name was given.
    pub fn from_coordinates(
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
        options: &LocationOptions,
    ) -> Result<(Location, TimezoneInfo)> {
        let tz = geo::resolve_timezone(latitude, longitude, date, options.timezone_name.as_deref())?;

        let location = Location {
            latitude,
            longitude,
            elevation: options.elevation.unwrap_or(0.0),
            utc_offset_hours: tz.offset_hours,
            candle_minutes: options
                .candle_minutes
                .unwrap_or_else(|| geo::default_candle_minutes(latitude, longitude)),
            tefillin_degrees: options
                .tefillin_degrees
                .unwrap_or_else(|| geo::default_tefillin_degrees(latitude, longitude)),
        };

        Ok((location, tz))
    }
}

/// The GRA marker set for one day, in decimal local hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraZmanim {
    pub alos: Option<f64>,
    pub misheyakir: Option<f64>,
    pub sunrise: Option<f64>,
    pub shema: Option<f64>,
    pub tefila: Option<f64>,
    pub chatzos: Option<f64>,
    pub mincha_gedola: Option<f64>,
    pub mincha_gedola_gra: Option<f64>,
    pub mincha_ketana: Option<f64>,
    pub plag_hamincha: Option<f64>,
    pub sunset: Option<f64>,
    pub tzeis: Option<f64>,
    pub shaa_zmanit: Option<f64>,
}

/// The Alter Rebbe marker set for one day, in decimal local hours.
///
/// The markers with no Alter Rebbe variant carry the same values the
/// GRA pass would produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChabadZmanim {
    pub alos72: Option<f64>,
    pub misheyakir: Option<f64>,
    pub sunrise: Option<f64>,
    pub shema_gra: Option<f64>,
    pub shema_ar: Option<f64>,
    pub tefila_gra: Option<f64>,
    pub tefila_ar: Option<f64>,
    pub chatzos: Option<f64>,
    pub mincha_gedola: Option<f64>,
    pub mincha_ketana: Option<f64>,
    pub plag_hamincha: Option<f64>,
    pub sunset: Option<f64>,
    pub tzeis: Option<f64>,
    pub tzeis_rt: Option<f64>,
    pub chatzot_layla: Option<f64>,
}

/// Shabbat boundary times for the Friday/Saturday surrounding a date.
#[derive(Debug, Clone, PartialEq)]
pub struct ShabbosTimes {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
    /// Friday elevated-horizon sunset minus the candle lead, local hours
    pub candle_lighting: Option<f64>,
    /// Saturday nightfall at 8.5° below the horizon, local hours
    pub shabbos_ends: Option<f64>,
    /// Candle lighting as a Unix timestamp at the query's UTC offset
    pub candle_lighting_epoch: Option<i64>,
    /// Shabbat end as a Unix timestamp at the query's UTC offset
    pub shabbos_ends_epoch: Option<i64>,
}

/// One location on one civil date, the unit every derivation runs over.
#[derive(Debug, Clone)]
pub struct SolarDay {
    pub location: Location,
    pub date: NaiveDate,
}

impl SolarDay {
    pub fn new(location: Location, date: NaiveDate) -> Self {
        SolarDay { location, date }
    }

    /// Sunrise/sunset on the query date for one zenith angle.
    fn sun_times(&self, zenith: f64) -> SunTimes {
        self.sun_times_on(self.date, zenith)
    }

    /// Sunrise/sunset on an arbitrary date for one zenith angle. Each
    /// call is a full independent ephemeris evaluation.
    fn sun_times_on(&self, date: NaiveDate, zenith: f64) -> SunTimes {
        solar::calc_sun_times(
            date.year(),
            date.month(),
            date.day(),
            self.location.latitude,
            self.location.longitude,
            self.location.utc_offset_hours,
            zenith,
        )
    }

    /// Derive the GRA marker set.
    pub fn gra_zmanim(&self) -> GraZmanim {
        let std = self.sun_times(solar::sunrise_zenith(self.location.elevation));
        let shaa = std
            .sunset
            .zip(std.sunrise)
            .map(|(sunset, sunrise)| (sunset - sunrise) / 12.0);

        // Proportional hours measured from standard sunrise.
        let at = |count: f64| {
            std.sunrise
                .zip(shaa)
                .map(|(sunrise, shaa)| sunrise + shaa * count)
        };

        GraZmanim {
            alos: self.sun_times(ALOS_ZENITH_DEG).sunrise,
            misheyakir: self
                .sun_times(90.0 + self.location.tefillin_degrees)
                .sunrise,
            sunrise: std.sunrise,
            shema: at(3.0),
            tefila: at(4.0),
            chatzos: at(6.0),
            // Near the poles a proportional hour can shrink toward zero;
            // the guard pins the half hour to at least a clock half hour.
            mincha_gedola: std
                .sunrise
                .zip(shaa)
                .map(|(sunrise, shaa)| sunrise + shaa * 6.0 + shaa.max(1.0) / 2.0),
            mincha_gedola_gra: at(6.5),
            mincha_ketana: at(9.5),
            plag_hamincha: at(10.75),
            sunset: std.sunset,
            tzeis: self.sun_times(TZEIS_ZENITH_DEG).sunset,
            shaa_zmanit: shaa,
        }
    }

    /// Derive the Alter Rebbe marker set.
    ///
    /// Shema and Tefila run on proportional hours of the 72-minute day
    /// (flat dawn to flat nightfall). Chatzot halayla is the midpoint of
    /// today's sunset and tomorrow's sunrise, which requires a second
    /// full ephemeris evaluation for the next date.
    pub fn chabad_zmanim(&self) -> ChabadZmanim {
        let std_zenith = solar::sunrise_zenith(self.location.elevation);
        let std = self.sun_times(std_zenith);

        let fixed_hours = FIXED_ALOS_TZEIS_MINUTES / 60.0;
        let alos72 = std.sunrise.map(|sunrise| sunrise - fixed_hours);
        let flat_tzeis = std.sunset.map(|sunset| sunset + fixed_hours);
        let shaa_ar = flat_tzeis
            .zip(alos72)
            .map(|(tzeis, alos)| (tzeis - alos) / 12.0);
        let ar_at = |count: f64| {
            alos72
                .zip(shaa_ar)
                .map(|(alos, shaa)| alos + shaa * count)
        };

        let shaa_gra = std
            .sunset
            .zip(std.sunrise)
            .map(|(sunset, sunrise)| (sunset - sunrise) / 12.0);
        let gra_at = |count: f64| {
            std.sunrise
                .zip(shaa_gra)
                .map(|(sunrise, shaa)| sunrise + shaa * count)
        };

        // An observer above sea level sees the sun past the sea-level
        // horizon, so Rabbeinu Tam nightfall counts from the elevated
        // sunset rather than the standard one.
        let tzeis_rt = self
            .sun_times(solar::elevated_zenith(self.location.elevation))
            .sunset
            .map(|sunset| sunset + fixed_hours);

        let chatzot_layla = self.date.checked_add_days(Days::new(1)).and_then(|tomorrow| {
            let next = self.sun_times_on(tomorrow, std_zenith);
            std.sunset.zip(next.sunrise).map(|(sunset, next_sunrise)| {
                let night = (24.0 - sunset) + next_sunrise;
                let midpoint = sunset + night / 2.0;
                if midpoint >= 24.0 {
                    midpoint - 24.0
                } else {
                    midpoint
                }
            })
        });

        ChabadZmanim {
            alos72,
            misheyakir: self
                .sun_times(90.0 + self.location.tefillin_degrees)
                .sunrise,
            sunrise: std.sunrise,
            shema_gra: gra_at(3.0),
            shema_ar: ar_at(3.0),
            tefila_gra: gra_at(4.0),
            tefila_ar: ar_at(4.0),
            chatzos: gra_at(6.0),
            mincha_gedola: gra_at(6.5),
            mincha_ketana: gra_at(9.5),
            plag_hamincha: gra_at(10.75),
            sunset: std.sunset,
            tzeis: self.sun_times(TZEIS_ZENITH_DEG).sunset,
            tzeis_rt,
            chatzot_layla,
        }
    }

    /// Shabbat boundary times for the Friday/Saturday at or after the
    /// query date. A Saturday query already points at the next Friday.
    pub fn shabbos_times(&self) -> ShabbosTimes {
        // weekday 0 = Sunday, 5 = Friday
        let dow = self.date.weekday().num_days_from_sunday();
        let days_to_friday = (5 + 7 - dow) % 7;
        let friday = self.date + Days::new(u64::from(days_to_friday));
        let saturday = friday + Days::new(1);

        let candle_lighting = self
            .sun_times_on(friday, solar::elevated_zenith(self.location.elevation))
            .sunset
            .map(|sunset| sunset - f64::from(self.location.candle_minutes) / 60.0);
        let shabbos_ends = self.sun_times_on(saturday, TZEIS_ZENITH_DEG).sunset;

        let offset = self.location.utc_offset_hours;
        ShabbosTimes {
            friday,
            saturday,
            candle_lighting,
            shabbos_ends,
            candle_lighting_epoch: candle_lighting
                .and_then(|hours| display::epoch_seconds(friday, hours, offset)),
            shabbos_ends_epoch: shabbos_ends
                .and_then(|hours| display::epoch_seconds(saturday, hours, offset)),
        }
    }
}
