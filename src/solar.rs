//! Solar ephemeris based on the Jean Meeus low-precision series.
//!
//! This module is the astronomical core of the crate: Julian date
//! conversion, the closed-form solar position polynomials, the equation of
//! time, the hour-angle solver, and the refraction/elevation corrections
//! that turn raw geometry into the zenith angles the halachic layer asks
//! for.
//!
//! Sunrise/sunset calculation is two-pass: a first solve anchored at the
//! date's approximate local solar noon, then a refinement that re-evaluates
//! the equation of time and declination at the UTC instant of each coarse
//! event. Declination and the equation of time drift over the course of a
//! day, so anchoring the second evaluation at the true event time removes
//! several minutes of systematic error at mid latitudes.
//!
//! Impossible geometry (polar day/night, degenerate denominators) is an
//! expected outcome, not an error: the hour-angle solver returns `None` and
//! callers propagate absence field-by-field.

use crate::constants::{
    EARTH_RADIUS_M, SEA_LEVEL_PRESSURE_HPA, SEA_LEVEL_REFRACTION_DEG, SOLAR_SEMI_DIAMETER_DEG,
};

/// Sunrise and sunset as decimal local hours for a single zenith angle.
///
/// `None` means the sun never crosses that zenith on that date at that
/// latitude. The two fields fail independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: Option<f64>,
    pub sunset: Option<f64>,
}

impl SunTimes {
    const NONE: SunTimes = SunTimes {
        sunrise: None,
        sunset: None,
    };
}

/// Julian Day Number for a Gregorian calendar date at 00:00 UT.
///
/// January and February count as months 13 and 14 of the previous year so
/// the century correction lands in the right year (Meeus, ch. 7).
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.5
}

/// Julian centuries since the J2000.0 epoch.
pub fn julian_century(jd: f64) -> f64 {
    (jd - 2451545.0) / 36525.0
}

/// Geometric mean longitude of the sun, degrees in [0, 360).
fn sun_mean_longitude(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + t * 0.0003032)).rem_euclid(360.0)
}

/// Mean anomaly of the sun, degrees in [0, 360).
fn sun_mean_anomaly(t: f64) -> f64 {
    (357.52911 + t * (35999.05029 - t * 0.0001537)).rem_euclid(360.0)
}

/// Eccentricity of Earth's orbit (dimensionless).
fn earth_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

/// Equation of center for the sun, degrees.
fn sun_equation_of_center(t: f64) -> f64 {
    let m = sun_mean_anomaly(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * m).sin() * (0.019993 - t * 0.000101)
        + (3.0 * m).sin() * 0.000289
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
fn sun_apparent_longitude(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    sun_mean_longitude(t) + sun_equation_of_center(t)
        - 0.00569
        - 0.00478 * omega.to_radians().sin()
}

/// Mean obliquity of the ecliptic plus the nutation correction, degrees.
fn obliquity_correction(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    let mean_obliquity = 23.0 + (26.0 + seconds / 60.0) / 60.0;
    let omega = 125.04 - 1934.136 * t;
    mean_obliquity + 0.00256 * omega.to_radians().cos()
}

/// Solar declination in degrees.
pub fn solar_declination(t: f64) -> f64 {
    let obliquity = obliquity_correction(t).to_radians();
    let longitude = sun_apparent_longitude(t).to_radians();
    (obliquity.sin() * longitude.sin()).asin().to_degrees()
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
pub fn equation_of_time(t: f64) -> f64 {
    let obliquity = obliquity_correction(t).to_radians();
    let l0 = sun_mean_longitude(t).to_radians();
    let e = earth_eccentricity(t);
    let m = sun_mean_anomaly(t).to_radians();

    let y = (obliquity / 2.0).tan().powi(2);
    let eot = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * eot.to_degrees()
}

/// Hour angle in degrees at which the sun's center crosses `zenith`.
///
/// Solves `cos H = (cos zenith − sin lat · sin dec) / (cos lat · cos dec)`.
/// Returns `None` when the denominator is numerically zero (observer at a
/// pole with the sun near the celestial equator) or when `|cos H| > 1`
/// (the sun never reaches that zenith on that day). Never panics.
pub fn hour_angle_deg(latitude: f64, declination: f64, zenith: f64) -> Option<f64> {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let zen = zenith.to_radians();

    let denominator = lat.cos() * dec.cos();
    if denominator.abs() < 1e-12 {
        return None;
    }

    let cos_ha = (zen.cos() - lat.sin() * dec.sin()) / denominator;
    if cos_ha.abs() > 1.0 {
        return None;
    }
    Some(cos_ha.acos().to_degrees())
}

/// Geometric dip of the horizon in degrees for an observer `h` meters
/// above a spherical Earth. Zero at or below sea level.
pub fn elevation_dip(h: f64) -> f64 {
    if h <= 0.0 {
        return 0.0;
    }
    (EARTH_RADIUS_M / (EARTH_RADIUS_M + h)).acos().to_degrees()
}

/// Atmospheric pressure at elevation `h` meters, in hPa
/// (standard-atmosphere barometric formula).
pub fn pressure_at_elevation(h: f64) -> f64 {
    SEA_LEVEL_PRESSURE_HPA * (1.0 - 2.25577e-5 * h).powf(5.25588)
}

/// Standard sunrise/sunset zenith with refraction scaled for elevation.
///
/// At sea level: 90° + 16′ semi-diameter + 34′ refraction = 90°50′.
/// Above sea level the air is thinner, refraction bends less, and the
/// zenith shrinks by the local/sea-level pressure ratio.
pub fn sunrise_zenith(h: f64) -> f64 {
    if h <= 0.0 {
        return 90.0 + SOLAR_SEMI_DIAMETER_DEG + SEA_LEVEL_REFRACTION_DEG;
    }
    let pressure_ratio = pressure_at_elevation(h) / SEA_LEVEL_PRESSURE_HPA;
    90.0 + SOLAR_SEMI_DIAMETER_DEG + SEA_LEVEL_REFRACTION_DEG * pressure_ratio
}

/// Zenith for an observer at height `h` looking out over a sea-level
/// horizon: 90°50′ plus the geometric dip. A distinct physical model from
/// [`sunrise_zenith`] — here the observer's height dominates, not the
/// reduced refraction.
pub fn elevated_zenith(h: f64) -> f64 {
    90.0 + 50.0 / 60.0 + elevation_dip(h)
}

/// Sunrise and sunset as decimal local hours for the given date, position,
/// UTC offset and zenith angle.
///
/// Pass 1 evaluates the solar series at the date's approximate local solar
/// noon; if the hour angle has no solution there, the geometry is
/// impossible for the whole day and both events are `None`. Pass 2
/// re-evaluates at the UTC instant of each coarse event and re-solves; if
/// the refined solve fails for one event, that event falls back to its
/// pass-1 estimate rather than failing the call.
pub fn calc_sun_times(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    tz_hours: f64,
    zenith: f64,
) -> SunTimes {
    let jd = julian_day(year, month, day);

    // Pass 1: approximate local solar noon.
    let approx_noon_ut = 12.0 - tz_hours - longitude / 15.0;
    let t0 = julian_century(jd + approx_noon_ut / 24.0);
    let eot0 = equation_of_time(t0);
    let dec0 = solar_declination(t0);
    let Some(ha0) = hour_angle_deg(latitude, dec0, zenith) else {
        return SunTimes::NONE;
    };
    let noon0 = 720.0 - 4.0 * longitude - eot0 + tz_hours * 60.0;
    let rise0 = (noon0 - ha0 * 4.0) / 60.0;
    let set0 = (noon0 + ha0 * 4.0) / 60.0;

    // Pass 2: refine each event at its own UTC instant.
    let refine = |coarse_local: f64, morning: bool| -> f64 {
        let t = julian_century(jd + (coarse_local - tz_hours) / 24.0);
        let dec = solar_declination(t);
        match hour_angle_deg(latitude, dec, zenith) {
            Some(ha) => {
                let noon = 720.0 - 4.0 * longitude - equation_of_time(t) + tz_hours * 60.0;
                if morning {
                    (noon - ha * 4.0) / 60.0
                } else {
                    (noon + ha * 4.0) / 60.0
                }
            }
            None => coarse_local,
        }
    };

    SunTimes {
        sunrise: Some(refine(rise0, true)),
        sunset: Some(refine(set0, false)),
    }
}
