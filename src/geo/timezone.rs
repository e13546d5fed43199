//! Coordinate to IANA timezone name mapping.
//!
//! A bounding-box table covering the major regions. Coordinates outside
//! every box resolve to `None` and the caller must supply a timezone
//! explicitly. Boxes are checked in order, so Israel wins over any
//! overlapping neighbor.

struct TzBox {
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
    tz: &'static str,
}

const fn tz_box(
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
    tz: &'static str,
) -> TzBox {
    TzBox {
        lat_min,
        lat_max,
        lng_min,
        lng_max,
        tz,
    }
}

#[rustfmt::skip]
const TZ_BOXES: &[TzBox] = &[
    // Israel
    tz_box(29.0, 34.0, 34.0, 36.0, "Asia/Jerusalem"),

    // Europe
    tz_box(49.0, 61.0, -8.0, 2.0, "Europe/London"),      // UK & Ireland
    tz_box(42.0, 51.5, -5.0, 8.0, "Europe/Paris"),       // France, Benelux
    tz_box(46.0, 55.0, 5.0, 15.0, "Europe/Berlin"),      // Germany, Austria, Switzerland
    tz_box(36.0, 47.0, 6.0, 19.0, "Europe/Rome"),        // Italy
    tz_box(36.0, 44.0, -10.0, 4.0, "Europe/Madrid"),     // Spain, Portugal
    tz_box(35.0, 42.0, 19.0, 30.0, "Europe/Athens"),     // Greece
    tz_box(41.0, 45.0, 19.0, 30.0, "Europe/Bucharest"),  // Romania, Bulgaria
    tz_box(49.0, 55.0, 14.0, 24.0, "Europe/Warsaw"),     // Poland
    tz_box(47.0, 52.0, 14.0, 23.0, "Europe/Budapest"),   // Hungary, Czechia, Slovakia
    tz_box(55.0, 70.0, 5.0, 31.0, "Europe/Helsinki"),    // Nordics
    tz_box(54.0, 58.0, 20.0, 29.0, "Europe/Vilnius"),    // Baltics

    // Western Russia, simplified to Moscow time
    tz_box(50.0, 70.0, 30.0, 60.0, "Europe/Moscow"),

    // Turkey
    tz_box(36.0, 42.0, 26.0, 45.0, "Europe/Istanbul"),

    // North America
    tz_box(25.0, 49.0, -82.0, -67.0, "America/New_York"),
    tz_box(25.0, 49.0, -105.0, -82.0, "America/Chicago"),
    tz_box(25.0, 49.0, -115.0, -105.0, "America/Denver"),
    tz_box(25.0, 49.0, -125.0, -115.0, "America/Los_Angeles"),
    tz_box(42.0, 56.0, -80.0, -53.0, "America/Toronto"),
    tz_box(45.0, 55.0, -98.0, -80.0, "America/Winnipeg"),
    tz_box(49.0, 55.0, -130.0, -110.0, "America/Vancouver"),

    // South America
    tz_box(-35.0, -22.0, -58.0, -43.0, "America/Sao_Paulo"),
    tz_box(-40.0, -22.0, -70.0, -58.0, "America/Argentina/Buenos_Aires"),

    // Australia
    tz_box(-44.0, -28.0, 140.0, 154.0, "Australia/Sydney"),
    tz_box(-28.0, -10.0, 140.0, 154.0, "Australia/Brisbane"),
    tz_box(-38.0, -30.0, 134.0, 140.0, "Australia/Adelaide"),
    tz_box(-36.0, -12.0, 114.0, 134.0, "Australia/Perth"),

    // South Africa
    tz_box(-35.0, -22.0, 16.0, 33.0, "Africa/Johannesburg"),

    // UAE / Gulf
    tz_box(22.0, 27.0, 51.0, 57.0, "Asia/Dubai"),

    // India
    tz_box(8.0, 36.0, 68.0, 97.0, "Asia/Kolkata"),

    // China
    tz_box(18.0, 54.0, 73.0, 135.0, "Asia/Shanghai"),

    // Japan
    tz_box(24.0, 46.0, 127.0, 146.0, "Asia/Tokyo"),

    // Morocco
    tz_box(27.0, 36.0, -13.0, -1.0, "Africa/Casablanca"),
];

/// Guess the IANA timezone name for a coordinate pair.
///
/// Returns `None` when the coordinates fall outside every known region,
/// including all open-ocean points.
pub fn guess_timezone_name(latitude: f64, longitude: f64) -> Option<&'static str> {
    TZ_BOXES
        .iter()
        .find(|zone| {
            latitude >= zone.lat_min
                && latitude <= zone.lat_max
                && longitude >= zone.lng_min
                && longitude <= zone.lng_max
        })
        .map(|zone| zone.tz)
}
