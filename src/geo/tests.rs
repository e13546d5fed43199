use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_guess_jerusalem() {
    assert_eq!(
        guess_timezone_name(31.778, 35.235),
        Some("Asia/Jerusalem")
    );
}

#[test]
fn test_guess_brooklyn() {
    assert_eq!(
        guess_timezone_name(40.6782, -73.9442),
        Some("America/New_York")
    );
}

#[test]
fn test_guess_london() {
    assert_eq!(guess_timezone_name(51.5074, -0.1278), Some("Europe/London"));
}

#[test]
fn test_guess_sydney() {
    assert_eq!(
        guess_timezone_name(-33.8688, 151.2093),
        Some("Australia/Sydney")
    );
}

#[test]
fn test_guess_open_ocean_is_none() {
    assert_eq!(guess_timezone_name(0.0, 0.0), None);
    assert_eq!(guess_timezone_name(-50.0, -150.0), None);
}

#[test]
fn test_israel_wins_over_neighbors() {
    // Eilat sits at the southern tip, still Israel
    assert_eq!(guess_timezone_name(29.55, 34.95), Some("Asia/Jerusalem"));
}

#[test]
fn test_resolve_unknown_coordinates_is_error() {
    let err = resolve_timezone(0.0, 0.0, date(2026, 2, 8), None).unwrap_err();
    assert!(err.to_string().contains("(0, 0)"));
}

#[test]
fn test_resolve_unknown_name_is_error() {
    let result = resolve_timezone(31.778, 35.235, date(2026, 2, 8), Some("Not/A_Zone"));
    assert!(result.is_err());
}

#[test]
fn test_explicit_name_bypasses_lookup() {
    // Coordinates resolve to nothing, but the explicit name carries it
    let info = resolve_timezone(0.0, 0.0, date(2026, 2, 8), Some("Asia/Jerusalem")).unwrap();
    assert_eq!(info.name, "Asia/Jerusalem");
    assert_eq!(info.offset_hours, 2.0);
}

#[test]
fn test_jerusalem_winter() {
    let info = resolve_timezone(31.778, 35.235, date(2026, 2, 8), None).unwrap();
    assert_eq!(info.offset_hours, 2.0);
    assert!(!info.dst);
    assert_eq!(info.dst_label, "שעון חורף");
}

#[test]
fn test_jerusalem_summer() {
    let info = resolve_timezone(31.778, 35.235, date(2026, 7, 15), None).unwrap();
    assert_eq!(info.offset_hours, 3.0);
    assert!(info.dst);
    assert_eq!(info.dst_label, "שעון קיץ");
}

#[test]
fn test_new_york_winter_and_summer() {
    let winter = resolve_timezone(40.6782, -73.9442, date(2026, 2, 8), None).unwrap();
    assert_eq!(winter.offset_hours, -5.0);
    assert!(!winter.dst);
    assert_eq!(winter.dst_label, "Standard Time");

    let summer = resolve_timezone(40.6782, -73.9442, date(2026, 7, 15), None).unwrap();
    assert_eq!(summer.offset_hours, -4.0);
    assert!(summer.dst);
    assert_eq!(summer.dst_label, "Summer Time");
}

#[test]
fn test_southern_hemisphere_dst() {
    // Sydney: DST in January, standard time in July
    let january = resolve_timezone(-33.8688, 151.2093, date(2026, 1, 20), None).unwrap();
    assert_eq!(january.offset_hours, 11.0);
    assert!(january.dst);

    let july = resolve_timezone(-33.8688, 151.2093, date(2026, 7, 15), None).unwrap();
    assert_eq!(july.offset_hours, 10.0);
    assert!(!july.dst);
}

#[test]
fn test_fractional_offset() {
    let info = resolve_timezone(19.076, 72.8777, date(2026, 2, 8), None).unwrap();
    assert_eq!(info.name, "Asia/Kolkata");
    assert_eq!(info.offset_hours, 5.5);
    assert!(!info.dst);
}

#[test]
fn test_candle_minutes_defaults() {
    assert_eq!(default_candle_minutes(31.778, 35.235), 40); // Jerusalem
    assert_eq!(default_candle_minutes(32.0853, 34.7818), 30); // Tel Aviv
    assert_eq!(default_candle_minutes(31.6, 34.77), 30); // Kiryat Malachi
    assert_eq!(default_candle_minutes(40.6782, -73.9442), 18); // Brooklyn
}

#[test]
fn test_tefillin_degrees_defaults() {
    assert_eq!(default_tefillin_degrees(31.778, 35.235), 11.5);
    assert_eq!(default_tefillin_degrees(40.6782, -73.9442), 10.2);
}
