//! Clock formatting and presentation of the computed marker sets.
//!
//! Halachic display rounds asymmetrically: deadline markers (latest
//! Shema, latest Tefila, plag hamincha) round seconds down, everything
//! else rounds up. Epoch timestamps round to the nearest second instead;
//! they feed machinery, not stringency.

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};

use super::{ChabadZmanim, GraZmanim, ShabbosTimes};

/// Second-rounding direction for a displayed marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rounding {
    Ceil,
    Floor,
}

/// Format decimal hours as a 24-hour `H:MM:SS` clock string, no leading
/// zero on the hour. Unresolved markers render as `--:--:--`.
pub fn clock(value: Option<f64>, rounding: Rounding) -> String {
    let Some(hours) = value else {
        return "--:--:--".to_string();
    };
    let total_seconds = match rounding {
        Rounding::Ceil => (hours * 3600.0).ceil(),
        Rounding::Floor => (hours * 3600.0).floor(),
    } as i64;
    let total_seconds = total_seconds.rem_euclid(86_400);
    format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

/// Unix timestamp of a decimal-hours instant on a civil date, anchored
/// to the query's UTC offset and rounded to the nearest second.
pub fn epoch_seconds(date: NaiveDate, hours: f64, utc_offset_hours: f64) -> Option<i64> {
    let total_seconds = (hours * 3600.0).round() as i64;
    let offset_seconds = (utc_offset_hours * 3600.0).round() as i32;
    let offset = FixedOffset::east_opt(offset_seconds)?;
    let local = date.and_hms_opt(0, 0, 0)? + Duration::seconds(total_seconds);
    offset
        .from_local_datetime(&local)
        .single()
        .map(|datetime| datetime.timestamp())
}

/// Print the GRA marker set through the logger.
pub fn print_gra_zmanim(zmanim: &GraZmanim) {
    log_block_start!("Zmanim (GRA)");
    log_indented!("Alos hashachar      {}", clock(zmanim.alos, Rounding::Ceil));
    log_indented!("Misheyakir          {}", clock(zmanim.misheyakir, Rounding::Ceil));
    log_indented!("Netz hachama        {}", clock(zmanim.sunrise, Rounding::Ceil));
    log_indented!("Sof zman Shema      {}", clock(zmanim.shema, Rounding::Floor));
    log_indented!("Sof zman Tefila     {}", clock(zmanim.tefila, Rounding::Floor));
    log_indented!("Chatzos             {}", clock(zmanim.chatzos, Rounding::Ceil));
    log_indented!("Mincha gedola       {}", clock(zmanim.mincha_gedola, Rounding::Ceil));
    log_indented!("Mincha ketana       {}", clock(zmanim.mincha_ketana, Rounding::Ceil));
    log_indented!("Plag hamincha       {}", clock(zmanim.plag_hamincha, Rounding::Floor));
    log_indented!("Shkiah              {}", clock(zmanim.sunset, Rounding::Ceil));
    log_indented!("Tzeis hakochavim    {}", clock(zmanim.tzeis, Rounding::Ceil));
}

/// Print the Alter Rebbe marker set through the logger.
pub fn print_chabad_zmanim(zmanim: &ChabadZmanim) {
    log_block_start!("Zmanim (Alter Rebbe)");
    log_indented!("Alos 72             {}", clock(zmanim.alos72, Rounding::Ceil));
    log_indented!("Misheyakir          {}", clock(zmanim.misheyakir, Rounding::Ceil));
    log_indented!("Netz hachama        {}", clock(zmanim.sunrise, Rounding::Ceil));
    log_indented!("Sof zman Shema GRA  {}", clock(zmanim.shema_gra, Rounding::Floor));
    log_indented!("Sof zman Shema AR   {}", clock(zmanim.shema_ar, Rounding::Floor));
    log_indented!("Sof zman Tefila GRA {}", clock(zmanim.tefila_gra, Rounding::Floor));
    log_indented!("Sof zman Tefila AR  {}", clock(zmanim.tefila_ar, Rounding::Floor));
    log_indented!("Chatzos             {}", clock(zmanim.chatzos, Rounding::Ceil));
    log_indented!("Mincha gedola       {}", clock(zmanim.mincha_gedola, Rounding::Ceil));
    log_indented!("Mincha ketana       {}", clock(zmanim.mincha_ketana, Rounding::Ceil));
    log_indented!("Plag hamincha       {}", clock(zmanim.plag_hamincha, Rounding::Floor));
    log_indented!("Shkiah              {}", clock(zmanim.sunset, Rounding::Ceil));
    log_indented!("Tzeis hakochavim    {}", clock(zmanim.tzeis, Rounding::Ceil));
    log_indented!("Tzeis Rabbeinu Tam  {}", clock(zmanim.tzeis_rt, Rounding::Ceil));
    log_indented!("Chatzot halayla     {}", clock(zmanim.chatzot_layla, Rounding::Ceil));
}

/// Print the Shabbat boundary times through the logger.
pub fn print_shabbos_times(times: &ShabbosTimes) {
    log_block_start!("Shabbos");
    log_indented!(
        "Candle lighting     {} ({})",
        clock(times.candle_lighting, Rounding::Ceil),
        times.friday
    );
    log_indented!(
        "Shabbos ends        {} ({})",
        clock(times.shabbos_ends, Rounding::Ceil),
        times.saturday
    );
    if let Some(epoch) = times.candle_lighting_epoch {
        log_indented!("Start epoch         {}", epoch);
    }
    if let Some(epoch) = times.shabbos_ends_epoch {
        log_indented!("End epoch           {}", epoch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_without_leading_zero() {
        assert_eq!(clock(Some(6.5), Rounding::Ceil), "6:30:00");
        assert_eq!(clock(Some(12.0), Rounding::Ceil), "12:00:00");
        assert_eq!(clock(Some(18.75), Rounding::Floor), "18:45:00");
    }

    #[test]
    fn clock_rounding_directions_differ() {
        // 9.1759 h = 33033.24 s
        let value = Some(33_033.24 / 3600.0);
        assert_eq!(clock(value, Rounding::Ceil), "9:10:34");
        assert_eq!(clock(value, Rounding::Floor), "9:10:33");
    }

    #[test]
    fn clock_placeholder_for_unresolved() {
        assert_eq!(clock(None, Rounding::Ceil), "--:--:--");
        assert_eq!(clock(None, Rounding::Floor), "--:--:--");
    }

    #[test]
    fn clock_wraps_past_midnight() {
        assert_eq!(clock(Some(24.25), Rounding::Ceil), "0:15:00");
        assert_eq!(clock(Some(-0.5), Rounding::Ceil), "23:30:00");
    }

    #[test]
    fn epoch_matches_known_instant() {
        // 2026-02-13 17:00:00 UTC+2 == 15:00:00 UTC
        let date = NaiveDate::from_ymd_opt(2026, 2, 13).unwrap();
        let epoch = epoch_seconds(date, 17.0, 2.0).unwrap();
        let expected = chrono::NaiveDateTime::new(
            date,
            chrono::NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        )
        .and_utc()
        .timestamp();
        assert_eq!(epoch, expected);
    }

    #[test]
    fn epoch_rounds_to_nearest_second() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 13).unwrap();
        let base = epoch_seconds(date, 17.0, 2.0).unwrap();
        // 0.6 s past the hour rounds up, 0.4 s rounds down
        assert_eq!(epoch_seconds(date, 17.0 + 0.6 / 3600.0, 2.0).unwrap(), base + 1);
        assert_eq!(epoch_seconds(date, 17.0 + 0.4 / 3600.0, 2.0).unwrap(), base);
    }
}
