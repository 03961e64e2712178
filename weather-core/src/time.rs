//! Timestamp and UTC-offset formatting for display.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Zone used when nothing is configured.
pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::Asia::Kolkata;

const LOCAL_TIME_FORMAT: &str = "%a, %-d %b %Y, %-I:%M:%S %P";

/// Render a Unix timestamp in `zone`, e.g. `Mon, 15 Jan 2024, 7:15:03 am`.
///
/// Returns `None` only for timestamps chrono cannot represent.
pub fn format_local_time<Z>(unix_seconds: i64, zone: &Z) -> Option<String>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    localize(unix_seconds, zone).map(|dt| dt.format(LOCAL_TIME_FORMAT).to_string())
}

/// Abbreviation of `zone` at the given instant (`IST`, `CET`, ...).
///
/// Fixed offsets have no name and render as `+05:30`.
pub fn zone_abbreviation<Z>(unix_seconds: i64, zone: &Z) -> Option<String>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    localize(unix_seconds, zone).map(|dt| dt.format("%Z").to_string())
}

/// Format an offset from UTC in seconds as `GMT+HH:MM` / `GMT-HH:MM`.
pub fn format_utc_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds >= 0 { '+' } else { '-' };
    let abs = offset_seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;

    format!("GMT{sign}{hours:02}:{minutes:02}")
}

fn localize<Z: TimeZone>(unix_seconds: i64, zone: &Z) -> Option<DateTime<Z>> {
    DateTime::from_timestamp(unix_seconds, 0).map(|utc| utc.with_timezone(zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    // 2024-01-15T01:45:03Z
    const SAMPLE_TS: i64 = 1_705_283_103;

    #[test]
    fn utc_offset_formatting() {
        assert_eq!(format_utc_offset(0), "GMT+00:00");
        assert_eq!(format_utc_offset(19800), "GMT+05:30");
        assert_eq!(format_utc_offset(-18000), "GMT-05:00");
        assert_eq!(format_utc_offset(-12600), "GMT-03:30");
        assert_eq!(format_utc_offset(50400), "GMT+14:00");
    }

    #[test]
    fn utc_offset_drops_leftover_seconds() {
        assert_eq!(format_utc_offset(3661), "GMT+01:01");
    }

    #[test]
    fn local_time_in_default_zone() {
        let formatted = format_local_time(SAMPLE_TS, &DEFAULT_TIMEZONE).unwrap();
        assert_eq!(formatted, "Mon, 15 Jan 2024, 7:15:03 am");
    }

    #[test]
    fn local_time_follows_configured_zone() {
        assert_eq!(
            format_local_time(SAMPLE_TS, &Utc).unwrap(),
            "Mon, 15 Jan 2024, 1:45:03 am"
        );
        assert_eq!(
            format_local_time(SAMPLE_TS, &chrono_tz::America::New_York).unwrap(),
            "Sun, 14 Jan 2024, 8:45:03 pm"
        );

        let fixed = FixedOffset::east_opt(-18000).unwrap();
        assert_eq!(
            format_local_time(SAMPLE_TS, &fixed).unwrap(),
            "Sun, 14 Jan 2024, 8:45:03 pm"
        );
    }

    #[test]
    fn local_time_is_reproducible() {
        let a = format_local_time(SAMPLE_TS, &DEFAULT_TIMEZONE);
        let b = format_local_time(SAMPLE_TS, &DEFAULT_TIMEZONE);
        assert_eq!(a, b);
    }

    #[test]
    fn unrepresentable_timestamp_yields_none() {
        assert_eq!(format_local_time(i64::MAX, &Utc), None);
    }

    #[test]
    fn zone_abbreviation_for_named_zone() {
        assert_eq!(zone_abbreviation(SAMPLE_TS, &DEFAULT_TIMEZONE).as_deref(), Some("IST"));
        assert_eq!(
            zone_abbreviation(SAMPLE_TS, &chrono_tz::America::New_York).as_deref(),
            Some("EST")
        );
    }
}
