//! Timestamp parsing and board time formatting.
//!
//! The timetable feed sends scheduled times as ISO 8601 UTC timestamps
//! ("2024-03-15T07:05:00.000Z"). Boards show them as zero-padded 24-hour
//! "HH:MM" in the viewer's time zone.

use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Parse a feed timestamp into UTC.
///
/// Returns `None` for anything that isn't a valid RFC 3339 timestamp.
///
/// # Examples
///
/// ```
/// use station_board::domain::parse_timestamp;
///
/// assert!(parse_timestamp("2024-03-15T07:05:00.000Z").is_some());
/// assert!(parse_timestamp("2024-03-15T09:05:00+02:00").is_some());
/// assert!(parse_timestamp("07:05").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Format a time as "HH:MM" using its hour and minute in `tz`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use station_board::domain::format_hhmm;
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 15, 7, 5, 0).unwrap();
/// assert_eq!(format_hhmm(&t, &Utc), "07:05");
/// ```
pub fn format_hhmm<Tz: TimeZone>(time: &DateTime<Utc>, tz: &Tz) -> String {
    let local = time.with_timezone(tz);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_hhmm(&utc(7, 5), &Utc), "07:05");
        assert_eq!(format_hhmm(&utc(0, 0), &Utc), "00:00");
    }

    #[test]
    fn last_minute_of_day() {
        assert_eq!(format_hhmm(&utc(23, 59), &Utc), "23:59");
    }

    #[test]
    fn uses_local_components() {
        let helsinki_winter = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_hhmm(&utc(5, 5), &helsinki_winter), "07:05");

        // Crossing midnight in the local zone
        assert_eq!(format_hhmm(&utc(21, 59), &helsinki_winter), "23:59");
        assert_eq!(format_hhmm(&utc(22, 30), &helsinki_winter), "00:30");
    }

    #[test]
    fn seconds_are_truncated() {
        let t = Utc.with_ymd_and_hms(2024, 3, 15, 12, 34, 59).unwrap();
        assert_eq!(format_hhmm(&t, &Utc), "12:34");
    }

    #[test]
    fn parse_feed_timestamps() {
        assert_eq!(parse_timestamp("2024-03-15T07:05:00.000Z"), Some(utc(7, 5)));
        assert_eq!(parse_timestamp("2024-03-15T09:05:00+02:00"), Some(utc(7, 5)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("07:05"), None);
        assert_eq!(parse_timestamp("2024-03-15"), None);
        assert_eq!(parse_timestamp("not a time"), None);
    }
}
