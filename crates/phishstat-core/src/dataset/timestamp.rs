//! Lenient timestamp parsing for the optional date columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses `value` to a UTC instant; anything unrecognised becomes `None`.
///
/// Accepted: RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]` (naive values are UTC),
/// `YYYY-MM-DD`, `YYYY/MM/DD`, and integer unix seconds.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
        }
    }
    value
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    #[test]
    fn rfc3339_with_offset_is_converted_to_utc() {
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00+09:00"),
            Some(ymd_hms(2024, 3, 1, 1, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00Z"),
            Some(ymd_hms(2024, 3, 1, 10, 0, 0))
        );
    }

    #[test]
    fn naive_datetime_is_utc() {
        assert_eq!(
            parse_timestamp("2024-03-01 23:59:59"),
            Some(ymd_hms(2024, 3, 1, 23, 59, 59))
        );
        assert_eq!(
            parse_timestamp("2024-03-01 08:15"),
            Some(ymd_hms(2024, 3, 1, 8, 15, 0))
        );
    }

    #[test]
    fn bare_dates_are_midnight() {
        assert_eq!(parse_timestamp("2024-03-01"), Some(ymd_hms(2024, 3, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("2024/03/02"), Some(ymd_hms(2024, 3, 2, 0, 0, 0)));
    }

    #[test]
    fn unix_seconds() {
        assert_eq!(parse_timestamp("0"), Some(ymd_hms(1970, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn garbage_is_coerced_to_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-45"), None);
    }
}
