//! Scalar encoders for the Ergani wire format
//!
//! The API does not accept native JSON booleans, ISO dates or `HH:MM:SS`
//! times. Every scalar goes through one of these functions before it is
//! placed in a payload.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Weekday};

/// Format of calendar dates (`DD/MM/YYYY`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Format of clock times (`HH:MM`, 24-hour)
pub const TIME_FORMAT: &str = "%H:%M";

/// Encode a calendar date as `DD/MM/YYYY`
pub fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Encode a clock time as zero-padded `HH:MM`
pub fn encode_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Encode a timestamp as ISO-8601 with milliseconds and an explicit offset
///
/// UTC is written as `Z`, any other offset as `+HH:MM`.
pub fn encode_datetime(datetime: DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encode a boolean as `"1"` or `"0"`
pub fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Encode a weekday as its ordinal with Sunday = 0 ... Saturday = 6
pub fn encode_weekday(day: Weekday) -> u32 {
    day.num_days_from_sunday()
}

/// The weekday of a date, encoded
pub fn weekday_of(date: NaiveDate) -> u32 {
    encode_weekday(date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    #[test]
    fn test_known_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        assert_eq!(encode_date(date), "10/07/2025");
    }

    #[test]
    fn test_known_time() {
        let time = NaiveTime::from_hms_opt(14, 30, 59).unwrap();
        assert_eq!(encode_time(time), "14:30");
        let early = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(encode_time(early), "07:05");
    }

    #[test]
    fn test_bool_tokens() {
        assert_eq!(encode_bool(true), "1");
        assert_eq!(encode_bool(false), "0");
    }

    #[test]
    fn test_datetime_utc_uses_z() {
        let dt = Utc.with_ymd_and_hms(2025, 7, 10, 9, 0, 0).unwrap().fixed_offset();
        assert_eq!(encode_datetime(dt), "2025-07-10T09:00:00.000Z");
    }

    #[test]
    fn test_datetime_keeps_offset() {
        let athens = FixedOffset::east_opt(3 * 3600).unwrap();
        let dt = athens.with_ymd_and_hms(2025, 7, 10, 9, 15, 30).unwrap();
        assert_eq!(encode_datetime(dt), "2025-07-10T09:15:30.000+03:00");
    }

    #[test]
    fn test_weekday_ordinals() {
        assert_eq!(encode_weekday(Weekday::Sun), 0);
        assert_eq!(encode_weekday(Weekday::Mon), 1);
        assert_eq!(encode_weekday(Weekday::Sat), 6);
        // 2025-07-10 was a Thursday
        assert_eq!(weekday_of(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_date_layout(days in 0i64..40_000) {
            let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days);
            let encoded = encode_date(date);

            prop_assert_eq!(encoded.len(), 10);
            prop_assert_eq!(&encoded[2..3], "/");
            prop_assert_eq!(&encoded[5..6], "/");
            prop_assert_eq!(NaiveDate::parse_from_str(&encoded, DATE_FORMAT).unwrap(), date);
        }

        #[test]
        fn prop_time_layout(hour in 0u32..24, minute in 0u32..60, second in 0u32..60) {
            let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap();
            let encoded = encode_time(time);

            prop_assert_eq!(encoded, format!("{:02}:{:02}", hour, minute));
        }
    }
}
