#![forbid(unsafe_code)]

//! Civil date and time-of-day helpers.
//!
//! The engine serializes picker state to the card wire formats:
//! `YYYY-MM-DD` for dates and 24-hour `HH:MM` for times. Times are
//! carried as a duration since midnight; serialization floors to whole
//! minutes. Declared time bounds arrive as strings and are parsed with
//! [`parse_simple_time`]; strings that do not parse are treated by
//! callers as "no bound".

use std::fmt;
use std::time::Duration;

/// A calendar date with no time zone or time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CivilDate {
    /// Zero-padded `YYYY-MM-DD` with a full four-digit year.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a 24-hour `HH:MM` string into (hours, minutes).
///
/// Accepts one or two digits per component; hours must be below 24 and
/// minutes below 60. Returns `None` for anything else.
pub fn parse_simple_time(value: &str) -> Option<(u32, u32)> {
    let (hours_str, minutes_str) = value.split_once(':')?;
    let hours = parse_component(hours_str)?;
    let minutes = parse_component(minutes_str)?;
    if hours < 24 && minutes < 60 {
        Some((hours, minutes))
    } else {
        None
    }
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Duration since midnight for the given hours and minutes.
pub fn time_of_day(hours: u32, minutes: u32) -> Duration {
    Duration::from_secs(u64::from(hours) * 3600 + u64::from(minutes) * 60)
}

/// Serialize a duration since midnight as zero-padded `HH:MM`.
///
/// Sub-minute precision is floored away.
pub fn format_time_of_day(since_midnight: Duration) -> String {
    let total_minutes = since_midnight.as_secs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes - hours * 60;
    format!("{hours:02}:{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn civil_date_formats_zero_padded() {
        assert_eq!(CivilDate::new(2019, 7, 4).to_string(), "2019-07-04");
        assert_eq!(CivilDate::new(800, 12, 25).to_string(), "0800-12-25");
    }

    #[test]
    fn parse_simple_time_accepts_padded_and_bare() {
        assert_eq!(parse_simple_time("09:00"), Some((9, 0)));
        assert_eq!(parse_simple_time("9:5"), Some((9, 5)));
        assert_eq!(parse_simple_time("23:59"), Some((23, 59)));
        assert_eq!(parse_simple_time("00:00"), Some((0, 0)));
    }

    #[test]
    fn parse_simple_time_rejects_out_of_range() {
        assert_eq!(parse_simple_time("24:00"), None);
        assert_eq!(parse_simple_time("12:60"), None);
    }

    #[test]
    fn parse_simple_time_rejects_malformed() {
        assert_eq!(parse_simple_time(""), None);
        assert_eq!(parse_simple_time("1200"), None);
        assert_eq!(parse_simple_time(":30"), None);
        assert_eq!(parse_simple_time("12:"), None);
        assert_eq!(parse_simple_time("12:3:4"), None);
        assert_eq!(parse_simple_time("ab:cd"), None);
        assert_eq!(parse_simple_time("123:00"), None);
        assert_eq!(parse_simple_time("-1:00"), None);
    }

    #[test]
    fn format_floors_to_whole_minutes() {
        assert_eq!(format_time_of_day(Duration::from_secs(9 * 3600 + 59)), "09:00");
        assert_eq!(format_time_of_day(Duration::from_secs(9 * 3600 + 60)), "09:01");
    }

    #[test]
    fn format_zero_is_midnight() {
        assert_eq!(format_time_of_day(Duration::ZERO), "00:00");
    }

    #[test]
    fn time_of_day_matches_format() {
        assert_eq!(format_time_of_day(time_of_day(17, 30)), "17:30");
    }

    proptest! {
        #[test]
        fn parse_round_trips_formatted_times(hours in 0u32..24, minutes in 0u32..60) {
            let formatted = format_time_of_day(time_of_day(hours, minutes));
            prop_assert_eq!(parse_simple_time(&formatted), Some((hours, minutes)));
        }

        #[test]
        fn parse_never_panics(s in "\\PC*") {
            let _ = parse_simple_time(&s);
        }

        #[test]
        fn parsed_times_are_in_range(s in "[0-9]{1,2}:[0-9]{1,2}") {
            if let Some((hours, minutes)) = parse_simple_time(&s) {
                prop_assert!(hours < 24);
                prop_assert!(minutes < 60);
            }
        }
    }
}
