//! Time utilities
//!
//! Query parameters carry calendar days (`YYYY-MM-DD`); the database stores
//! UTC instants. Days are interpreted in the club's configured offset.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::constants::{DATE_FORMAT, MAX_QUERY_YEAR, MIN_QUERY_YEAR};

/// Parse a `YYYY-MM-DD` calendar day, rejecting years outside the accepted span
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .filter(|date| (MIN_QUERY_YEAR..=MAX_QUERY_YEAR).contains(&date.year()))
}

/// First instant of `date` in `offset`, `None` if unrepresentable
pub fn start_of_day(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .map(|local| local.and_utc())
}

/// Last second of `date` in `offset`, i.e. next midnight minus one second
pub fn end_of_day(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<Utc>> {
    start_of_day(date.succ_opt()?, offset)?.checked_sub_signed(Duration::seconds(1))
}

/// Inclusive instant range covering whole calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayRange {
    /// Returns `None` when `last_day` precedes `first_day` or either
    /// boundary falls outside the representable range
    pub fn new(first_day: NaiveDate, last_day: NaiveDate, offset: FixedOffset) -> Option<Self> {
        if last_day < first_day {
            return None;
        }

        Some(Self {
            first_day,
            last_day,
            begin: start_of_day(first_day, offset)?,
            end: end_of_day(last_day, offset)?,
        })
    }

    /// Number of calendar days covered
    pub fn days(&self) -> i64 {
        (self.last_day - self.first_day).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("2024/01/01").is_none());
        assert!(parse_date("yesterday").is_none());
    }

    #[test]
    fn test_parse_date_year_span() {
        assert!(parse_date("+262142-12-31").is_none());
        assert!(parse_date("-0001-01-01").is_none());
        assert!(parse_date("1969-12-31").is_none());
        assert!(parse_date("9999-12-31").is_some());
    }

    #[test]
    fn test_end_of_day_is_last_second() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = end_of_day(day, utc()).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_offset_days() {
        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            start_of_day(day, beijing),
            Utc.with_ymd_and_hms(2024, 5, 31, 16, 0, 0).single()
        );
        assert_eq!(
            end_of_day(day, beijing),
            Utc.with_ymd_and_hms(2024, 6, 1, 15, 59, 59).single()
        );
    }

    #[test]
    fn test_last_representable_day() {
        assert!(end_of_day(NaiveDate::MAX, utc()).is_none());
        assert!(DayRange::new(NaiveDate::MAX, NaiveDate::MAX, utc()).is_none());

        let east = FixedOffset::east_opt(8 * 3600).unwrap();
        assert!(start_of_day(NaiveDate::MIN, east).is_none());
    }

    #[test]
    fn test_day_range() {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let range = DayRange::new(first, last, utc()).unwrap();
        assert_eq!(range.days(), 7);
        assert_eq!(range.end - range.begin, Duration::days(7) - Duration::seconds(1));

        assert!(DayRange::new(last, first, utc()).is_none());
        assert_eq!(DayRange::new(first, first, utc()).unwrap().days(), 1);
    }
}
