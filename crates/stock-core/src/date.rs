// File: crates/stock-core/src/date.rs
// Summary: Calendar date value type and the `YYYY-M(M)-D(D)` parser.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, TrackerError};

/// A (year, month, day) triple as found in the source CSV.
/// Contract: year > 0, month in 1..=12, day in 1..=31. Day is not checked
/// against the length of the month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if year <= 0 {
            return Err(TrackerError::parse(format!("year {year} is not positive")));
        }
        if !(1..=12).contains(&month) {
            return Err(TrackerError::parse(format!("month {month} outside 1..=12")));
        }
        if !(1..=31).contains(&day) {
            return Err(TrackerError::parse(format!("day {day} outside 1..=31")));
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 { self.year }
    pub const fn month(&self) -> u32 { self.month }
    pub const fn day(&self) -> u32 { self.day }

    /// Day number with 0001-01-01 as day 1 (chrono's days-from-CE), monotone in
    /// (year, month, day).
    /// Out-of-month days (e.g. Feb 30) spill over into the following month.
    pub fn day_ordinal(&self) -> i64 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.num_days_from_ce() as i64)
            .unwrap_or_default();
        first - 1 + self.day as i64
    }

    /// Strict calendar date, `None` for dates like 2021-02-30.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self { year: d.year(), month: d.month(), day: d.day() }
    }
}

/// Parse `YYYY-M(M)-D(D)` into a [`CalendarDate`].
///
/// Month and day may carry one leading zero, which is stripped before the
/// integer parse; `"00"` therefore becomes `0` and is rejected by range.
pub fn parse_date(raw: &str) -> Result<CalendarDate> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(TrackerError::parse(format!(
            "date '{raw}' should have 3 '-' separated parts, found {}",
            parts.len()
        )));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| TrackerError::parse(format!("invalid year in date '{raw}'")))?;
    let month = parse_component(month, "month", raw)?;
    let day = parse_component(day, "day", raw)?;
    CalendarDate::new(year, month, day)
        .map_err(|e| TrackerError::parse(format!("date '{raw}': {}", message_of(e))))
}

fn parse_component(token: &str, what: &str, raw: &str) -> Result<u32> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TrackerError::parse(format!("invalid {what} '{token}' in date '{raw}'")));
    }
    let digits = token.strip_prefix('0').unwrap_or(token);
    digits
        .parse()
        .map_err(|_| TrackerError::parse(format!("invalid {what} '{token}' in date '{raw}'")))
}

fn message_of(e: TrackerError) -> String {
    match e {
        TrackerError::Parse { message, .. } => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn parses_zero_padded_dates() {
        assert_eq!(parse_date("2010-06-29").unwrap(), ymd(2010, 6, 29));
        assert_eq!(parse_date("2010-07-09").unwrap(), ymd(2010, 7, 9));
        assert_eq!(parse_date("1999-12-31").unwrap(), ymd(1999, 12, 31));
    }

    #[test]
    fn accepts_unpadded_components() {
        assert_eq!(parse_date("2010-7-9").unwrap(), ymd(2010, 7, 9));
        assert_eq!(parse_date(" 2010-10-01 ").unwrap(), ymd(2010, 10, 1));
    }

    #[test]
    fn display_round_trips() {
        for s in ["2010-06-29", "2021-01-01", "1987-10-19", "2024-02-29"] {
            assert_eq!(parse_date(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "2010-06", "2010-06-29-01", "2010/06/29", "20x0-06-29", "2010-6a-01", "2010--01", "2010-006-01"] {
            let err = parse_date(bad).unwrap_err();
            assert!(err.is_parse(), "{bad}: {err}");
        }
    }

    #[test]
    fn double_zero_is_out_of_range() {
        assert!(parse_date("2010-00-10").unwrap_err().is_parse());
        assert!(parse_date("2010-10-00").unwrap_err().is_parse());
        assert!(parse_date("2010-13-10").unwrap_err().is_parse());
        assert!(parse_date("2010-10-32").unwrap_err().is_parse());
    }

    #[test]
    fn day_is_not_checked_against_month_length() {
        let d = parse_date("2021-02-30").unwrap();
        assert_eq!(d.to_naive(), None);
        // spills into March
        assert_eq!(d.day_ordinal(), ymd(2021, 3, 2).day_ordinal());
    }

    #[test]
    fn ordinal_is_monotone() {
        let a = ymd(2020, 12, 31).day_ordinal();
        let b = ymd(2021, 1, 1).day_ordinal();
        assert_eq!(b - a, 1);
        assert!(ymd(2010, 6, 29) < ymd(2010, 7, 9));
    }
}
