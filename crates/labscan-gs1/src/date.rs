//! `YYMMDD` date payloads (AIs 11, 13, 15 and 17).
//!
//! GS1 dates carry a two-digit year and allow day `00`, meaning the last day
//! of the month. Years `00`-`49` fall in 2000-2049, `50`-`99` in 1950-1999.

use chrono::NaiveDate;
use labscan_model::{DateError, ParsedBarcode, Result};

use crate::table;

/// Parses a `YYMMDD` payload, reporting why conversion failed.
pub fn parse_yymmdd(value: &str) -> Result<NaiveDate> {
    let len = value.chars().count();
    if len != 6 {
        return Err(DateError::InvalidLength(len));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::NonDigit(value.to_string()));
    }

    let yy = two_digits(&value[0..2]);
    let month = two_digits(&value[2..4]);
    let day = two_digits(&value[4..6]);

    let year = window_year(yy);
    if !(1..=12).contains(&month) {
        return Err(DateError::MonthOutOfRange(month));
    }
    if day > 31 {
        return Err(DateError::DayOutOfRange(day));
    }
    let day = if day == 0 {
        max_days_in_month(year, month)
    } else {
        day
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::NonexistentDate { year, month, day })
}

/// Converts a `YYMMDD` payload, or `None` when it is not a valid date.
pub fn yymmdd_to_date(value: &str) -> Option<NaiveDate> {
    parse_yymmdd(value).ok()
}

/// Date value of any date-kind AI recorded in `parsed`.
///
/// Returns `None` for AIs that are absent, not dates, or not valid dates.
pub fn dated_identifier(parsed: &ParsedBarcode, code: &str) -> Option<NaiveDate> {
    let definition = table::lookup(code)?;
    if !definition.is_date() {
        return None;
    }
    parsed.identifier(code).and_then(yymmdd_to_date)
}

/// Caller guarantees two ASCII digits.
fn two_digits(pair: &str) -> u32 {
    pair.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn window_year(yy: u32) -> i32 {
    let yy = yy as i32;
    if yy < 50 { 2000 + yy } else { 1900 + yy }
}

fn max_days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowing_boundary() {
        assert_eq!(window_year(0), 2000);
        assert_eq!(window_year(49), 2049);
        assert_eq!(window_year(50), 1950);
        assert_eq!(window_year(99), 1999);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(max_days_in_month(2024, 2), 29);
        assert_eq!(max_days_in_month(2025, 2), 28);
        assert_eq!(max_days_in_month(2000, 2), 29);
        assert_eq!(max_days_in_month(1900, 2), 28);
        assert_eq!(max_days_in_month(2025, 9), 30);
        assert_eq!(max_days_in_month(2025, 12), 31);
    }
}
