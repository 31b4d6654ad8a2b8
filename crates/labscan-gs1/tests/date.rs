//! Tests for YYMMDD conversion.

use chrono::NaiveDate;
use labscan_gs1::{parse_yymmdd, yymmdd_to_date};
use labscan_model::DateError;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn complete_dates() {
    assert_eq!(yymmdd_to_date("261231"), Some(ymd(2026, 12, 31)));
    assert_eq!(yymmdd_to_date("000101"), Some(ymd(2000, 1, 1)));
}

#[test]
fn day_zero_is_last_day_of_month() {
    assert_eq!(yymmdd_to_date("250900"), Some(ymd(2025, 9, 30)));
    assert_eq!(yymmdd_to_date("240200"), Some(ymd(2024, 2, 29)));
    assert_eq!(yymmdd_to_date("250200"), Some(ymd(2025, 2, 28)));
    assert_eq!(yymmdd_to_date("251200"), Some(ymd(2025, 12, 31)));
}

#[test]
fn year_window_boundary() {
    assert_eq!(yymmdd_to_date("491231"), Some(ymd(2049, 12, 31)));
    assert_eq!(yymmdd_to_date("500101"), Some(ymd(1950, 1, 1)));
    assert_eq!(yymmdd_to_date("991231"), Some(ymd(1999, 12, 31)));
}

#[test]
fn wrong_length_fails() {
    assert_eq!(parse_yymmdd(""), Err(DateError::InvalidLength(0)));
    assert_eq!(parse_yymmdd("25090"), Err(DateError::InvalidLength(5)));
    assert_eq!(parse_yymmdd("2509001"), Err(DateError::InvalidLength(7)));
}

#[test]
fn non_digits_fail() {
    assert_eq!(
        parse_yymmdd("25O900"),
        Err(DateError::NonDigit("25O900".to_string()))
    );
    assert_eq!(yymmdd_to_date("25-9-0"), None);
}

#[test]
fn out_of_range_components_fail() {
    assert_eq!(parse_yymmdd("251301"), Err(DateError::MonthOutOfRange(13)));
    assert_eq!(parse_yymmdd("250001"), Err(DateError::MonthOutOfRange(0)));
    assert_eq!(parse_yymmdd("250132"), Err(DateError::DayOutOfRange(32)));
}

#[test]
fn nonexistent_calendar_date_fails() {
    assert_eq!(
        parse_yymmdd("250231"),
        Err(DateError::NonexistentDate {
            year: 2025,
            month: 2,
            day: 31
        })
    );
    assert_eq!(yymmdd_to_date("250931"), None);
}

#[test]
fn parse_composes_with_question_mark() -> labscan_model::Result<()> {
    assert_eq!(parse_yymmdd("250900")?, ymd(2025, 9, 30));
    Ok(())
}
