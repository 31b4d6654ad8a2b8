use thiserror::Error;

/// Reasons a `YYMMDD` payload does not convert to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected 6 characters (YYMMDD), got {0}")]
    InvalidLength(usize),
    #[error("non-digit character in date payload: {0:?}")]
    NonDigit(String),
    #[error("month {0} is outside 01-12")]
    MonthOutOfRange(u32),
    #[error("day {0} is outside 00-31")]
    DayOutOfRange(u32),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NonexistentDate { year: i32, month: u32, day: u32 },
}

/// Errors from GS1 mod-10 check digit computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    #[error("check digit input is empty")]
    Empty,
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
    #[error("check digit mismatch: expected {expected}, found {found}")]
    Mismatch { expected: u8, found: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid date format string: {0:?}")]
    InvalidDateFormat(String),
}

pub type Result<T, E = DateError> = std::result::Result<T, E>;
