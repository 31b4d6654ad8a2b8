//! Configuration for rendering decoded scans.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// ISO calendar date, the default expiry rendering.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Options controlling how a [`ParsedBarcode`](crate::ParsedBarcode) is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// `strftime` pattern used for the expiry date.
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date pattern, rejecting patterns a bare calendar date cannot
    /// render (malformed specifiers, or time and timezone fields like `%H`).
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Result<Self, OptionsError> {
        self.date_format = pattern.into();
        self.format_date(NaiveDate::default())?;
        Ok(self)
    }

    /// Renders `date` with the configured pattern.
    pub fn format_date(&self, date: NaiveDate) -> Result<String, OptionsError> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.date_format))
            .map_err(|_| OptionsError::InvalidDateFormat(self.date_format.clone()))?;
        Ok(out)
    }

    /// Like [`format_date`](Self::format_date), falling back to ISO when the
    /// pattern cannot render a date (e.g. one set through deserialization).
    pub fn render_date(&self, date: NaiveDate) -> String {
        self.format_date(date)
            .unwrap_or_else(|_| date.format(DEFAULT_DATE_FORMAT).to_string())
    }
}
