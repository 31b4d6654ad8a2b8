//! GS1 Application Identifier definitions.
//!
//! An Application Identifier (AI) is the short numeric prefix inside a GS1
//! element string that says what the following data means and how long it
//! is. The decoder only needs the length rule to tokenize; the value kind is
//! informational apart from [`ValueKind::Date`], which triggers `YYMMDD`
//! conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many data characters follow an AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthRule {
    /// Exactly `n` characters follow.
    Fixed(usize),
    /// Between `min` and `max` characters follow; the end must be discovered.
    Variable { min: usize, max: usize },
}

impl LengthRule {
    /// Returns true if a data segment of `len` characters satisfies the rule.
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            LengthRule::Fixed(n) => len == n,
            LengthRule::Variable { min, max } => (min..=max).contains(&len),
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRule::Fixed(n) => write!(f, "fixed {n}"),
            LengthRule::Variable { min, max } => write!(f, "variable {min}..{max}"),
        }
    }
}

/// Kind of value carried by an AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Numeric,
    Alphanumeric,
    /// `YYMMDD` calendar date.
    Date,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Numeric => "numeric",
            ValueKind::Alphanumeric => "alphanumeric",
            ValueKind::Date => "date",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the AI table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiDefinition {
    /// Two to four digit AI code, e.g. `"01"`.
    pub code: &'static str,
    /// Human label; not used for parsing.
    pub display_name: &'static str,
    pub length_rule: LengthRule,
    pub value_kind: ValueKind,
}

impl AiDefinition {
    pub const fn fixed(
        code: &'static str,
        display_name: &'static str,
        len: usize,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            code,
            display_name,
            length_rule: LengthRule::Fixed(len),
            value_kind,
        }
    }

    pub const fn variable(
        code: &'static str,
        display_name: &'static str,
        min: usize,
        max: usize,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            code,
            display_name,
            length_rule: LengthRule::Variable { min, max },
            value_kind,
        }
    }

    pub fn is_date(&self) -> bool {
        self.value_kind == ValueKind::Date
    }
}

impl fmt::Display for AiDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.code, self.display_name)
    }
}
