//! Decode result for a scanned GS1 string.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::options::DisplayOptions;

pub const AI_SSCC: &str = "00";
pub const AI_GTIN: &str = "01";
pub const AI_BATCH_LOT: &str = "10";
pub const AI_EXPIRY: &str = "17";
pub const AI_SERIAL: &str = "21";

/// AI code to raw data value, kept in the order the AIs were found.
///
/// Serializes as a JSON object whose key order matches the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    entries: Vec<(String, String)>,
}

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. A repeated AI keeps its first position.
    pub fn insert(&mut self, code: impl Into<String>, value: impl Into<String>) {
        let code = code.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == code) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((code, value)),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, value)| (code.as_str(), value.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

impl Serialize for IdentifierMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, value) in &self.entries {
            map.serialize_entry(code, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IdentifierMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdentifierMapVisitor;

        impl<'de> Visitor<'de> for IdentifierMapVisitor {
            type Value = IdentifierMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of AI codes to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = IdentifierMap::new();
                while let Some((code, value)) = access.next_entry::<String, String>()? {
                    map.insert(code, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(IdentifierMapVisitor)
    }
}

/// Structured result of decoding one scanned string.
///
/// Produced fresh by every decode call; the four named fields are promoted
/// copies of AIs `01`, `10`, `17` and `00`, while `identifiers` holds every
/// recognized AI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBarcode {
    /// The scanned string exactly as received.
    pub raw_input: String,
    /// Whether the input was classified as GS1 at all.
    pub recognized_as_gs1: bool,
    /// GTIN from AI `01`.
    pub product_code: Option<String>,
    /// Batch or lot from AI `10`.
    pub lot_number: Option<String>,
    /// Expiration date from AI `17`, only when the payload is a valid date.
    pub expiry_date: Option<NaiveDate>,
    /// SSCC from AI `00`.
    pub shipping_container_code: Option<String>,
    pub identifiers: IdentifierMap,
}

impl ParsedBarcode {
    /// An inert result: not GS1, nothing extracted.
    pub fn unrecognized(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            recognized_as_gs1: false,
            product_code: None,
            lot_number: None,
            expiry_date: None,
            shipping_container_code: None,
            identifiers: IdentifierMap::new(),
        }
    }

    /// Raw value of any recognized AI.
    pub fn identifier(&self, code: &str) -> Option<&str> {
        self.identifiers.get(code)
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.identifier(AI_SERIAL)
    }

    /// True when no AI was recorded.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// True when any of GTIN, lot, expiry or SSCC was extracted.
    pub fn has_named_fields(&self) -> bool {
        self.product_code.is_some()
            || self.lot_number.is_some()
            || self.expiry_date.is_some()
            || self.shipping_container_code.is_some()
    }

    /// Renders the named fields as `LABEL: value` pieces joined by ` | `.
    ///
    /// Unrecognized scans, and recognized scans without any named field,
    /// render as the raw input.
    pub fn render(&self, options: &DisplayOptions) -> String {
        if !self.recognized_as_gs1 || !self.has_named_fields() {
            return self.raw_input.clone();
        }
        let mut parts = Vec::with_capacity(4);
        if let Some(gtin) = &self.product_code {
            parts.push(format!("GTIN: {gtin}"));
        }
        if let Some(lot) = &self.lot_number {
            parts.push(format!("LOT: {lot}"));
        }
        if let Some(expiry) = &self.expiry_date {
            parts.push(format!("EXP: {}", options.render_date(*expiry)));
        }
        if let Some(sscc) = &self.shipping_container_code {
            parts.push(format!("SSCC: {sscc}"));
        }
        parts.join(" | ")
    }
}

impl fmt::Display for ParsedBarcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayOptions::default()))
    }
}
