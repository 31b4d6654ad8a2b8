//! The GS1 Application Identifier table.
//!
//! Only two-digit AIs are defined; lookups still accept three and four digit
//! codes so longer AIs can be added without touching the tokenizer.

use std::collections::HashMap;
use std::sync::LazyLock;

use labscan_model::{AiDefinition, ValueKind};

/// Shortest AI code length.
pub const MIN_AI_LEN: usize = 2;
/// Longest AI code length.
pub const MAX_AI_LEN: usize = 4;

const DEFINITIONS: &[AiDefinition] = &[
    AiDefinition::fixed("00", "SSCC", 18, ValueKind::Numeric),
    AiDefinition::fixed("01", "GTIN", 14, ValueKind::Numeric),
    AiDefinition::fixed("02", "CONTENT", 14, ValueKind::Numeric),
    AiDefinition::variable("10", "BATCH/LOT", 1, 20, ValueKind::Alphanumeric),
    AiDefinition::fixed("11", "PROD DATE", 6, ValueKind::Date),
    AiDefinition::fixed("13", "PACK DATE", 6, ValueKind::Date),
    AiDefinition::fixed("15", "BEST BEFORE", 6, ValueKind::Date),
    AiDefinition::fixed("17", "USE BY", 6, ValueKind::Date),
    AiDefinition::fixed("20", "VARIANT", 2, ValueKind::Numeric),
    AiDefinition::variable("21", "SERIAL", 1, 20, ValueKind::Alphanumeric),
    AiDefinition::variable("30", "VAR. COUNT", 1, 8, ValueKind::Numeric),
    AiDefinition::variable("37", "COUNT", 1, 8, ValueKind::Numeric),
];

static TABLE: LazyLock<HashMap<&'static str, &'static AiDefinition>> = LazyLock::new(|| {
    DEFINITIONS
        .iter()
        .map(|definition| (definition.code, definition))
        .collect()
});

/// Looks up an AI by exact code.
pub fn lookup(code: &str) -> Option<&'static AiDefinition> {
    TABLE.get(code).copied()
}

/// All known AIs in code order.
pub fn definitions() -> &'static [AiDefinition] {
    DEFINITIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = DEFINITIONS.iter().map(|d| d.code).collect();
        assert_eq!(codes.len(), DEFINITIONS.len());
    }

    #[test]
    fn codes_are_sorted_digits_within_bounds() {
        let codes: Vec<&str> = DEFINITIONS.iter().map(|d| d.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        for code in codes {
            assert!((MIN_AI_LEN..=MAX_AI_LEN).contains(&code.len()));
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("17").map(|d| d.display_name), Some("USE BY"));
        assert!(lookup("1").is_none());
        assert!(lookup("170").is_none());
        assert!(lookup("99").is_none());
    }
}
