//! Tokenizer turning a scanned string into GS1 element strings.
//!
//! Variable-length fields have no delimiter once FNC1 is stripped, so the
//! end of such a field is the first position (within the AI's length range)
//! where another known AI can be matched. Data that happens to contain a
//! known AI's digits is cut there; that ambiguity is inherent to the format.

use labscan_model::{
    AI_BATCH_LOT, AI_EXPIRY, AI_GTIN, AI_SSCC, AiDefinition, LengthRule, ParsedBarcode,
};
use tracing::{debug, trace};

use crate::date::yymmdd_to_date;
use crate::detect::{looks_like_gs1, strip_fnc1};
use crate::table::{self, MAX_AI_LEN, MIN_AI_LEN};

/// Outcome of AI detection at one position.
enum Detection {
    Found {
        definition: &'static AiDefinition,
        data_start: usize,
    },
    /// Nothing known starts here; move on by one character.
    Skip,
    /// Too little input left for any AI.
    Exhausted,
}

/// Decodes a scanned string into its GS1 Application Identifiers.
///
/// Never fails: input that does not look like GS1 yields an unrecognized,
/// empty result, and malformed segments are skipped.
pub fn decode(code: &str) -> ParsedBarcode {
    let mut result = ParsedBarcode::unrecognized(code);
    if !looks_like_gs1(code) {
        trace!("input not classified as GS1");
        return result;
    }
    result.recognized_as_gs1 = true;

    let chars: Vec<char> = strip_fnc1(code).chars().collect();
    let len = chars.len();
    let mut pos = 0;
    while pos < len {
        let (definition, data_start) = match detect_ai(&chars, pos) {
            Detection::Found {
                definition,
                data_start,
            } => (definition, data_start),
            Detection::Skip => {
                trace!(position = pos, "skipping unrecognized character");
                pos += 1;
                continue;
            }
            Detection::Exhausted => break,
        };

        let data_end = match definition.length_rule {
            LengthRule::Fixed(n) => (data_start + n).min(len),
            LengthRule::Variable { min, max } => {
                let end = find_boundary(&chars, data_start, min, max).unwrap_or(len);
                if !definition.length_rule.accepts(end - data_start) {
                    debug!(
                        ai = definition.code,
                        position = pos,
                        value_len = end - data_start,
                        "rejecting AI with out-of-range data length"
                    );
                    pos += 1;
                    continue;
                }
                end
            }
        };

        let value: String = chars[data_start..data_end].iter().collect();
        debug!(
            ai = definition.code,
            position = pos,
            value_len = value.chars().count(),
            "recognized AI"
        );
        trace!(ai = definition.code, value = %value, "AI value");
        record(&mut result, definition, value);
        pos = data_end;
    }

    debug!(identifiers = result.identifiers.len(), "decoded GS1 scan");
    result
}

/// Product code (AI `01`) of `code`, if any.
pub fn extract_product_code(code: &str) -> Option<String> {
    decode(code).product_code
}

/// True when `code` carries an SSCC (AI `00`).
pub fn is_shipping_container_code(code: &str) -> bool {
    decode(code).shipping_container_code.is_some()
}

fn detect_ai(chars: &[char], pos: usize) -> Detection {
    if chars.len() - pos < MIN_AI_LEN {
        return Detection::Exhausted;
    }
    match match_ai(chars, pos) {
        Some((definition, data_start)) => Detection::Found {
            definition,
            data_start,
        },
        None => Detection::Skip,
    }
}

/// Matches a known AI at `pos`, returning it and the index just past it.
fn match_ai(chars: &[char], pos: usize) -> Option<(&'static AiDefinition, usize)> {
    if chars.get(pos) == Some(&'(') {
        match_parenthesized(chars, pos)
    } else {
        match_bare(chars, pos)
    }
}

fn match_parenthesized(chars: &[char], pos: usize) -> Option<(&'static AiDefinition, usize)> {
    let digits_start = pos + 1;
    let digit_count = chars[digits_start.min(chars.len())..]
        .iter()
        .take(MAX_AI_LEN + 1)
        .take_while(|c| c.is_ascii_digit())
        .count();
    if !(MIN_AI_LEN..=MAX_AI_LEN).contains(&digit_count) {
        return None;
    }
    let close = digits_start + digit_count;
    if chars.get(close) != Some(&')') {
        return None;
    }
    let code: String = chars[digits_start..close].iter().collect();
    table::lookup(&code).map(|definition| (definition, close + 1))
}

/// Tries two-digit codes first, then three and four.
fn match_bare(chars: &[char], pos: usize) -> Option<(&'static AiDefinition, usize)> {
    (MIN_AI_LEN..=MAX_AI_LEN).find_map(|width| {
        let candidate = chars.get(pos..pos + width)?;
        if !candidate.iter().all(char::is_ascii_digit) {
            return None;
        }
        let code: String = candidate.iter().collect();
        table::lookup(&code).map(|definition| (definition, pos + width))
    })
}

/// First index in `data_start + min ..= data_start + max` where a known AI starts.
fn find_boundary(chars: &[char], data_start: usize, min: usize, max: usize) -> Option<usize> {
    let last = (data_start + max).min(chars.len().saturating_sub(1));
    (data_start + min..=last).find(|&index| match_ai(chars, index).is_some())
}

fn record(result: &mut ParsedBarcode, definition: &AiDefinition, value: String) {
    match definition.code {
        AI_GTIN => result.product_code = Some(value.clone()),
        AI_BATCH_LOT => result.lot_number = Some(value.clone()),
        AI_SSCC => result.shipping_container_code = Some(value.clone()),
        AI_EXPIRY => {
            // Follows the latest AI 17 so the date never disagrees with the map.
            result.expiry_date = yymmdd_to_date(&value);
            if result.expiry_date.is_none() {
                debug!(ai = definition.code, "expiry payload is not a valid date");
            }
        }
        _ => {}
    }
    result.identifiers.insert(definition.code, value);
}
