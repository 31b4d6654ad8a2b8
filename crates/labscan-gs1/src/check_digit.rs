//! GS1 mod-10 check digits for GTIN and SSCC values.
//!
//! Weights alternate 3, 1, 3, ... starting from the digit nearest the check
//! digit. Decoding never consults these; validation is an explicit call.

use labscan_model::{CheckDigitError, Result};

/// Computes the check digit for `digits` (the payload without its check digit).
pub fn compute_check_digit(digits: &str) -> Result<u8, CheckDigitError> {
    if digits.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    let mut sum = 0u32;
    for (index_from_right, (position, ch)) in digits.char_indices().rev().enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or(CheckDigitError::NonDigit { position, found: ch })?;
        let weight = if index_from_right % 2 == 0 { 3 } else { 1 };
        sum += digit * weight;
    }
    Ok(((10 - sum % 10) % 10) as u8)
}

/// Verifies that the last digit of `value` is its GS1 check digit.
pub fn validate_check_digit(value: &str) -> Result<(), CheckDigitError> {
    let Some((split, last)) = value.char_indices().last() else {
        return Err(CheckDigitError::Empty);
    };
    let found = last.to_digit(10).ok_or(CheckDigitError::NonDigit {
        position: split,
        found: last,
    })? as u8;
    let expected = compute_check_digit(&value[..split])?;
    if expected == found {
        Ok(())
    } else {
        Err(CheckDigitError::Mismatch { expected, found })
    }
}
