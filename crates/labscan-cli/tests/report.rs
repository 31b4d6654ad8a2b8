//! Integration tests for scan reporting.

use labscan_cli::report::{ai_table, check_digit_verdicts, render_json, render_text, scan_table};
use labscan_gs1::decode;
use labscan_model::{CheckDigitError, DisplayOptions};

// 0400638133393 is a GS1 reference GTIN-13; padded to 14 digits, check digit 1.
const VALID_SCAN: &str = "(01)04006381333931(17)250900(10)LOT7";

#[test]
fn verdicts_only_cover_check_digit_ais() {
    let parsed = decode(VALID_SCAN);
    let verdicts = check_digit_verdicts(&parsed);
    assert_eq!(verdicts.len(), 1);
    assert_eq!(verdicts[0].ai, "01");
    assert_eq!(verdicts[0].result, Ok(()));
}

#[test]
fn verdict_reports_mismatch() {
    let parsed = decode("(01)04006381333932");
    let verdicts = check_digit_verdicts(&parsed);
    assert_eq!(
        verdicts[0].result,
        Err(CheckDigitError::Mismatch {
            expected: 1,
            found: 2
        })
    );
    assert_eq!(
        verdicts[0].describe(),
        "check digit mismatch: expected 1, found 2"
    );
}

#[test]
fn text_output_appends_verdicts() {
    let parsed = decode(VALID_SCAN);
    let options = DisplayOptions::default();
    insta::assert_snapshot!(
        render_text(&parsed, &options, true),
        @"GTIN: 04006381333931 | LOT: LOT7 | EXP: 2025-09-30 [01: check digit ok]"
    );
    assert_eq!(
        render_text(&parsed, &options, false),
        "GTIN: 04006381333931 | LOT: LOT7 | EXP: 2025-09-30"
    );
}

#[test]
fn scan_table_lists_every_identifier() {
    let parsed = decode("(01)04006381333931(17)259999(21)S1");
    let rendered = scan_table(&parsed, &DisplayOptions::default(), true).to_string();
    assert!(rendered.contains("GTIN"));
    assert!(rendered.contains("04006381333931"));
    assert!(rendered.contains("check digit ok"));
    assert!(rendered.contains("invalid date"));
    assert!(rendered.contains("SERIAL"));
    assert!(rendered.contains("S1"));
}

#[test]
fn scan_table_interprets_dates() {
    let parsed = decode("(11)240115");
    let rendered = scan_table(&parsed, &DisplayOptions::default(), false).to_string();
    assert!(rendered.contains("PROD DATE"));
    assert!(rendered.contains("2024-01-15"));
}

#[test]
fn scan_table_survives_time_only_date_format() {
    let parsed = decode("(11)240115");
    let options = DisplayOptions {
        date_format: "%H".to_string(),
    };
    let rendered = scan_table(&parsed, &options, false).to_string();
    assert!(rendered.contains("2024-01-15"));
}

#[test]
fn ai_table_lists_definitions() {
    let rendered = ai_table().to_string();
    for expected in ["SSCC", "fixed 18", "BATCH/LOT", "variable 1..20", "date"] {
        assert!(rendered.contains(expected), "missing {expected}");
    }
}

#[test]
fn json_output_is_an_array_in_input_order() {
    let results = vec![decode("(00)123456789012345678"), decode("abc")];
    let json = render_json(&results).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["shipping_container_code"], "123456789012345678");
    assert_eq!(array[1]["recognized_as_gs1"], false);
}
