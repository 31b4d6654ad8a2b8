//! Snapshot tests for rendering decoded scans.

use labscan_gs1::{DisplayOptions, decode, format_for_display, format_for_display_with};

#[test]
fn full_scan_renders_all_named_fields() {
    let parsed = decode("(01)12345678901234(17)261231(10)LOTABC123");
    insta::assert_snapshot!(
        format_for_display(&parsed),
        @"GTIN: 12345678901234 | LOT: LOTABC123 | EXP: 2026-12-31"
    );
}

#[test]
fn sscc_scan_renders_alone() {
    let parsed = decode("(00)123456789012345678");
    insta::assert_snapshot!(format_for_display(&parsed), @"SSCC: 123456789012345678");
}

#[test]
fn unrecognized_scan_renders_verbatim() {
    let parsed = decode("not a barcode");
    assert_eq!(format_for_display(&parsed), "not a barcode");
}

#[test]
fn recognized_scan_without_named_fields_renders_verbatim() {
    let parsed = decode("(21)SERIAL9");
    assert_eq!(parsed.serial_number(), Some("SERIAL9"));
    assert_eq!(format_for_display(&parsed), "(21)SERIAL9");
}

#[test]
fn custom_date_format() {
    let parsed = decode("(17)250900(10)L1");
    let options = DisplayOptions::new()
        .with_date_format("%d.%m.%Y")
        .unwrap();
    insta::assert_snapshot!(
        format_for_display_with(&parsed, &options),
        @"LOT: L1 | EXP: 30.09.2025"
    );
}

#[test]
fn time_only_date_format_does_not_panic() {
    let parsed = decode("(17)250900(10)L1");
    let options = DisplayOptions {
        date_format: "%H:%M".to_string(),
    };
    insta::assert_snapshot!(
        format_for_display_with(&parsed, &options),
        @"LOT: L1 | EXP: 2025-09-30"
    );
}

#[test]
fn json_shape() {
    let parsed = decode("(00)123456789012345678");
    insta::assert_json_snapshot!(parsed, @r#"
    {
      "raw_input": "(00)123456789012345678",
      "recognized_as_gs1": true,
      "product_code": null,
      "lot_number": null,
      "expiry_date": null,
      "shipping_container_code": "123456789012345678",
      "identifiers": {
        "00": "123456789012345678"
      }
    }
    "#);
}
