//! Human-readable rendering of decode results.

use labscan_model::{DisplayOptions, ParsedBarcode};

/// Renders `parsed` with the default options.
///
/// Unrecognized scans come back verbatim; otherwise the present named fields
/// are joined with ` | ` in the order GTIN, lot, expiry, SSCC.
pub fn format_for_display(parsed: &ParsedBarcode) -> String {
    format_for_display_with(parsed, &DisplayOptions::default())
}

/// Renders `parsed` with `options`, e.g. a custom expiry date pattern.
///
/// A pattern that cannot render a calendar date falls back to `%Y-%m-%d`.
pub fn format_for_display_with(parsed: &ParsedBarcode, options: &DisplayOptions) -> String {
    parsed.render(options)
}
