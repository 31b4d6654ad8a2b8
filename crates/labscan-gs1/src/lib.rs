//! GS1 Application Identifier decoding for scanned supply barcodes.
//!
//! - **detect**: loose classifier deciding whether a string is worth decoding
//! - **decoder**: the tokenizer producing a [`ParsedBarcode`]
//! - **date**: `YYMMDD` conversion with GS1 day-zero and year windowing rules
//! - **check_digit**: mod-10 check digits for GTIN and SSCC
//! - **table**: the read-only AI definition table
//!
//! Every function is pure and safe to call from any number of threads.

pub mod check_digit;
pub mod date;
pub mod decoder;
pub mod detect;
pub mod display;
pub mod table;

pub use check_digit::{compute_check_digit, validate_check_digit};
pub use date::{dated_identifier, parse_yymmdd, yymmdd_to_date};
pub use decoder::{decode, extract_product_code, is_shipping_container_code};
pub use detect::{FNC1_MARKERS, looks_like_gs1};
pub use display::{format_for_display, format_for_display_with};

pub use labscan_model::{AiDefinition, DisplayOptions, ParsedBarcode};
