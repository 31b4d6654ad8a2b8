pub mod barcode;
pub mod error;
pub mod identifier;
pub mod options;

pub use barcode::{
    AI_BATCH_LOT, AI_EXPIRY, AI_GTIN, AI_SERIAL, AI_SSCC, IdentifierMap, ParsedBarcode,
};
pub use error::{CheckDigitError, DateError, OptionsError, Result};
pub use identifier::{AiDefinition, LengthRule, ValueKind};
pub use options::{DEFAULT_DATE_FORMAT, DisplayOptions};
