//! I2C EEPROM boot header codec for TUSB3200-class USB controllers.
//!
//! An EEPROM programming image is a fixed 16-byte little-endian header
//! followed by the raw firmware payload:
//! - A 4-byte signature (`0x04513200`)
//! - Header length, version, EEPROM type and data type (1 byte each)
//! - A 2-byte payload size and a 2-byte additive payload checksum
//! - 4 reserved bytes
//!
//! Decoding never rejects a header because a field looks wrong. Signature,
//! header length and checksum are checked and returned in a
//! [`ValidationReport`]; only truncated input is an error.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod header;
pub mod kinds;
pub mod report;

pub use checksum::checksum;
pub use codec::{decode, decode_bytes, encode, encode_into};
pub use error::{HeaderError, Result};
pub use header::{Header, HEADER_SIZE, MAX_PAYLOAD, SIGNATURE};
pub use kinds::{
    data_type_name, eeprom_type_name, DATA_APPLICATION, EEPROM_24C32, EEPROM_24C64, UNKNOWN,
};
pub use report::{Check, ValidationReport};
