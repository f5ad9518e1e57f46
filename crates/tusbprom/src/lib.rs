//! Encode and decode TUSB3200 I2C EEPROM boot images.
//!
//! # Crate Structure
//!
//! - [`header`] — Boot header layout, checksum, and the image codec
//!
//! The `tusbprom` binary (behind the `cli` feature) wraps the codec with file
//! and stdin/stdout handling and renders the header report.

/// Re-export header codec types.
pub mod header {
    pub use tusbprom_header::*;
}
