/// Errors that abort encoding or decoding an EEPROM image.
///
/// Field mismatches (signature, header length, checksum) are not errors; they
/// are recorded in [`crate::ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// The input is shorter than the fixed header.
    #[error("cannot decode header: {len} bytes of input, need at least 16")]
    TruncatedHeader { len: usize },

    /// The header declares more payload bytes than the input holds.
    #[error("not enough input: need at least {need} bytes, have {have}")]
    TruncatedPayload { need: usize, have: usize },

    /// The payload does not fit the 16-bit size field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, HeaderError>;
