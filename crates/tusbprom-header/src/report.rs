use std::fmt;

use crate::header::Header;
use crate::kinds::{data_type_name, eeprom_type_name};

/// A header check that can pass or fail without aborting decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Signature,
    HeaderLength,
    Checksum,
}

impl Check {
    pub fn name(self) -> &'static str {
        match self {
            Check::Signature => "signature",
            Check::HeaderLength => "header_length",
            Check::Checksum => "checksum",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of decoding an EEPROM image header.
///
/// Every field is echoed as read. The `*_ok` flags are advisory: decode
/// returns the payload whether or not they pass, and the caller decides how
/// to react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub signature: u32,
    pub signature_ok: bool,
    pub header_length: u8,
    pub header_length_ok: bool,
    pub version: u8,
    pub eeprom_type: u8,
    pub data_type: u8,
    pub data_size: u16,
    /// Checksum stored in the header.
    pub checksum_expected: u16,
    /// Checksum calculated from the payload.
    pub checksum_computed: u16,
    pub checksum_ok: bool,
}

impl ValidationReport {
    pub(crate) fn new(header: &Header, checksum_computed: u16) -> Self {
        Self {
            signature: header.signature,
            signature_ok: header.signature_ok(),
            header_length: header.header_length,
            header_length_ok: header.header_length_ok(),
            version: header.version,
            eeprom_type: header.eeprom_type,
            data_type: header.data_type,
            data_size: header.data_size,
            checksum_expected: header.checksum,
            checksum_computed,
            checksum_ok: header.checksum == checksum_computed,
        }
    }

    pub fn eeprom_type_label(&self) -> &'static str {
        eeprom_type_name(self.eeprom_type)
    }

    pub fn data_type_label(&self) -> &'static str {
        data_type_name(self.data_type)
    }

    /// True when signature, header length and checksum all match.
    pub fn is_valid(&self) -> bool {
        self.signature_ok && self.header_length_ok && self.checksum_ok
    }

    /// Failed checks, in header order.
    pub fn failures(&self) -> Vec<Check> {
        [
            (Check::Signature, self.signature_ok),
            (Check::HeaderLength, self.header_length_ok),
            (Check::Checksum, self.checksum_ok),
        ]
        .into_iter()
        .filter_map(|(check, ok)| (!ok).then_some(check))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::SIGNATURE;

    fn header() -> Header {
        Header::for_payload(&[0x10, 0x20]).unwrap()
    }

    #[test]
    fn test_clean_report() {
        let report = ValidationReport::new(&header(), 0x30);
        assert!(report.is_valid());
        assert!(report.failures().is_empty());
        assert_eq!(report.signature, SIGNATURE);
        assert_eq!(report.eeprom_type_label(), "24C64");
        assert_eq!(report.data_type_label(), "Application");
    }

    #[test]
    fn test_failures_in_header_order() {
        let mut h = header();
        h.signature = 0;
        h.header_length = 0;
        let report = ValidationReport::new(&h, 0x31);

        assert!(!report.is_valid());
        assert_eq!(
            report.failures(),
            vec![Check::Signature, Check::HeaderLength, Check::Checksum]
        );
        assert_eq!(report.checksum_expected, 0x30);
        assert_eq!(report.checksum_computed, 0x31);
    }

    #[test]
    fn test_unknown_types_are_not_failures() {
        let mut h = header();
        h.eeprom_type = 0xFF;
        h.data_type = 0xFF;
        let report = ValidationReport::new(&h, 0x30);

        assert!(report.is_valid());
        assert_eq!(report.eeprom_type_label(), "unknown");
        assert_eq!(report.data_type_label(), "unknown");
    }

    #[test]
    fn test_check_names() {
        assert_eq!(Check::Signature.to_string(), "signature");
        assert_eq!(Check::HeaderLength.name(), "header_length");
        assert_eq!(Check::Checksum.name(), "checksum");
    }
}
