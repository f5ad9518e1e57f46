//! Known EEPROM part and payload type codes.
//!
//! Unknown codes are valid on the wire; they only lack a display name.

/// 24C32 (4 KiB) serial EEPROM.
pub const EEPROM_24C32: u8 = 0x09;

/// 24C64 (8 KiB) serial EEPROM. Written by the encoder.
pub const EEPROM_24C64: u8 = 0x0a;

/// Application firmware payload. Written by the encoder.
pub const DATA_APPLICATION: u8 = 0x01;

/// Display name for codes missing from the tables below.
pub const UNKNOWN: &str = "unknown";

/// Returns a human-readable name for an EEPROM type code.
pub fn eeprom_type_name(code: u8) -> &'static str {
    match code {
        EEPROM_24C32 => "24C32",
        EEPROM_24C64 => "24C64",
        _ => UNKNOWN,
    }
}

/// Returns a human-readable name for a data type code.
pub fn data_type_name(code: u8) -> &'static str {
    match code {
        DATA_APPLICATION => "Application",
        _ => UNKNOWN,
    }
}

pub fn is_known_eeprom_type(code: u8) -> bool {
    eeprom_type_name(code) != UNKNOWN
}

pub fn is_known_data_type(code: u8) -> bool {
    data_type_name(code) != UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eeprom_names() {
        assert_eq!(eeprom_type_name(0x09), "24C32");
        assert_eq!(eeprom_type_name(0x0a), "24C64");
        assert_eq!(eeprom_type_name(0xFF), "unknown");
        assert!(is_known_eeprom_type(EEPROM_24C64));
        assert!(!is_known_eeprom_type(0x00));
    }

    #[test]
    fn test_data_type_names() {
        assert_eq!(data_type_name(0x01), "Application");
        assert_eq!(data_type_name(0xFF), "unknown");
        assert!(is_known_data_type(DATA_APPLICATION));
        assert!(!is_known_data_type(0x02));
    }
}
