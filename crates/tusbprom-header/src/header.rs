use bytes::{Buf, BufMut, BytesMut};

use crate::checksum::checksum;
use crate::error::{HeaderError, Result};
use crate::kinds::{DATA_APPLICATION, EEPROM_24C64};

/// Boot header size in bytes. The payload always starts at this offset.
pub const HEADER_SIZE: usize = 16;

/// Signature identifying a framed EEPROM image.
pub const SIGNATURE: u32 = 0x0451_3200;

/// Largest payload the 16-bit size field can describe.
pub const MAX_PAYLOAD: usize = u16::MAX as usize;

/// Header format version written by the encoder.
pub const VERSION: u8 = 0;

const RESERVED: [u8; 4] = [0; 4];

/// EEPROM boot header as stored on the wire.
///
/// Wire format (little-endian):
/// ```text
/// ┌───────────┬─────┬─────┬───────┬───────┬──────────┬──────────┬──────────┐
/// │ Signature │ Len │ Ver │ EType │ DType │ DataSize │ Checksum │ Reserved │
/// │ (4B LE)   │ 1B  │ 1B  │ 1B    │ 1B    │ (2B LE)  │ (2B LE)  │ (4B)     │
/// └───────────┴─────┴─────┴───────┴───────┴──────────┴──────────┴──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub signature: u32,
    pub header_length: u8,
    pub version: u8,
    pub eeprom_type: u8,
    pub data_type: u8,
    pub data_size: u16,
    pub checksum: u16,
}

impl Header {
    /// Build the header the encoder writes in front of `payload`.
    pub fn for_payload(payload: &[u8]) -> Result<Self> {
        let data_size = u16::try_from(payload.len()).map_err(|_| HeaderError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD,
        })?;

        Ok(Self {
            signature: SIGNATURE,
            header_length: HEADER_SIZE as u8,
            version: VERSION,
            eeprom_type: EEPROM_24C64,
            data_type: DATA_APPLICATION,
            data_size,
            checksum: checksum(payload),
        })
    }

    /// Parse the header from the start of `src`. Trailing bytes are not read.
    pub fn parse(src: &[u8]) -> Result<Self> {
        if src.len() < HEADER_SIZE {
            return Err(HeaderError::TruncatedHeader { len: src.len() });
        }

        let mut buf = &src[..HEADER_SIZE];
        let header = Self {
            signature: buf.get_u32_le(),
            header_length: buf.get_u8(),
            version: buf.get_u8(),
            eeprom_type: buf.get_u8(),
            data_type: buf.get_u8(),
            data_size: buf.get_u16_le(),
            checksum: buf.get_u16_le(),
        };
        // Reserved bytes are ignored.
        buf.advance(RESERVED.len());
        debug_assert!(!buf.has_remaining());

        Ok(header)
    }

    /// Append the 16 wire bytes to `dst`.
    pub fn write_to(&self, dst: &mut BytesMut) {
        dst.reserve(HEADER_SIZE);
        dst.put_u32_le(self.signature);
        dst.put_u8(self.header_length);
        dst.put_u8(self.version);
        dst.put_u8(self.eeprom_type);
        dst.put_u8(self.data_type);
        dst.put_u16_le(self.data_size);
        dst.put_u16_le(self.checksum);
        dst.put_slice(&RESERVED);
    }

    /// Offset one past the last payload byte.
    pub fn payload_end(&self) -> usize {
        HEADER_SIZE + usize::from(self.data_size)
    }

    pub fn signature_ok(&self) -> bool {
        self.signature == SIGNATURE
    }

    pub fn header_length_ok(&self) -> bool {
        usize::from(self.header_length) == HEADER_SIZE
    }
}
