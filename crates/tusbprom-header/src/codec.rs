use bytes::{BufMut, Bytes, BytesMut};

use crate::checksum::checksum;
use crate::error::{HeaderError, Result};
use crate::header::{Header, HEADER_SIZE};
use crate::report::ValidationReport;

/// Frame `payload` as an EEPROM image, appending it to `dst`.
///
/// Fails with [`HeaderError::PayloadTooLarge`] if the payload exceeds
/// 65535 bytes; nothing is written in that case.
pub fn encode_into(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    let header = Header::for_payload(payload)?;
    dst.reserve(HEADER_SIZE + payload.len());
    header.write_to(dst);
    dst.put_slice(payload);
    Ok(())
}

/// Frame `payload` as an EEPROM image.
pub fn encode(payload: &[u8]) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    encode_into(payload, &mut dst)?;
    Ok(dst.freeze())
}

/// Decode an EEPROM image into its payload and a header report.
///
/// Only truncated input is an error. A wrong signature, header length or
/// checksum is recorded in the report and the payload is still returned.
/// Bytes past the declared payload are ignored.
pub fn decode(framed: &[u8]) -> Result<(Bytes, ValidationReport)> {
    let (header, end) = parse_bounds(framed)?;
    let payload = &framed[HEADER_SIZE..end];
    let report = ValidationReport::new(&header, checksum(payload));
    Ok((Bytes::copy_from_slice(payload), report))
}

/// Like [`decode`], but returns the payload as a slice of `framed` without copying.
pub fn decode_bytes(framed: Bytes) -> Result<(Bytes, ValidationReport)> {
    let (header, end) = parse_bounds(&framed)?;
    let payload = framed.slice(HEADER_SIZE..end);
    let report = ValidationReport::new(&header, checksum(&payload));
    Ok((payload, report))
}

fn parse_bounds(framed: &[u8]) -> Result<(Header, usize)> {
    let header = Header::parse(framed)?;
    let end = header.payload_end();
    if framed.len() < end {
        return Err(HeaderError::TruncatedPayload {
            need: end,
            have: framed.len(),
        });
    }
    Ok((header, end))
}
