/// Additive payload checksum: the sum of all bytes, modulo 65536.
pub fn checksum(payload: &[u8]) -> u16 {
    payload
        .iter()
        .fold(0u16, |acc, &byte| acc.wrapping_add(u16::from(byte)))
}
