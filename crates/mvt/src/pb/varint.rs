//! Base-128 varints.
//!
//! See <https://protobuf.dev/programming-guides/encoding/#varints>.

/// Maximum number of bytes for an encoded varint.
///
/// Each byte contains 7 value bits and one continuation bit, so a u64 needs
/// 9 full bytes plus one bit from the 10th byte.
pub const MAX_VARINT_LEN: usize = 10;

/// Decode a varint from the start of `buf`.
///
/// Returns the value and the number of bytes it occupied, or `None` if `buf`
/// ends before the terminating byte or the encoding is overlong.
pub fn decode_varint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut value = 0;
    for (index, byte) in buf.iter().copied().take(MAX_VARINT_LEN).enumerate() {
        // High bit is continuation bit. Low 7 bits are the payload.
        value |= ((byte & 0x7f) as u64) << (index * 7);
        if byte <= 0x7f {
            // Only one value bit from the last byte may be used.
            if index + 1 == MAX_VARINT_LEN && byte > 0x01 {
                return None;
            }
            return Some((value, index + 1));
        }
    }
    None
}

#[cfg(test)]
pub fn encode_varint(mut val: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(MAX_VARINT_LEN);
    loop {
        let byte = (val & 0x7f) as u8;
        if val <= 0x7f {
            bytes.push(byte);
            break;
        }
        bytes.push(byte | 0x80);
        val >>= 7;
    }
    bytes
}
