/// Length of a raw hash block in bytes.
pub const HASH_LEN: usize = 20;

/// Length of a hash block once rendered as hex text.
pub const HEX_HASH_LEN: usize = HASH_LEN * 2;

/// Render one hash byte as two lowercase hex digits.
///
/// Hash blocks are streamed a byte at a time, so there is no whole-block
/// variant here.
#[must_use]
pub fn hex_pair(byte: u8) -> [u8; 2] {
    let mut out = [0u8; 2];
    // A one-byte input always fits a two-byte output.
    let _ = hex::encode_to_slice([byte], &mut out);
    out
}
