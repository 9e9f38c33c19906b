use crate::error::WireError;

/// Header literal of a binary tree record, trailing separator included.
pub const TREE_HEADER: [u8; HEADER_LEN] = *b"tree ";

/// Length of [`TREE_HEADER`] in bytes.
pub const HEADER_LEN: usize = 5;

/// Check the fixed header literal.
///
/// The comparison is exact: `"Tree "`, `"tree\0"` and `"trees"` are all
/// rejected.
///
/// # Errors
///
/// Returns [`WireError::InvalidHeader`] carrying the bytes actually found.
pub fn check_header(buf: &[u8; HEADER_LEN]) -> Result<(), WireError> {
    if *buf == TREE_HEADER {
        Ok(())
    } else {
        Err(WireError::InvalidHeader { found: *buf })
    }
}

/// The header as it appears in the text encoding: the token with its
/// separator swapped for the field delimiter.
#[must_use]
pub fn text_header() -> [u8; HEADER_LEN] {
    let mut out = TREE_HEADER;
    out[HEADER_LEN - 1] = crate::TEXT_DELIMITER;
    out
}
