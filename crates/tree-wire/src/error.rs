use crate::header::HEADER_LEN;

/// Errors raised by the pure layout checks in this crate.
///
/// Streaming concerns (EOF, I/O) belong to the decoder; the wire layer only
/// looks at bytes it has already been handed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// The first five bytes of the record were not `"tree "`.
    #[error("expected \"tree \", found \"{}\"", .found.escape_ascii())]
    InvalidHeader { found: [u8; HEADER_LEN] },
}
