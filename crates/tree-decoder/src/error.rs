use tree_wire::{Field, WireError};

/// Errors that can occur while decoding a binary tree record.
///
/// Every variant is fatal. The decoder does not skip or repair entries; the
/// first problem ends the decode and any output written so far should be
/// treated as incomplete.
///
/// ```text
///   DecodeError
///   ├── UnexpectedEof        ← input ended inside a field
///   ├── InvalidHeader        ← first five bytes are not "tree "
///   ├── InvalidSizeField     ← size byte outside the grammar
///   ├── EmptyPermissions     ← entry starts with the separator
///   ├── InvalidPermissions   ← permissions byte outside the grammar
///   ├── InvalidFilename      ← ':' or '\n' inside a filename
///   ├── Halted               ← step/run called after an earlier failure
///   └── Io(std::io::Error)   ← read or write failure
/// ```
///
/// Offsets are zero-based positions in the input stream. For invalid bytes
/// they point at the offending byte; for `UnexpectedEof` they are the number
/// of bytes consumed before the stream ended.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before the named field was complete.
    #[error("unexpected end of input in {field} field at offset {offset}")]
    UnexpectedEof { field: Field, offset: u64 },

    /// The header literal did not match (strict grammar only).
    #[error("invalid tree header: {0}")]
    InvalidHeader(WireError),

    #[error("invalid character '{}' in size field at offset {offset}", .byte.escape_ascii())]
    InvalidSizeField { byte: u8, offset: u64 },

    /// The entry's first byte was the permissions separator.
    #[error("empty permissions field at offset {offset}")]
    EmptyPermissions { offset: u64 },

    #[error("invalid character '{}' in permissions field at offset {offset}", .byte.escape_ascii())]
    InvalidPermissions { byte: u8, offset: u64 },

    /// A filename contained the text delimiter or a newline.
    #[error("filename field contains '{}' at offset {offset}", .byte.escape_ascii())]
    InvalidFilename { byte: u8, offset: u64 },

    /// The decoder already returned an error and will not read further.
    #[error("decoder halted after an earlier error")]
    Halted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// The record field the error was detected in, if it is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::UnexpectedEof { field, .. } => Some(*field),
            Self::InvalidHeader(_) => Some(Field::Header),
            Self::InvalidSizeField { .. } => Some(Field::Size),
            Self::EmptyPermissions { .. } | Self::InvalidPermissions { .. } => {
                Some(Field::Permissions)
            }
            Self::InvalidFilename { .. } => Some(Field::Filename),
            Self::Halted | Self::Io(_) => None,
        }
    }
}
