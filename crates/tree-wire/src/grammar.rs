use std::fmt;

use crate::{LINE_END, TEXT_DELIMITER};

/// Field grammar applied by the decoder.
///
/// ```text
/// ┌─────────────┬──────────────────────┬───────────────────────────────┐
/// │ Field       │ Strict               │ Permissive                    │
/// ├─────────────┼──────────────────────┼───────────────────────────────┤
/// │ header      │ exactly "tree "      │ any bytes up to first space   │
/// │ size        │ ASCII digits         │ anything but ':' and '\n'     │
/// │ permissions │ ASCII digits         │ anything but ':' and '\n'     │
/// │ filename    │ anything but ':' and '\n' (both grammars)            │
/// └─────────────┴──────────────────────┴───────────────────────────────┘
/// ```
///
/// `Strict` is the default and the grammar used by the command-line tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grammar {
    #[default]
    Strict,
    Permissive,
}

impl Grammar {
    /// Whether `byte` may appear in the size field before its terminator.
    #[must_use]
    pub fn accepts_size_byte(self, byte: u8) -> bool {
        match self {
            Self::Strict => byte.is_ascii_digit(),
            Self::Permissive => !is_text_reserved(byte),
        }
    }

    /// Whether `byte` may appear in the permissions field before the
    /// separator.
    #[must_use]
    pub fn accepts_permissions_byte(self, byte: u8) -> bool {
        match self {
            Self::Strict => byte.is_ascii_digit(),
            Self::Permissive => !is_text_reserved(byte),
        }
    }
}

/// Whether `byte` may appear in a filename before its terminator.
#[must_use]
pub fn accepts_filename_byte(byte: u8) -> bool {
    !is_text_reserved(byte)
}

/// Bytes that would collide with the text encoding's delimiters.
fn is_text_reserved(byte: u8) -> bool {
    byte == TEXT_DELIMITER || byte == LINE_END
}

/// Field categories of a tree record, used to label diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Header,
    Size,
    Permissions,
    Filename,
    Hash,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Size => "size",
            Self::Permissions => "permissions",
            Self::Filename => "filename",
            Self::Hash => "hash",
        };
        f.write_str(name)
    }
}
