#![warn(clippy::pedantic)]

pub mod error;
pub mod grammar;
pub mod hash;
pub mod header;

pub use error::WireError;
pub use grammar::{Field, Grammar};

/// Separates the permissions field from the filename, and the strict
/// header token from the size field.
pub const FIELD_SEPARATOR: u8 = b' ';

/// Terminates the size field and every filename.
pub const TERMINATOR: u8 = 0x00;

/// Field delimiter in the text encoding.
pub const TEXT_DELIMITER: u8 = b':';

/// Line terminator in the text encoding.
pub const LINE_END: u8 = b'\n';
