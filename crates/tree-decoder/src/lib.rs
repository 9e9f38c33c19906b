#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;

pub use config::DecoderConfig;
pub use decoder::{
    DecodeSummary, EntryField, State, TreeDecoder, decode, decode_to_vec, decode_with_config,
};
pub use error::DecodeError;
pub use tree_wire::{Field, Grammar};
