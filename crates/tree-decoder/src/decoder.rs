use std::io::{BufRead, ErrorKind, Write};

use tracing::{debug, trace};
use tree_wire::grammar::accepts_filename_byte;
use tree_wire::hash::{HASH_LEN, hex_pair};
use tree_wire::header::{HEADER_LEN, check_header, text_header};
use tree_wire::{FIELD_SEPARATOR, Field, Grammar, LINE_END, TERMINATOR, TEXT_DELIMITER};

use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Position of the decoder within a tree record.
///
/// Each non-terminal state has exactly one transition function, and each
/// transition consumes exactly one field:
///
/// ```text
///   Header → Size → Entry(Permissions) → Entry(Filename) → Entry(Hash)
///                        ↑    │                                  │
///                        │    └── EOF at first byte ──→ Done     │
///                        └───────────────────────────────────────┘
///
///   any transition ── error ──→ Failed
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Header,
    Size,
    Entry(EntryField),
    /// The record ended cleanly at an entry boundary.
    Done,
    /// A transition returned an error; no further input will be read.
    Failed,
}

/// The field of an entry the decoder will read next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryField {
    Permissions,
    Filename,
    Hash,
}

/// What a successful decode saw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Number of entry lines written.
    pub entries: usize,
    /// Total bytes consumed from the input.
    pub bytes_read: u64,
}

/// Streaming decoder from the binary tree layout to its text encoding.
///
/// The decoder pulls one byte at a time from a [`BufRead`] and writes each
/// validated byte (or its replacement) to the writer immediately. Nothing
/// beyond the current byte is held, except the five header bytes compared
/// under the strict grammar.
///
/// # Example
///
/// ```rust
/// use tree_decoder::TreeDecoder;
///
/// let mut input = b"tree 0\0644 a.txt\0".to_vec();
/// input.extend(0u8..20);
///
/// let mut out = Vec::new();
/// let summary = TreeDecoder::new(&input[..], &mut out).run().unwrap();
///
/// assert_eq!(summary.entries, 1);
/// assert_eq!(
///     out,
///     b"tree:0\n644:a.txt:000102030405060708090a0b0c0d0e0f10111213\n"
/// );
/// ```
pub struct TreeDecoder<R, W> {
    reader: R,
    writer: W,
    config: DecoderConfig,
    state: State,
    bytes_read: u64,
    entries: usize,
}

impl<R: BufRead, W: Write> TreeDecoder<R, W> {
    /// Create a decoder using the strict grammar.
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(reader: R, writer: W, config: DecoderConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            state: State::Header,
            bytes_read: 0,
            entries: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Text written so far.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Give back the reader (positioned after the last consumed byte) and
    /// the writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Run the transition function for the current state.
    ///
    /// Returns the state the decoder moved to. Calling `step` in `Done`
    /// is a no-op that returns `Done` again.
    ///
    /// # Errors
    ///
    /// Returns the field's validation error, or [`DecodeError::Io`]. The
    /// decoder then enters [`State::Failed`] and any later call returns
    /// [`DecodeError::Halted`] without touching the reader.
    pub fn step(&mut self) -> Result<State, DecodeError> {
        let result = match self.state {
            State::Header => self.read_header(),
            State::Size => self.read_size(),
            State::Entry(EntryField::Permissions) => self.read_permissions(),
            State::Entry(EntryField::Filename) => self.read_filename(),
            State::Entry(EntryField::Hash) => self.read_hash(),
            State::Done => Ok(State::Done),
            State::Failed => return Err(DecodeError::Halted),
        };

        match result {
            Ok(next) => {
                self.state = next;
                Ok(next)
            }
            Err(e) => {
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    /// Step until the record ends, then flush the writer.
    ///
    /// # Errors
    ///
    /// Returns the first error any transition produced.
    pub fn run(&mut self) -> Result<DecodeSummary, DecodeError> {
        while self.step()? != State::Done {}
        self.writer.flush()?;

        let summary = DecodeSummary {
            entries: self.entries,
            bytes_read: self.bytes_read,
        };
        debug!(
            entries = summary.entries,
            bytes_read = summary.bytes_read,
            "tree record decoded"
        );
        Ok(summary)
    }

    // ── Transitions ──────────────────────────────────────────────────────

    fn read_header(&mut self) -> Result<State, DecodeError> {
        match self.config.grammar {
            Grammar::Strict => {
                let mut buf = [0u8; HEADER_LEN];
                for slot in &mut buf {
                    *slot = self.require_byte(Field::Header)?;
                }
                check_header(&buf).map_err(DecodeError::InvalidHeader)?;
                self.writer.write_all(&text_header())?;
            }
            Grammar::Permissive => loop {
                let byte = self.require_byte(Field::Header)?;
                if byte == FIELD_SEPARATOR {
                    self.emit(TEXT_DELIMITER)?;
                    break;
                }
                self.emit(byte)?;
            },
        }

        debug!(grammar = ?self.config.grammar, "header accepted");
        Ok(State::Size)
    }

    fn read_size(&mut self) -> Result<State, DecodeError> {
        loop {
            let byte = self.require_byte(Field::Size)?;
            if byte == TERMINATOR {
                self.emit(LINE_END)?;
                return Ok(State::Entry(EntryField::Permissions));
            }
            if !self.config.grammar.accepts_size_byte(byte) {
                return Err(DecodeError::InvalidSizeField {
                    byte,
                    offset: self.last_offset(),
                });
            }
            self.emit(byte)?;
        }
    }

    fn read_permissions(&mut self) -> Result<State, DecodeError> {
        // End of input is only valid here, before an entry has started.
        let Some(first) = self.next_byte()? else {
            return Ok(State::Done);
        };
        if first == FIELD_SEPARATOR {
            return Err(DecodeError::EmptyPermissions {
                offset: self.last_offset(),
            });
        }

        let mut byte = first;
        loop {
            if !self.config.grammar.accepts_permissions_byte(byte) {
                return Err(DecodeError::InvalidPermissions {
                    byte,
                    offset: self.last_offset(),
                });
            }
            self.emit(byte)?;

            byte = self.require_byte(Field::Permissions)?;
            if byte == FIELD_SEPARATOR {
                self.emit(TEXT_DELIMITER)?;
                return Ok(State::Entry(EntryField::Filename));
            }
        }
    }

    fn read_filename(&mut self) -> Result<State, DecodeError> {
        loop {
            let byte = self.require_byte(Field::Filename)?;
            if byte == TERMINATOR {
                self.emit(TEXT_DELIMITER)?;
                return Ok(State::Entry(EntryField::Hash));
            }
            if !accepts_filename_byte(byte) {
                return Err(DecodeError::InvalidFilename {
                    byte,
                    offset: self.last_offset(),
                });
            }
            self.emit(byte)?;
        }
    }

    fn read_hash(&mut self) -> Result<State, DecodeError> {
        for _ in 0..HASH_LEN {
            let byte = self.require_byte(Field::Hash)?;
            self.writer.write_all(&hex_pair(byte))?;
        }
        self.emit(LINE_END)?;

        self.entries += 1;
        trace!(entry = self.entries, offset = self.bytes_read, "entry decoded");
        Ok(State::Entry(EntryField::Permissions))
    }

    // ── Byte I/O ─────────────────────────────────────────────────────────

    /// Pull the next input byte, or `None` at end of input.
    fn next_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if byte.is_some() {
                self.reader.consume(1);
                self.bytes_read += 1;
            }
            return Ok(byte);
        }
    }

    /// Pull the next input byte, treating end of input as truncation of
    /// `field`.
    fn require_byte(&mut self, field: Field) -> Result<u8, DecodeError> {
        self.next_byte()?.ok_or(DecodeError::UnexpectedEof {
            field,
            offset: self.bytes_read,
        })
    }

    /// Offset of the byte most recently consumed.
    fn last_offset(&self) -> u64 {
        self.bytes_read.saturating_sub(1)
    }

    fn emit(&mut self, byte: u8) -> Result<(), DecodeError> {
        self.writer.write_all(&[byte])?;
        Ok(())
    }
}

/// Decode one record from `reader` into `writer` with the strict grammar.
///
/// # Errors
///
/// See [`TreeDecoder::step`].
pub fn decode<R: BufRead, W: Write>(reader: R, writer: W) -> Result<DecodeSummary, DecodeError> {
    decode_with_config(reader, writer, DecoderConfig::default())
}

/// Decode one record from `reader` into `writer`.
///
/// # Errors
///
/// See [`TreeDecoder::step`].
pub fn decode_with_config<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: DecoderConfig,
) -> Result<DecodeSummary, DecodeError> {
    TreeDecoder::with_config(reader, writer, config).run()
}

/// Decode an in-memory record with the strict grammar and return the text.
///
/// # Errors
///
/// See [`TreeDecoder::step`].
pub fn decode_to_vec(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    decode(input, &mut out)?;
    Ok(out)
}
