//! Fixture builder for binary tree records.
//!
//! The decoder crates only go one way (binary → text). Tests need the
//! other direction to produce inputs, so [`RecordBuilder`] assembles the
//! binary layout and also renders the text the decoder is expected to
//! print, using `hex` as an independent oracle for the hash column.
//!
//! ```text
//! "tree " <size> \0 { <perms> " " <name> \0 <20-byte hash> }*
//! ```

use std::ops::Range;

use tree_wire::hash::HASH_LEN;
use tree_wire::header::TREE_HEADER;
use tree_wire::{FIELD_SEPARATOR, TERMINATOR};

/// One entry of a fixture record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub permissions: Vec<u8>,
    pub name: Vec<u8>,
    pub hash: [u8; HASH_LEN],
}

/// Builder for a binary tree record.
///
/// Nothing is validated: tests use the builder to produce malformed
/// records as well as well-formed ones.
#[derive(Clone, Debug)]
pub struct RecordBuilder {
    size: Vec<u8>,
    entries: Vec<Entry>,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    /// An empty record with size field `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: b"0".to_vec(),
            entries: Vec::new(),
        }
    }

    pub fn size(&mut self, size: &[u8]) -> &mut Self {
        self.size = size.to_vec();
        self
    }

    pub fn add_entry(&mut self, permissions: &str, name: &[u8], hash: [u8; HASH_LEN]) -> &mut Self {
        self.entries.push(Entry {
            permissions: permissions.as_bytes().to_vec(),
            name: name.to_vec(),
            hash,
        });
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Serialise to the binary layout.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = TREE_HEADER.to_vec();
        out.extend_from_slice(&self.size);
        out.push(TERMINATOR);

        for entry in &self.entries {
            out.extend_from_slice(&entry.permissions);
            out.push(FIELD_SEPARATOR);
            out.extend_from_slice(&entry.name);
            out.push(TERMINATOR);
            out.extend_from_slice(&entry.hash);
        }
        out
    }

    /// The text a correct decoder prints for [`encode`](Self::encode).
    #[must_use]
    pub fn expected_text(&self) -> Vec<u8> {
        let mut out = b"tree:".to_vec();
        out.extend_from_slice(&self.size);
        out.push(b'\n');

        for entry in &self.entries {
            out.extend_from_slice(&entry.permissions);
            out.push(b':');
            out.extend_from_slice(&entry.name);
            out.push(b':');
            out.extend_from_slice(hex::encode(entry.hash).as_bytes());
            out.push(b'\n');
        }
        out
    }

    /// Byte offsets at which the encoded record may end: after the size
    /// terminator, and after each entry's hash.
    #[must_use]
    pub fn entry_boundaries(&self) -> Vec<usize> {
        let mut offset = TREE_HEADER.len() + self.size.len() + 1;
        let mut boundaries = vec![offset];
        for entry in &self.entries {
            offset += entry.permissions.len() + 1 + entry.name.len() + 1 + HASH_LEN;
            boundaries.push(offset);
        }
        boundaries
    }

    /// Byte range of each entry's hash block in the encoded record.
    #[must_use]
    pub fn hash_ranges(&self) -> Vec<Range<usize>> {
        self.entry_boundaries()
            .windows(2)
            .map(|w| w[1] - HASH_LEN..w[1])
            .collect()
    }
}

/// A deterministic, non-repeating hash for fixture entry `seed`.
#[must_use]
pub fn sample_hash(seed: u8) -> [u8; HASH_LEN] {
    let mut hash = [0u8; HASH_LEN];
    for (i, byte) in (0u8..).zip(hash.iter_mut()) {
        *byte = seed.wrapping_mul(31).wrapping_add(i.wrapping_mul(97));
    }
    hash
}
