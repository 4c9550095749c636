//! `.art` bank container format
//!
//! A bank is a flat byte buffer: a little-endian `u32` entry count, one `u32`
//! start offset per entry, then the entries themselves back to back. There is
//! no magic; banks are recognised by file extension only. The end of the last
//! entry is the end of the buffer.

mod reader;
mod sink;
mod writer;

use std::ops::Range;

pub use reader::{OffsetTable, segment};
pub use sink::{DirectorySink, EntrySink, MemorySink, emit_entries};
pub use writer::{build_bank, write_bank};

/// File extension of bank files (without the dot)
pub const ART_EXTENSION: &str = "art";

/// Size of the entry count field
pub const COUNT_SIZE: usize = 4;

/// Size of a single offset table slot
pub const OFFSET_SIZE: usize = 4;

/// Prefix of the synthetic entry names
pub const ENTRY_NAME_PREFIX: &str = "image";

/// A named sub-resource of a bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtEntry {
    /// Sequential name such as `image07`
    pub name: String,
    /// Byte range of the entry within the bank buffer
    pub range: Range<usize>,
}

impl ArtEntry {
    /// Size of the entry in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the entry holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Slice the entry out of the bank it was segmented from
    #[must_use]
    pub fn bytes<'a>(&self, bank: &'a [u8]) -> &'a [u8] {
        &bank[self.range.clone()]
    }
}

/// Size of the bank header for `entry_count` entries
#[must_use]
pub fn header_size(entry_count: usize) -> usize {
    COUNT_SIZE + OFFSET_SIZE * entry_count
}

/// Whether a file name designates a bank
///
/// Banks carry no magic bytes, so the `.art` suffix is all there is.
pub fn matches_name(file_name: &str) -> bool {
    crate::utils::has_extension(file_name, ART_EXTENSION)
}

/// Number of digits used to pad entry names: `floor(log10(count)) + 1`
///
/// A bank with no entries still reports a width of one.
#[must_use]
pub fn pad_width(entry_count: usize) -> usize {
    entry_count.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

/// Name of entry `index` in a bank of `entry_count` entries
#[must_use]
pub fn entry_name(index: usize, entry_count: usize) -> String {
    let width = pad_width(entry_count);
    format!("{ENTRY_NAME_PREFIX}{index:0width$}")
}
