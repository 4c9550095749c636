//! Offset table parsing and bank segmentation

use std::io::Cursor;
use std::ops::Range;

use byteorder::{LittleEndian, ReadBytesExt};

use super::{ArtEntry, COUNT_SIZE, entry_name, header_size};
use crate::error::{Error, Result};

/// Parsed offset table of a bank, including the end-of-buffer sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    offsets: Vec<u32>,
}

impl OffsetTable {
    /// Read and validate the offset table at the start of `buffer`
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedInput`] if the buffer cannot hold the count and table.
    /// Returns [`Error::MalformedOffsetTable`] if an offset decreases, starts inside the
    /// header, or points past the end of the buffer.
    ///
    /// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
    /// [`Error::MalformedOffsetTable`]: crate::Error::MalformedOffsetTable
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < COUNT_SIZE {
            return Err(Error::TruncatedInput {
                needed: COUNT_SIZE,
                available: buffer.len(),
            });
        }

        let mut cursor = Cursor::new(buffer);
        let entry_count = cursor.read_u32::<LittleEndian>()? as usize;

        let needed = entry_count
            .checked_mul(super::OFFSET_SIZE)
            .and_then(|table| table.checked_add(COUNT_SIZE))
            .ok_or(Error::TruncatedInput {
                needed: usize::MAX,
                available: buffer.len(),
            })?;
        if buffer.len() < needed {
            return Err(Error::TruncatedInput {
                needed,
                available: buffer.len(),
            });
        }

        let mut offsets = Vec::with_capacity(entry_count + 1);
        for _ in 0..entry_count {
            offsets.push(cursor.read_u32::<LittleEndian>()?);
        }

        let sentinel = u32::try_from(buffer.len()).map_err(|_| Error::MalformedOffsetTable {
            message: format!("bank of {} bytes exceeds 32-bit offsets", buffer.len()),
        })?;
        offsets.push(sentinel);

        let table = Self { offsets };
        table.validate(needed)?;

        tracing::debug!("Parsed ART offset table: {} entries", entry_count);
        Ok(table)
    }

    fn validate(&self, header_size: usize) -> Result<()> {
        let end = self.offsets[self.offsets.len() - 1] as usize;

        if let Some(&first) = self.offsets.first()
            && self.entry_count() > 0
            && (first as usize) < header_size
        {
            return Err(Error::MalformedOffsetTable {
                message: format!("first offset {first} lies inside the {header_size}-byte header"),
            });
        }

        for (index, &offset) in self.offsets.iter().enumerate() {
            if offset as usize > end {
                return Err(Error::MalformedOffsetTable {
                    message: format!("offset {index} ({offset}) exceeds bank size {end}"),
                });
            }
        }

        for (index, pair) in self.offsets.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(Error::MalformedOffsetTable {
                    message: format!(
                        "offset {} ({}) is smaller than offset {index} ({})",
                        index + 1,
                        pair[1],
                        pair[0]
                    ),
                });
            }
        }

        Ok(())
    }

    /// Number of entries in the bank
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Size of the count field plus the stored offsets
    #[must_use]
    pub fn header_size(&self) -> usize {
        header_size(self.entry_count())
    }

    /// All offsets, the trailing sentinel included
    #[must_use]
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Byte range of entry `index`
    #[must_use]
    pub fn range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.entry_count() {
            return None;
        }
        Some(self.offsets[index] as usize..self.offsets[index + 1] as usize)
    }

    /// Named entries in table order
    #[must_use]
    pub fn entries(&self) -> Vec<ArtEntry> {
        let count = self.entry_count();
        self.offsets
            .windows(2)
            .enumerate()
            .map(|(index, pair)| ArtEntry {
                name: entry_name(index, count),
                range: pair[0] as usize..pair[1] as usize,
            })
            .collect()
    }
}

/// Split a bank into its named sub-resource ranges
///
/// The ranges borrow nothing; slice them out of `buffer` with [`ArtEntry::bytes`].
///
/// # Errors
///
/// See [`OffsetTable::parse`].
pub fn segment(buffer: &[u8]) -> Result<Vec<ArtEntry>> {
    Ok(OffsetTable::parse(buffer)?.entries())
}
