//! Bank writing

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::header_size;
use crate::error::{Error, Result};

/// Serialize entries into a bank buffer
///
/// Entries are laid out back to back directly after the offset table.
///
/// # Errors
/// Returns [`Error::MalformedOffsetTable`] if the bank would exceed 32-bit offsets.
///
/// [`Error::MalformedOffsetTable`]: crate::Error::MalformedOffsetTable
pub fn build_bank<T: AsRef<[u8]>>(entries: &[T]) -> Result<Vec<u8>> {
    let total = header_size(entries.len())
        + entries.iter().map(|e| e.as_ref().len()).sum::<usize>();
    let mut output = Vec::with_capacity(total);
    write_bank(&mut output, entries)?;
    Ok(output)
}

/// Write entries as a bank to any writer
///
/// # Errors
/// Returns an error if writing fails or the bank would exceed 32-bit offsets.
pub fn write_bank<W: Write, T: AsRef<[u8]>>(writer: &mut W, entries: &[T]) -> Result<()> {
    let count = u32::try_from(entries.len()).map_err(|_| Error::MalformedOffsetTable {
        message: format!("{} entries exceed the 32-bit entry count", entries.len()),
    })?;

    writer.write_u32::<LittleEndian>(count)?;

    let mut offset = header_size(entries.len());
    for entry in entries {
        let start = u32::try_from(offset).map_err(|_| Error::MalformedOffsetTable {
            message: format!("entry offset {offset} exceeds 32 bits"),
        })?;
        writer.write_u32::<LittleEndian>(start)?;
        offset += entry.as_ref().len();
    }

    if u32::try_from(offset).is_err() {
        return Err(Error::MalformedOffsetTable {
            message: format!("bank size {offset} exceeds 32 bits"),
        });
    }

    for entry in entries {
        writer.write_all(entry.as_ref())?;
    }

    Ok(())
}
