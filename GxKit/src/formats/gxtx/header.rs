//! GXTX header reading and writing

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::Serialize;

use super::{CompressionKind, GXTX_MAGIC, HEADER_SIZE};
use crate::error::{Error, Result};

/// Fixed 16-byte header of a GXTX resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextureHeader {
    /// Magic bytes (always "GXTX" once parsed)
    pub magic: [u8; 4],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Length of the pixel payload following the header
    pub data_size: u32,
    /// Unknown field, carried through reconstruction untouched
    pub reserved: u16,
    /// Pixel encoding named by the compression descriptor
    pub kind: CompressionKind,
}

impl TextureHeader {
    /// Parse the header at the start of `buffer`
    ///
    /// The payload length is not checked here; decoding does that.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedInput`] if fewer than 16 bytes are available.
    /// Returns [`Error::UnsupportedFormat`] for a wrong magic or unknown descriptor.
    ///
    /// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
    /// [`Error::UnsupportedFormat`]: crate::Error::UnsupportedFormat
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < HEADER_SIZE {
            return Err(Error::TruncatedInput {
                needed: HEADER_SIZE,
                available: buffer.len(),
            });
        }

        let mut cursor = Cursor::new(buffer);

        let mut magic = [0u8; 4];
        cursor.read_exact(&mut magic)?;
        if magic != GXTX_MAGIC {
            return Err(Error::UnsupportedFormat {
                message: format!("invalid GXTX magic: expected GXTX, found {magic:?}"),
            });
        }

        let width = cursor.read_u16::<LittleEndian>()?;
        let height = cursor.read_u16::<LittleEndian>()?;
        let data_size = cursor.read_u32::<LittleEndian>()?;
        let reserved = cursor.read_u16::<LittleEndian>()?;
        let kind = CompressionKind::try_from(cursor.read_i16::<LittleEndian>()?)?;

        Ok(Self {
            magic,
            width,
            height,
            data_size,
            reserved,
            kind,
        })
    }

    /// Raw descriptor value for [`Self::kind`]
    #[must_use]
    pub fn compression_descriptor(&self) -> i16 {
        self.kind.descriptor()
    }

    /// Payload size the declared dimensions and kind call for
    #[must_use]
    pub fn expected_payload_size(&self) -> usize {
        self.kind
            .payload_size(usize::from(self.width), usize::from(self.height))
    }

    /// Write the 16 header bytes
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.magic)?;
        writer.write_u16::<LittleEndian>(self.width)?;
        writer.write_u16::<LittleEndian>(self.height)?;
        writer.write_u32::<LittleEndian>(self.data_size)?;
        writer.write_u16::<LittleEndian>(self.reserved)?;
        writer.write_i16::<LittleEndian>(self.compression_descriptor())?;
        Ok(())
    }

    /// Header as a byte array
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..6].copy_from_slice(&self.width.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.height.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.data_size.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.reserved.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.compression_descriptor().to_le_bytes());
        bytes
    }
}

/// Parse a GXTX header; see [`TextureHeader::parse`]
///
/// # Errors
/// See [`TextureHeader::parse`].
pub fn parse_header(buffer: &[u8]) -> Result<TextureHeader> {
    TextureHeader::parse(buffer)
}

/// Cheap format sniff: do the first four bytes read "GXTX"?
#[must_use]
pub fn matches_magic(head: &[u8]) -> bool {
    head.get(..GXTX_MAGIC.len()) == Some(GXTX_MAGIC.as_slice())
}
