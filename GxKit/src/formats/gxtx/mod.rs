//! GXTX texture resources
//!
//! A GXTX resource is a 16-byte little-endian header followed by the pixel
//! payload:
//!
//! ```text
//! [0..4)   magic "GXTX"
//! [4..6)   width  u16
//! [6..8)   height u16
//! [8..12)  data_size u32
//! [12..14) reserved u16
//! [14..16) compression descriptor i16
//! ```
//!
//! Pixels are stored bottom-up. [`decode`] returns the stored orientation,
//! [`GxtxTexture::decode_image`] and [`decode_texture`] return the top-down view.

mod decode;
mod encode;
mod header;
mod image;
mod kind;
mod reconstruct;

use serde::Serialize;

pub use decode::decode;
pub use encode::{CompressionQuality, EncodeOptions, encode, encode_with_options};
pub use header::{TextureHeader, matches_magic, parse_header};
pub use self::image::{CanonicalImage, PIXEL_SIZE};
pub use kind::CompressionKind;
pub use reconstruct::{reconstruct, reconstruct_with_options};

use crate::error::Result;

/// Magic bytes at the start of every GXTX resource
pub const GXTX_MAGIC: [u8; 4] = *b"GXTX";

/// Size of the fixed header
pub const HEADER_SIZE: usize = 16;

/// A parsed GXTX resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GxtxTexture {
    /// Parsed header
    pub header: TextureHeader,
    /// Everything after the header
    pub payload: Vec<u8>,
}

impl GxtxTexture {
    /// Parse a complete resource
    ///
    /// # Errors
    /// Returns an error if the header is truncated or unrecognised.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        let header = TextureHeader::parse(bytes)?;
        Ok(Self {
            header,
            payload: bytes[HEADER_SIZE..].to_vec(),
        })
    }

    /// Decode the pixels in stored (bottom-up) orientation
    ///
    /// # Errors
    /// See [`decode`].
    pub fn decode_stored(&self) -> Result<CanonicalImage> {
        decode(&self.header, &self.payload)
    }

    /// Decode the pixels top-down, ready for a standard image format
    ///
    /// # Errors
    /// See [`decode`].
    pub fn decode_image(&self) -> Result<CanonicalImage> {
        Ok(self.decode_stored()?.flipped())
    }

    /// Summary of the header for display
    #[must_use]
    pub fn info(&self) -> TextureInfo {
        TextureInfo::from_header(&self.header, self.payload.len())
    }

    /// Serialise back to header + payload
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Replace the pixels with a top-down image, keeping kind and reserved field
    ///
    /// # Errors
    /// See [`reconstruct_with_options`].
    pub fn replace_image(&mut self, image: &CanonicalImage, options: &EncodeOptions) -> Result<()> {
        let rebuilt = reconstruct_with_options(&self.header, image, options)?;
        *self = Self::read(&rebuilt)?;
        Ok(())
    }
}

/// Decode a complete resource into a top-down image
///
/// # Errors
/// Returns an error if the header or payload is invalid.
pub fn decode_texture(bytes: &[u8]) -> Result<CanonicalImage> {
    GxtxTexture::read(bytes)?.decode_image()
}

/// Serialisable description of a texture header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureInfo {
    pub width: u16,
    pub height: u16,
    pub kind: CompressionKind,
    pub descriptor: i16,
    pub data_size: u32,
    pub reserved: u16,
    pub block_compressed: bool,
    /// Payload size implied by the dimensions and kind
    pub expected_payload_size: usize,
    /// Bytes actually present after the header
    pub payload_available: usize,
}

impl TextureInfo {
    #[must_use]
    pub fn from_header(header: &TextureHeader, payload_available: usize) -> Self {
        Self {
            width: header.width,
            height: header.height,
            kind: header.kind,
            descriptor: header.compression_descriptor(),
            data_size: header.data_size,
            reserved: header.reserved,
            block_compressed: header.kind.is_block_compressed(),
            expected_payload_size: header.expected_payload_size(),
            payload_available,
        }
    }
}
