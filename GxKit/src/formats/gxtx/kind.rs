//! Pixel encodings of GXTX textures

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Pixel encoding named by the header's compression descriptor
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompressionKind {
    /// BC1 - 8 bytes per 4x4 block
    Dxt1,
    /// BC2 - 16 bytes per 4x4 block (explicit 4-bit alpha)
    Dxt3,
    /// 32-bit, one byte per channel
    A8R8G8B8,
    /// 16-bit, one nibble per channel
    A4R4G4B4,
    /// 16-bit, no alpha
    R5G6B5,
    /// 16-bit, one alpha bit
    A1R5G5B5,
}

impl CompressionKind {
    /// Every kind, in descriptor order of the format
    pub const ALL: [Self; 6] = [
        Self::Dxt1,
        Self::Dxt3,
        Self::A8R8G8B8,
        Self::A4R4G4B4,
        Self::R5G6B5,
        Self::A1R5G5B5,
    ];

    /// Signed descriptor stored at header offset 14
    #[must_use]
    pub const fn descriptor(self) -> i16 {
        match self {
            Self::Dxt1 => 10,
            Self::Dxt3 => 11,
            Self::A8R8G8B8 => 4,
            Self::A4R4G4B4 => 5,
            Self::R5G6B5 => 0,
            Self::A1R5G5B5 => -1,
        }
    }

    /// Look up the kind for a descriptor; `None` for unmapped values
    #[must_use]
    pub const fn from_descriptor(descriptor: i16) -> Option<Self> {
        match descriptor {
            10 => Some(Self::Dxt1),
            11 => Some(Self::Dxt3),
            4 => Some(Self::A8R8G8B8),
            5 => Some(Self::A4R4G4B4),
            0 => Some(Self::R5G6B5),
            -1 => Some(Self::A1R5G5B5),
            _ => None,
        }
    }

    /// Whether the payload is 4x4 block-compressed
    #[must_use]
    pub const fn is_block_compressed(self) -> bool {
        matches!(self, Self::Dxt1 | Self::Dxt3)
    }

    /// Bytes per pixel for the raw encodings, `None` for block formats
    #[must_use]
    pub const fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::A8R8G8B8 => Some(4),
            Self::A4R4G4B4 | Self::R5G6B5 | Self::A1R5G5B5 => Some(2),
            Self::Dxt1 | Self::Dxt3 => None,
        }
    }

    /// Bytes needed to hold a `width` x `height` image in this encoding
    #[must_use]
    pub fn payload_size(self, width: usize, height: usize) -> usize {
        match BlockFormat::for_kind(self) {
            Some(format) => width.div_ceil(4) * height.div_ceil(4) * format.block_size(),
            None => width * height * self.bytes_per_pixel().unwrap_or(0),
        }
    }

    /// Short display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dxt1 => "DXT1",
            Self::Dxt3 => "DXT3",
            Self::A8R8G8B8 => "A8R8G8B8",
            Self::A4R4G4B4 => "A4R4G4B4",
            Self::R5G6B5 => "R5G6B5",
            Self::A1R5G5B5 => "A1R5G5B5",
        }
    }
}

impl TryFrom<i16> for CompressionKind {
    type Error = Error;

    fn try_from(descriptor: i16) -> Result<Self> {
        Self::from_descriptor(descriptor).ok_or_else(|| Error::UnsupportedFormat {
            message: format!("unknown GXTX compression descriptor: {descriptor}"),
        })
    }
}

impl FromStr for CompressionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedFormat {
                message: format!("unknown compression kind: {s}"),
            })
    }
}

impl fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block-compressed layouts backing the DXT kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockFormat {
    Bc1, // DXT1
    Bc2, // DXT3
}

impl BlockFormat {
    /// Block format for a kind, `None` for the raw encodings
    pub(crate) const fn for_kind(kind: CompressionKind) -> Option<Self> {
        match kind {
            CompressionKind::Dxt1 => Some(Self::Bc1),
            CompressionKind::Dxt3 => Some(Self::Bc2),
            CompressionKind::A8R8G8B8
            | CompressionKind::A4R4G4B4
            | CompressionKind::R5G6B5
            | CompressionKind::A1R5G5B5 => None,
        }
    }

    /// Block size in bytes
    pub(crate) const fn block_size(self) -> usize {
        match self {
            Self::Bc1 => 8,
            Self::Bc2 => 16,
        }
    }

    pub(crate) const fn squish_format(self) -> squish::Format {
        match self {
            Self::Bc1 => squish::Format::Bc1,
            Self::Bc2 => squish::Format::Bc2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_mapping_is_bidirectional() {
        for kind in CompressionKind::ALL {
            assert_eq!(CompressionKind::from_descriptor(kind.descriptor()), Some(kind));
        }
        assert_eq!(CompressionKind::from_descriptor(10), Some(CompressionKind::Dxt1));
        assert_eq!(CompressionKind::from_descriptor(-1), Some(CompressionKind::A1R5G5B5));
    }

    #[test]
    fn test_unmapped_descriptors() {
        for descriptor in [1, 2, 3, 6, 7, 8, 9, 12, -2, i16::MAX, i16::MIN] {
            assert!(matches!(
                CompressionKind::try_from(descriptor),
                Err(Error::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn test_payload_size() {
        assert_eq!(CompressionKind::Dxt1.payload_size(64, 32), 16 * 8 * 8);
        assert_eq!(CompressionKind::Dxt3.payload_size(64, 32), 16 * 8 * 16);
        assert_eq!(CompressionKind::Dxt1.payload_size(5, 3), 2 * 8);
        assert_eq!(CompressionKind::A8R8G8B8.payload_size(4, 4), 64);
        assert_eq!(CompressionKind::R5G6B5.payload_size(4, 4), 32);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("dxt3".parse::<CompressionKind>().unwrap(), CompressionKind::Dxt3);
        assert_eq!("R5G6B5".parse::<CompressionKind>().unwrap(), CompressionKind::R5G6B5);
        assert!("bc7".parse::<CompressionKind>().is_err());
    }
}
