//! GXTX encoding - canonical image to DXT payload
//!
//! Only the block-compressed kinds can be written back. Compression is
//! delegated to `squish`; the raw encodings have no inverse transform.

use std::fmt;
use std::str::FromStr;

use squish::{Algorithm, Params};

use super::kind::BlockFormat;
use super::{CanonicalImage, CompressionKind};
use crate::error::{Error, Result};

/// Trade-off between compression speed and colour fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionQuality {
    /// Range fit - fastest, lowest quality
    Fast,
    /// Cluster fit
    #[default]
    Balanced,
    /// Iterative cluster fit - slowest, best quality
    Best,
}

impl CompressionQuality {
    fn algorithm(self) -> Algorithm {
        match self {
            Self::Fast => Algorithm::RangeFit,
            Self::Balanced => Algorithm::ClusterFit,
            Self::Best => Algorithm::IterativeClusterFit,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Best => "best",
        }
    }
}

impl FromStr for CompressionQuality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "range" => Ok(Self::Fast),
            "balanced" | "cluster" => Ok(Self::Balanced),
            "best" | "iterative" => Ok(Self::Best),
            _ => Err(format!(
                "Invalid quality '{s}'. Valid values: fast, balanced, best"
            )),
        }
    }
}

impl fmt::Display for CompressionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for re-encoding textures.
///
/// # Example
///
/// ```
/// use gxkit::formats::gxtx::{CompressionQuality, EncodeOptions};
///
/// let options = EncodeOptions::new().with_quality(CompressionQuality::Best);
/// assert_eq!(options.quality, CompressionQuality::Best);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Block compression search quality
    pub quality: CompressionQuality,
}

impl EncodeOptions {
    /// Default options (balanced quality)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression quality
    #[must_use]
    pub fn with_quality(mut self, quality: CompressionQuality) -> Self {
        self.quality = quality;
        self
    }
}

/// Encode an image as a `kind` payload with default options
///
/// The image is encoded row by row as given; flip it to storage orientation first.
///
/// # Errors
/// Returns [`Error::UnsupportedOperation`] for any kind other than DXT1/DXT3.
///
/// [`Error::UnsupportedOperation`]: crate::Error::UnsupportedOperation
pub fn encode(image: &CanonicalImage, kind: CompressionKind) -> Result<Vec<u8>> {
    encode_with_options(image, kind, &EncodeOptions::default())
}

/// Encode an image as a `kind` payload
///
/// # Errors
/// Returns [`Error::UnsupportedOperation`] for any kind other than DXT1/DXT3.
///
/// [`Error::UnsupportedOperation`]: crate::Error::UnsupportedOperation
pub fn encode_with_options(
    image: &CanonicalImage,
    kind: CompressionKind,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    let Some(format) = BlockFormat::for_kind(kind) else {
        return Err(Error::UnsupportedOperation {
            kind,
            operation: "encode",
        });
    };

    let width = image.width() as usize;
    let height = image.height() as usize;
    let rgba = image.to_rgba();

    let squish_format = format.squish_format();
    let mut output = vec![0u8; squish_format.compressed_size(width, height)];
    let params = Params {
        algorithm: options.quality.algorithm(),
        ..Params::default()
    };
    squish_format.compress(&rgba, width, height, params, &mut output);

    tracing::debug!(
        "Compressed {}x{} image as {} ({} bytes, {} quality)",
        width,
        height,
        kind,
        output.len(),
        options.quality
    );

    Ok(output)
}
