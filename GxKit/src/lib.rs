#![allow(non_snake_case)]
//! # GxKit
//!
//! A pure-Rust library for working with `.art` resource banks and the GXTX
//! textures they contain.
//!
//! ## Supported Formats
//!
//! - **ART banks** - Segment, extract, list and create offset-table banks
//! - **GXTX textures** - DXT1/DXT3 and four raw 16/32-bit pixel encodings
//! - **PNG** - Editable texture view and re-import
//! - **DDS** - Lossless export of DXT payloads
//!
//! ## Quick Start
//!
//! ### Working with Banks
//!
//! ```no_run
//! use gxkit::art::ArtOperations;
//!
//! // List the entries of a bank
//! let entries = ArtOperations::list("cars.art")?;
//! println!("Found {} entries", entries.len());
//!
//! // Extract into output/cars/
//! ArtOperations::extract("cars.art", "output/")?;
//! # Ok::<(), gxkit::Error>(())
//! ```
//!
//! ### Editing a Texture
//!
//! ```no_run
//! use gxkit::converter::{convert_gxtx_to_png, convert_png_to_gxtx};
//!
//! convert_gxtx_to_png("output/cars/image03", "image03.png")?;
//! // ... edit image03.png ...
//! convert_png_to_gxtx("image03.png", "output/cars/image03", "output/cars/image03")?;
//! # Ok::<(), gxkit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `gxkit` command-line binary

pub mod art;
pub mod converter;
pub mod error;
pub mod formats;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    // Format types
    pub use crate::formats::art::{ArtEntry, OffsetTable, segment};
    pub use crate::formats::gxtx::{
        CanonicalImage, CompressionKind, CompressionQuality, EncodeOptions, GxtxTexture,
        TextureHeader, TextureInfo, decode, decode_texture, encode, parse_header, reconstruct,
    };
    pub use crate::formats::registry::{FileKind, FormatRegistry, Resource};

    // Bank operations
    pub use crate::art::{
        ArtExtractionOptions, ArtOperations, BatchArtResult, batch_extract, find_art_files,
    };

    pub use crate::converter;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
