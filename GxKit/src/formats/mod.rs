//! File format handlers for ART banks and GXTX textures

pub mod art;
pub mod gxtx;
pub mod registry;

// Re-export main types
pub use art::{ArtEntry, OffsetTable, segment};
pub use gxtx::{CanonicalImage, CompressionKind, GxtxTexture, TextureHeader};
pub use registry::{FileKind, FormatHandler, FormatRegistry, Resource};
