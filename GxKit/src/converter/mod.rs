//! Format conversion utilities
//!
//! - GXTX ↔ PNG - the editable view of a texture and its re-import
//! - GXTX → DDS - lossless export of DXT payloads

mod gxtx_dds;
mod gxtx_png;

// GXTX/PNG conversion exports
pub use gxtx_png::{
    canonical_to_png_bytes, convert_gxtx_to_png, convert_png_to_gxtx,
    convert_png_to_gxtx_with_options, gxtx_bytes_to_png_bytes, png_bytes_to_canonical,
    png_bytes_to_gxtx_bytes,
};

// GXTX/DDS conversion exports
pub use gxtx_dds::{convert_gxtx_to_dds, gxtx_bytes_to_dds_bytes};
