//! GXTX → DDS export
//!
//! DXT payloads are already DDS block data, so the export copies the blocks
//! into a DDS container unchanged. Storage orientation is kept as is.

use std::fs;
use std::path::Path;

use ddsfile::{D3DFormat, Dds};

use crate::error::{Error, Result};
use crate::formats::gxtx::{CompressionKind, GxtxTexture};

/// Wrap the DXT payload of a GXTX resource in a DDS container
///
/// # Errors
/// Returns [`Error::UnsupportedOperation`] for raw kinds, or an error if the
/// resource is invalid or the DDS cannot be built.
///
/// [`Error::UnsupportedOperation`]: crate::Error::UnsupportedOperation
pub fn gxtx_bytes_to_dds_bytes(gxtx_data: &[u8]) -> Result<Vec<u8>> {
    let texture = GxtxTexture::read(gxtx_data)?;
    let header = texture.header;

    let format = match header.kind {
        CompressionKind::Dxt1 => D3DFormat::DXT1,
        CompressionKind::Dxt3 => D3DFormat::DXT3,
        kind @ (CompressionKind::A8R8G8B8
        | CompressionKind::A4R4G4B4
        | CompressionKind::R5G6B5
        | CompressionKind::A1R5G5B5) => {
            return Err(Error::UnsupportedOperation {
                kind,
                operation: "DDS export",
            });
        }
    };

    let needed = header.expected_payload_size();
    let data = texture.payload.get(..needed).ok_or(Error::TruncatedInput {
        needed,
        available: texture.payload.len(),
    })?;

    build_dds_with_d3d_format(u32::from(header.width), u32::from(header.height), format, data)
}

/// Export a GXTX file as DDS
///
/// # Errors
/// Returns an error if the file cannot be read or conversion fails.
pub fn convert_gxtx_to_dds<P: AsRef<Path>, Q: AsRef<Path>>(gxtx_path: P, dds_path: Q) -> Result<()> {
    tracing::info!("Exporting {} to DDS", gxtx_path.as_ref().display());
    let data = fs::read(gxtx_path.as_ref())?;
    let dds_data = gxtx_bytes_to_dds_bytes(&data)?;
    fs::write(dds_path.as_ref(), dds_data)?;
    Ok(())
}

fn build_dds_with_d3d_format(width: u32, height: u32, format: D3DFormat, data: &[u8]) -> Result<Vec<u8>> {
    let mut dds = Dds::new_d3d(ddsfile::NewD3dParams {
        height,
        width,
        depth: None,
        format,
        mipmap_levels: None,
        caps2: None,
    })
    .map_err(|e| Error::DdsCreateFailed {
        message: e.to_string(),
    })?;

    let layer = dds.get_mut_data(0).map_err(|e| Error::DdsCreateFailed {
        message: format!("no data layer: {e}"),
    })?;
    if layer.len() != data.len() {
        return Err(Error::DdsCreateFailed {
            message: format!(
                "{width}x{height} layer holds {} bytes, payload has {}",
                layer.len(),
                data.len()
            ),
        });
    }
    layer.copy_from_slice(data);

    let mut output = Vec::new();
    dds.write(&mut output).map_err(|e| Error::DdsWriteFailed {
        message: e.to_string(),
    })?;

    Ok(output)
}
