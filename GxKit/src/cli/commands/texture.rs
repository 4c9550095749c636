//! CLI commands for texture operations

use std::path::Path;

use crate::cli::progress::{PICTURE, print_step};
use crate::converter::{convert_gxtx_to_dds, convert_gxtx_to_png, convert_png_to_gxtx_with_options};
use crate::formats::gxtx::{CompressionQuality, EncodeOptions, GxtxTexture};

/// Show info about a GXTX texture file
pub fn info(path: &Path, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read(path)?;
    let info = GxtxTexture::read(&data)?.info();

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("GXTX Information: {}", path.display());
    println!();
    println!("Dimensions: {}x{}", info.width, info.height);
    println!("Compression: {} (descriptor {})", info.kind, info.descriptor);
    println!("Data size: {} bytes", info.data_size);
    println!("Expected payload: {} bytes", info.expected_payload_size);
    println!("Available payload: {} bytes", info.payload_available);
    println!("Reserved: 0x{:04X}", info.reserved);
    if !info.block_compressed {
        println!("Note: raw pixel layouts are unverified; colours may be wrong");
    }

    Ok(())
}

/// Convert a GXTX texture to PNG
pub fn to_png(source: &Path, destination: &Path) -> anyhow::Result<()> {
    print_step(1, 1, PICTURE, &format!("Decoding {}", source.display()));
    convert_gxtx_to_png(source, destination)?;
    println!("Wrote {}", destination.display());
    Ok(())
}

/// Rebuild a GXTX texture from an edited PNG
pub fn from_png(
    source: &Path,
    original: &Path,
    destination: &Path,
    quality: CompressionQuality,
) -> anyhow::Result<()> {
    print_step(1, 1, PICTURE, &format!("Encoding {} ({quality})", source.display()));
    let options = EncodeOptions::new().with_quality(quality);
    convert_png_to_gxtx_with_options(source, original, destination, &options)?;
    println!("Wrote {}", destination.display());
    Ok(())
}

/// Export the DXT payload of a texture as DDS
pub fn to_dds(source: &Path, destination: &Path) -> anyhow::Result<()> {
    convert_gxtx_to_dds(source, destination)?;
    println!("Wrote {}", destination.display());
    Ok(())
}
