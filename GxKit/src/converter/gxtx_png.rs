//! GXTX ↔ PNG texture conversion
//!
//! PNG is the editable view of a texture: decoding produces a top-down PNG,
//! and an edited PNG plus the original resource bytes rebuild the resource.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::formats::gxtx::{
    CanonicalImage, EncodeOptions, GxtxTexture, TextureHeader, reconstruct_with_options,
};

/// Encode a canonical image as PNG bytes
///
/// # Errors
/// Returns an error if the pixel buffer cannot be wrapped or PNG encoding fails.
pub fn canonical_to_png_bytes(image: &CanonicalImage) -> Result<Vec<u8>> {
    let img: RgbaImage = ImageBuffer::from_raw(image.width(), image.height(), image.to_rgba())
        .ok_or(Error::ImageBufferFailed)?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
    img.write_with_encoder(encoder)
        .map_err(|e| Error::PngEncodeFailed {
            message: e.to_string(),
        })?;

    Ok(png_data)
}

/// Decode PNG bytes into a (top-down) canonical image
///
/// # Errors
/// Returns an error if the data is not a readable PNG.
pub fn png_bytes_to_canonical(png_data: &[u8]) -> Result<CanonicalImage> {
    let img = image::load_from_memory_with_format(png_data, ImageFormat::Png)
        .map_err(|e| Error::PngDecodeFailed {
            message: e.to_string(),
        })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    CanonicalImage::from_rgba(width, height, rgba.as_raw())
}

/// Convert a GXTX resource to PNG bytes
///
/// # Errors
/// Returns an error if the texture cannot be decoded or the PNG cannot be encoded.
pub fn gxtx_bytes_to_png_bytes(gxtx_data: &[u8]) -> Result<Vec<u8>> {
    let texture = GxtxTexture::read(gxtx_data)?;
    canonical_to_png_bytes(&texture.decode_image()?)
}

/// Rebuild a GXTX resource from an edited PNG and the original resource bytes
///
/// # Errors
/// Returns an error if either input is invalid or the original kind cannot be re-encoded.
pub fn png_bytes_to_gxtx_bytes(
    png_data: &[u8],
    original: &[u8],
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    let header = TextureHeader::parse(original)?;
    let image = png_bytes_to_canonical(png_data)?;
    reconstruct_with_options(&header, &image, options)
}

/// Convert a GXTX file to a PNG file
///
/// # Errors
/// Returns an error if the file cannot be read or conversion fails.
pub fn convert_gxtx_to_png<P: AsRef<Path>, Q: AsRef<Path>>(gxtx_path: P, png_path: Q) -> Result<()> {
    tracing::info!(
        "Converting {} to PNG",
        gxtx_path.as_ref().display()
    );
    let data = fs::read(gxtx_path.as_ref())?;
    let png_data = gxtx_bytes_to_png_bytes(&data)?;
    fs::write(png_path.as_ref(), png_data)?;
    Ok(())
}

/// Rebuild a GXTX file from an edited PNG with default options
///
/// # Errors
/// Returns an error if the files cannot be read or conversion fails.
pub fn convert_png_to_gxtx<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
    png_path: P,
    original_path: Q,
    output_path: R,
) -> Result<()> {
    convert_png_to_gxtx_with_options(png_path, original_path, output_path, &EncodeOptions::default())
}

/// Rebuild a GXTX file from an edited PNG
///
/// `output_path` may equal `original_path` to replace the resource in place.
///
/// # Errors
/// Returns an error if the files cannot be read or conversion fails.
pub fn convert_png_to_gxtx_with_options<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
    png_path: P,
    original_path: Q,
    output_path: R,
    options: &EncodeOptions,
) -> Result<()> {
    tracing::info!(
        "Rebuilding {} from {}",
        original_path.as_ref().display(),
        png_path.as_ref().display()
    );
    let png_data = fs::read(png_path.as_ref())?;
    let original = fs::read(original_path.as_ref())?;
    let rebuilt = png_bytes_to_gxtx_bytes(&png_data, &original, options)?;
    fs::write(output_path.as_ref(), rebuilt)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::gxtx::{CompressionKind, GXTX_MAGIC, parse_header};

    fn dxt1_original(width: u16, height: u16) -> Vec<u8> {
        let size = CompressionKind::Dxt1.payload_size(usize::from(width), usize::from(height));
        let header = TextureHeader {
            magic: GXTX_MAGIC,
            width,
            height,
            data_size: size as u32,
            reserved: 0x0102,
            kind: CompressionKind::Dxt1,
        };
        let mut bytes = header.to_bytes().to_vec();
        bytes.resize(bytes.len() + size, 0);
        bytes
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let image = CanonicalImage::new(2, 1, vec![0x80, 1, 2, 3, 0xFF, 4, 5, 6]).unwrap();
        let png = canonical_to_png_bytes(&image).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(png_bytes_to_canonical(&png).unwrap(), image);
    }

    #[test]
    fn test_invalid_png() {
        assert!(matches!(
            png_bytes_to_canonical(b"not a png"),
            Err(Error::PngDecodeFailed { .. })
        ));
    }

    #[test]
    fn test_gxtx_view_dimensions() {
        let png = gxtx_bytes_to_png_bytes(&dxt1_original(8, 4)).unwrap();
        let view = png_bytes_to_canonical(&png).unwrap();
        assert_eq!((view.width(), view.height()), (8, 4));
    }

    #[test]
    fn test_reimport_keeps_reserved_and_takes_new_size() {
        let edited = CanonicalImage::filled(16, 8, [0xFF, 0x10, 0x90, 0x40]);
        let png = canonical_to_png_bytes(&edited).unwrap();
        let rebuilt = png_bytes_to_gxtx_bytes(&png, &dxt1_original(8, 4), &EncodeOptions::new()).unwrap();

        let header = parse_header(&rebuilt).unwrap();
        assert_eq!((header.width, header.height), (16, 8));
        assert_eq!(header.reserved, 0x0102);
        assert_eq!(header.kind, CompressionKind::Dxt1);
    }
}
