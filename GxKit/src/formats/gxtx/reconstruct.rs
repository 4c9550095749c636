//! Rebuild a GXTX resource around an edited image

use super::encode::encode_with_options;
use super::kind::BlockFormat;
use super::{CanonicalImage, EncodeOptions, HEADER_SIZE, TextureHeader};
use crate::error::{Error, Result};

/// Rebuild a resource with default encode options
///
/// # Errors
/// See [`reconstruct_with_options`].
pub fn reconstruct(original: &TextureHeader, new_image: &CanonicalImage) -> Result<Vec<u8>> {
    reconstruct_with_options(original, new_image, &EncodeOptions::default())
}

/// Rebuild a resource (header + payload) from a top-down image
///
/// The image is flipped to storage orientation and encoded with the
/// original kind. Magic, reserved field and descriptor are copied from
/// `original`; the dimensions come from `new_image` and `data_size` from
/// the encoded payload.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOperation`] unless the original kind is DXT1 or DXT3.
/// Returns [`Error::DimensionsTooLarge`] if the image does not fit 16-bit dimensions.
///
/// [`Error::UnsupportedOperation`]: crate::Error::UnsupportedOperation
/// [`Error::DimensionsTooLarge`]: crate::Error::DimensionsTooLarge
pub fn reconstruct_with_options(
    original: &TextureHeader,
    new_image: &CanonicalImage,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    let kind = original.kind;
    if BlockFormat::for_kind(kind).is_none() {
        return Err(Error::UnsupportedOperation {
            kind,
            operation: "reconstruct",
        });
    }

    let too_large = || Error::DimensionsTooLarge {
        width: new_image.width(),
        height: new_image.height(),
    };
    let width = u16::try_from(new_image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(new_image.height()).map_err(|_| too_large())?;

    let stored = new_image.clone().flipped();
    let payload = encode_with_options(&stored, kind, options)?;
    let data_size = u32::try_from(payload.len()).map_err(|_| too_large())?;

    let header = TextureHeader {
        magic: original.magic,
        width,
        height,
        data_size,
        reserved: original.reserved,
        kind,
    };

    tracing::debug!(
        "Reconstructed GXTX resource [{}x{} -> {}x{}; {} bytes; compression: {}]",
        original.width,
        original.height,
        width,
        height,
        data_size,
        kind
    );

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    header.write(&mut bytes)?;
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::gxtx::{CompressionKind, GXTX_MAGIC, GxtxTexture, parse_header};

    fn original(kind: CompressionKind) -> TextureHeader {
        TextureHeader {
            magic: GXTX_MAGIC,
            width: 64,
            height: 32,
            data_size: 1024,
            reserved: 0xABCD,
            kind,
        }
    }

    #[test]
    fn test_header_fields() {
        let image = CanonicalImage::filled(64, 32, [0xFF, 0x80, 0x40, 0x20]);
        let bytes = reconstruct(&original(CompressionKind::Dxt1), &image).unwrap();
        let header = parse_header(&bytes).unwrap();

        assert_eq!(header.magic, GXTX_MAGIC);
        assert_eq!(header.width, 64);
        assert_eq!(header.height, 32);
        assert_eq!(header.reserved, 0xABCD);
        assert_eq!(header.compression_descriptor(), 10);
        assert_eq!(header.data_size as usize, bytes.len() - HEADER_SIZE);
    }

    #[test]
    fn test_resized_image() {
        let image = CanonicalImage::filled(12, 20, [0x80, 0x10, 0x20, 0x30]);
        let bytes = reconstruct(&original(CompressionKind::Dxt3), &image).unwrap();
        let header = parse_header(&bytes).unwrap();
        assert_eq!((header.width, header.height), (12, 20));
        assert_eq!(header.data_size, 3 * 5 * 16);
        assert_eq!(header.kind, CompressionKind::Dxt3);
    }

    #[test]
    fn test_orientation_survives_round_trip() {
        // Top half white, bottom half black, top-down
        let mut pixels = Vec::new();
        for y in 0..8 {
            let value = if y < 4 { 0xFF } else { 0x00 };
            for _ in 0..8 {
                pixels.extend_from_slice(&[0xFF, value, value, value]);
            }
        }
        let image = CanonicalImage::new(8, 8, pixels).unwrap();
        let bytes = reconstruct(&original(CompressionKind::Dxt1), &image).unwrap();
        let view = GxtxTexture::read(&bytes).unwrap().decode_image().unwrap();

        let [_, top, _, _] = view.pixel(0, 0).unwrap();
        let [_, bottom, _, _] = view.pixel(0, 7).unwrap();
        assert!(top > 0xF0);
        assert!(bottom < 0x10);
    }

    #[test]
    fn test_raw_kind_unsupported() {
        let image = CanonicalImage::filled(4, 4, [0xFF, 0, 0, 0]);
        assert!(matches!(
            reconstruct(&original(CompressionKind::R5G6B5), &image),
            Err(Error::UnsupportedOperation { operation: "reconstruct", .. })
        ));
    }

    #[test]
    fn test_oversized_image() {
        let image = CanonicalImage::filled(70_000, 1, [0xFF, 0, 0, 0]);
        assert!(matches!(
            reconstruct(&original(CompressionKind::Dxt1), &image),
            Err(Error::DimensionsTooLarge { width: 70_000, height: 1 })
        ));
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let image = CanonicalImage::filled(16, 16, [0xFF, 0x33, 0x66, 0x99]);
        let header = original(CompressionKind::Dxt3);
        assert_eq!(
            reconstruct(&header, &image).unwrap(),
            reconstruct(&header, &image).unwrap()
        );
    }
}
