//! GXTX decoding - payload to canonical ARGB pixels
//!
//! DXT payloads go through `bcdec_rs`. The four raw encodings are unpacked
//! by hand; their bit layouts have never been checked against reference
//! images and are known to render wrong colours for real game assets. The
//! arithmetic below is kept exactly as documented until it can be verified.

use super::kind::BlockFormat;
use super::{CanonicalImage, CompressionKind, TextureHeader};
use crate::error::{Error, Result};
use crate::utils::{expand_nibble, high_nibble, low_nibble, pair_word, sign_fill_top_bit};

/// Decode a payload into a bottom-up canonical image
///
/// Only the first `header.data_size` bytes of `payload` are read.
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`] if `payload` is shorter than `data_size`.
/// Returns [`Error::CorruptData`] if `data_size` is too small for the declared
/// dimensions, or if a raw kind declares more bytes than its pixels occupy.
///
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
/// [`Error::CorruptData`]: crate::Error::CorruptData
pub fn decode(header: &TextureHeader, payload: &[u8]) -> Result<CanonicalImage> {
    let data_size = header.data_size as usize;
    if payload.len() < data_size {
        return Err(Error::TruncatedInput {
            needed: data_size,
            available: payload.len(),
        });
    }
    let data = &payload[..data_size];

    let width = usize::from(header.width);
    let height = usize::from(header.height);

    tracing::debug!(
        "Decompressing GXTX resource [{}x{}; {} bytes; compression: {}]",
        width,
        height,
        data_size,
        header.kind
    );

    let needed = header.expected_payload_size();
    if data.len() < needed {
        return Err(Error::CorruptData {
            message: format!(
                "{} payload of {width}x{height} needs {needed} bytes, header declares {}",
                header.kind,
                data.len()
            ),
        });
    }
    if data.len() > needed {
        if !header.kind.is_block_compressed() {
            return Err(Error::CorruptData {
                message: format!(
                    "{} payload of {width}x{height} must be exactly {needed} bytes, header declares {}",
                    header.kind,
                    data.len()
                ),
            });
        }
        tracing::warn!(
            "Ignoring {} trailing payload bytes",
            data.len() - needed
        );
    }
    let data = &data[..needed];
    let pixel_count = width * height;

    let argb = match header.kind {
        CompressionKind::Dxt1 => decode_bc(data, width, height, BlockFormat::Bc1),
        CompressionKind::Dxt3 => decode_bc(data, width, height, BlockFormat::Bc2),
        CompressionKind::A8R8G8B8 => decode_a8r8g8b8(data, pixel_count),
        CompressionKind::A4R4G4B4 => decode_a4r4g4b4(data, pixel_count),
        CompressionKind::R5G6B5 => decode_r5g6b5(data, pixel_count),
        CompressionKind::A1R5G5B5 => decode_a1r5g5b5(data, pixel_count),
    };

    CanonicalImage::new(u32::from(header.width), u32::from(header.height), argb)
}

// ============================================================================
// Block Compression (DXT1/DXT3) - decoded with bcdec_rs
// ============================================================================

fn decode_bc(data: &[u8], width: usize, height: usize, format: BlockFormat) -> Vec<u8> {
    let mut argb = vec![0u8; width * height * 4];
    let blocks_x = width.div_ceil(4);
    let blocks_y = height.div_ceil(4);
    let block_size = format.block_size();

    // One 4x4 block of RGBA, 16 bytes per row
    let mut block_rgba = [0u8; 64];
    let block_pitch = 16;

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let block_idx = (by * blocks_x + bx) * block_size;
            let block = &data[block_idx..block_idx + block_size];

            match format {
                BlockFormat::Bc1 => bcdec_rs::bc1(block, &mut block_rgba, block_pitch),
                BlockFormat::Bc2 => bcdec_rs::bc2(block, &mut block_rgba, block_pitch),
            }

            for py in 0..4 {
                for px in 0..4 {
                    let fx = bx * 4 + px;
                    let fy = by * 4 + py;
                    if fx >= width || fy >= height {
                        continue;
                    }
                    let src = (py * 4 + px) * 4;
                    let dst = (fy * width + fx) * 4;
                    argb[dst] = block_rgba[src + 3];
                    argb[dst + 1] = block_rgba[src];
                    argb[dst + 2] = block_rgba[src + 1];
                    argb[dst + 3] = block_rgba[src + 2];
                }
            }
        }
    }

    argb
}

// ============================================================================
// Raw encodings (unverified bit layouts)
// ============================================================================

fn decode_a8r8g8b8(data: &[u8], pixel_count: usize) -> Vec<u8> {
    data[..pixel_count * 4].to_vec()
}

fn decode_a4r4g4b4(data: &[u8], pixel_count: usize) -> Vec<u8> {
    let mut argb = Vec::with_capacity(pixel_count * 4);
    for pair in data.chunks_exact(2).take(pixel_count) {
        argb.push(expand_nibble(high_nibble(pair[0])));
        argb.push(expand_nibble(low_nibble(pair[0])));
        argb.push(expand_nibble(high_nibble(pair[1])));
        argb.push(expand_nibble(low_nibble(pair[1])));
    }
    argb
}

fn decode_r5g6b5(data: &[u8], pixel_count: usize) -> Vec<u8> {
    let mut argb = Vec::with_capacity(pixel_count * 4);
    for pair in data.chunks_exact(2).take(pixel_count) {
        let word = pair_word(pair[0], pair[1]);
        argb.push(0xFF);
        argb.push(pair[0] & 0b1111_1000);
        argb.push(((word & 0b0000_0111_1110_0000) >> 3) as u8);
        argb.push(pair[1] << 3);
    }
    argb
}

fn decode_a1r5g5b5(data: &[u8], pixel_count: usize) -> Vec<u8> {
    let mut argb = Vec::with_capacity(pixel_count * 4);
    for pair in data.chunks_exact(2).take(pixel_count) {
        let word = pair_word(pair[0], pair[1]);
        argb.push(sign_fill_top_bit(pair[0]));
        argb.push((pair[0] & 0b0111_1100) << 1);
        argb.push(((word & 0b0000_0011_1110_0000) >> 2) as u8);
        argb.push(pair[1] << 3);
    }
    argb
}
