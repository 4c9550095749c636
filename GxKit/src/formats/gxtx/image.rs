//! In-memory ARGB image shared by the decoder, encoder and converters

use crate::error::{Error, Result};
use crate::utils::{argb_to_rgba, rgba_to_argb};

/// Bytes per canonical pixel (A, R, G, B)
pub const PIXEL_SIZE: usize = 4;

/// Row-major 8-bit ARGB image
///
/// Freshly decoded images are bottom-up, as GXTX stores them; call
/// [`CanonicalImage::flip_vertical`] to get the top-down view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CanonicalImage {
    /// Wrap an ARGB buffer of exactly `width * height * 4` bytes
    ///
    /// # Errors
    /// Returns [`Error::CorruptData`] if the buffer length does not match.
    ///
    /// [`Error::CorruptData`]: crate::Error::CorruptData
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * PIXEL_SIZE;
        if pixels.len() != expected {
            return Err(Error::CorruptData {
                message: format!(
                    "{width}x{height} image needs {expected} bytes, got {}",
                    pixels.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image filled with a single ARGB colour
    #[must_use]
    pub fn filled(width: u32, height: u32, argb: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: argb.repeat(count),
        }
    }

    /// Build from an RGBA buffer (the order `image` and the DXT codecs use)
    ///
    /// # Errors
    /// Returns [`Error::CorruptData`] if the buffer length does not match.
    ///
    /// [`Error::CorruptData`]: crate::Error::CorruptData
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        Self::new(width, height, rgba_to_argb(rgba))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw ARGB bytes
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// ARGB value at `(x, y)`, row 0 being the first stored row
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * PIXEL_SIZE;
        let mut argb = [0u8; 4];
        argb.copy_from_slice(&self.pixels[at..at + PIXEL_SIZE]);
        Some(argb)
    }

    /// Copy of the pixels in RGBA order
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        argb_to_rgba(&self.pixels)
    }

    /// Mirror the rows in place (bottom-up <-> top-down)
    ///
    /// Applying it twice restores the original.
    pub fn flip_vertical(&mut self) {
        let row_len = self.width as usize * PIXEL_SIZE;
        let height = self.height as usize;
        if row_len == 0 {
            return;
        }
        for top in 0..height / 2 {
            let bottom = height - 1 - top;
            let (upper, lower) = self.pixels.split_at_mut(bottom * row_len);
            upper[top * row_len..(top + 1) * row_len].swap_with_slice(&mut lower[..row_len]);
        }
    }

    /// Owned variant of [`Self::flip_vertical`]
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip_vertical();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> CanonicalImage {
        let pixels = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
        CanonicalImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(matches!(
            CanonicalImage::new(2, 2, vec![0; 15]),
            Err(Error::CorruptData { .. })
        ));
    }

    #[test]
    fn test_flip_moves_rows() {
        let mut image = CanonicalImage::new(
            1,
            3,
            vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3],
        )
        .unwrap();
        image.flip_vertical();
        assert_eq!(image.pixel(0, 0), Some([3, 3, 3, 3]));
        assert_eq!(image.pixel(0, 1), Some([2, 2, 2, 2]));
        assert_eq!(image.pixel(0, 2), Some([1, 1, 1, 1]));
    }

    #[test]
    fn test_flip_twice_is_identity() {
        for (width, height) in [(0, 0), (1, 1), (1, 2), (3, 1), (4, 4), (5, 7), (16, 9), (0, 3), (3, 0)] {
            let original = numbered(width, height);
            let twice = original.clone().flipped().flipped();
            assert_eq!(twice, original, "{width}x{height}");
        }
    }

    #[test]
    fn test_rgba_conversion() {
        let image = CanonicalImage::from_rgba(1, 1, &[10, 20, 30, 40]).unwrap();
        assert_eq!(image.pixels(), &[40, 10, 20, 30]);
        assert_eq!(image.to_rgba(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_filled() {
        let image = CanonicalImage::filled(3, 2, [255, 1, 2, 3]);
        assert_eq!(image.pixels().len(), 24);
        assert_eq!(image.pixel(2, 1), Some([255, 1, 2, 3]));
        assert_eq!(image.pixel(3, 0), None);
    }
}
