//! Extraction options for texture entries
//!
//! Entries of a bank are usually GXTX textures. These options control
//! whether they are also written as PNG views during extraction.

/// Options for post-processing extracted entries.
///
/// Entries that are not GXTX textures are always written unchanged.
///
/// # Example
///
/// ```
/// use gxkit::art::ArtExtractionOptions;
///
/// // PNG views only, without the raw resources
/// let options = ArtExtractionOptions::new()
///     .with_convert_to_png(true)
///     .with_keep_original(false);
/// assert!(options.writes_png());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtExtractionOptions {
    /// Write a `<name>.png` view next to every texture entry
    /// Default: false
    pub convert_to_png: bool,

    /// Keep the raw GXTX entry when a PNG view is written
    /// Default: true
    pub keep_original: bool,
}

impl Default for ArtExtractionOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtExtractionOptions {
    /// Create new options: raw entries only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            convert_to_png: false,
            keep_original: true,
        }
    }

    /// Set whether to write PNG views of texture entries
    #[must_use]
    pub fn with_convert_to_png(mut self, value: bool) -> Self {
        self.convert_to_png = value;
        self
    }

    /// Set whether to keep raw texture entries alongside their PNG view
    #[must_use]
    pub fn with_keep_original(mut self, value: bool) -> Self {
        self.keep_original = value;
        self
    }

    /// Check if any texture post-processing is enabled
    #[must_use]
    pub fn writes_png(&self) -> bool {
        self.convert_to_png
    }

    /// Whether the raw bytes of a texture entry are written
    #[must_use]
    pub fn writes_raw_texture(&self) -> bool {
        !self.convert_to_png || self.keep_original
    }
}
