//! Progress and listing types for ART operations

use serde::Serialize;

use crate::formats::gxtx::TextureInfo;

/// Progress information during ART operations
#[derive(Debug, Clone)]
pub struct ArtProgress {
    /// Current operation phase
    pub phase: ArtPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current entry or file being processed (if applicable)
    pub current_file: Option<String>,
}

impl ArtProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ArtPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(phase: ArtPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of an ART operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtPhase {
    /// Parsing the offset table
    ReadingTable,
    /// Writing entries to disk (during extraction)
    WritingEntries,
    /// Scanning the source directory (during creation)
    ScanningFiles,
    /// Writing the bank file (during creation)
    WritingBank,
    /// Operation complete
    Complete,
}

impl ArtPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingTable => "Reading offset table",
            Self::WritingEntries => "Writing entries",
            Self::ScanningFiles => "Scanning files",
            Self::WritingBank => "Writing bank",
            Self::Complete => "Complete",
        }
    }
}

/// One row of a bank listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtEntryInfo {
    /// Synthetic entry name (`image07`)
    pub name: String,
    /// Start offset within the bank
    pub offset: usize,
    /// Size in bytes
    pub size: usize,
    /// Header summary when the entry is a GXTX texture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<TextureInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert!((ArtProgress::new(ArtPhase::WritingEntries, 1, 4).percentage() - 0.25).abs() < f32::EPSILON);
        assert!((ArtProgress::new(ArtPhase::Complete, 0, 0).percentage() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_with_file() {
        let progress = ArtProgress::with_file(ArtPhase::WritingEntries, 2, 3, "image1");
        assert_eq!(progress.current_file.as_deref(), Some("image1"));
        assert_eq!(progress.phase.as_str(), "Writing entries");
    }
}
