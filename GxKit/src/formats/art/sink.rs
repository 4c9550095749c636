//! Destinations for segmented bank entries
//!
//! The segmenter only computes ranges; persisting them is the job of an
//! [`EntrySink`]. Entries are independent once the offset table is parsed, so
//! [`emit_entries`] hands them to the sink in parallel.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rayon::prelude::*;

use super::ArtEntry;
use crate::error::{Error, Result};

/// Receiver of `(name, bytes)` pairs produced by bank segmentation
///
/// Implementations must tolerate concurrent calls.
pub trait EntrySink: Sync {
    /// Persist or otherwise consume one entry
    ///
    /// # Errors
    /// Returns an error if the entry cannot be stored.
    fn emit(&self, name: &str, data: &[u8]) -> Result<()>;
}

/// Writes every entry as a file inside one directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create the directory (and parents) if needed
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the directory cannot be created.
    ///
    /// [`Error::Io`]: crate::Error::Io
    pub fn create<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory the entries are written to
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an entry with `name` is written to
    #[must_use]
    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl EntrySink for DirectorySink {
    fn emit(&self, name: &str, data: &[u8]) -> Result<()> {
        std::fs::write(self.entry_path(name), data)?;
        Ok(())
    }
}

/// Collects entries in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected entries sorted by name
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, Vec<u8>)> {
        let mut entries = self
            .entries
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl EntrySink for MemorySink {
    fn emit(&self, name: &str, data: &[u8]) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((name.to_string(), data.to_vec()));
        Ok(())
    }
}

/// Hand every entry of `bank` to `sink`, in parallel
///
/// All entries are attempted even if some fail.
///
/// # Errors
/// Returns [`Error::ArtExtractionPartialFailure`] if any entry could not be emitted.
///
/// [`Error::ArtExtractionPartialFailure`]: crate::Error::ArtExtractionPartialFailure
pub fn emit_entries<S: EntrySink + ?Sized>(
    bank: &[u8],
    entries: &[ArtEntry],
    sink: &S,
) -> Result<()> {
    let errors: Vec<(String, String)> = entries
        .par_iter()
        .filter_map(|entry| {
            let Some(data) = bank.get(entry.range.clone()) else {
                return Some((entry.name.clone(), "range outside bank".to_string()));
            };
            match sink.emit(&entry.name, data) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!("Failed to emit {}: {}", entry.name, e);
                    Some((entry.name.clone(), e.to_string()))
                }
            }
        })
        .collect();

    if let Some((name, message)) = errors.first() {
        return Err(Error::ArtExtractionPartialFailure {
            total: entries.len(),
            failed: errors.len(),
            first_error: format!("{name}: {message}"),
        });
    }

    Ok(())
}
