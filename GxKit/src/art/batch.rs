//! Batch ART operations
//!
//! Discovery of `.art` files and parallel extraction of many banks.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::types::{ArtPhase, ArtProgress};
use super::{ArtExtractionOptions, ArtOperations};
use crate::formats::art::ART_EXTENSION;
use crate::utils::has_extension;

/// Result of a batch ART operation
#[derive(Debug, Clone)]
pub struct BatchArtResult {
    /// Number of successful operations
    pub success_count: usize,
    /// Number of failed operations
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Find all .art files in a directory recursively
///
/// # Returns
/// A sorted list of paths to .art files found in the directory tree.
pub fn find_art_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut art_files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file() && has_extension(e.path(), ART_EXTENSION))
        .map(walkdir::DirEntry::into_path)
        .collect();

    art_files.sort();
    art_files
}

/// Batch extract banks in parallel
///
/// Each bank is extracted into a directory named after it, under the same
/// relative location in `dest_base` as it had under `source_base`.
pub fn batch_extract<F>(
    art_files: &[PathBuf],
    source_base: &Path,
    dest_base: &Path,
    options: ArtExtractionOptions,
    progress: F,
) -> BatchArtResult
where
    F: Fn(&ArtProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = art_files.len();

    let results: Vec<String> = art_files
        .par_iter()
        .map(|art_path| {
            let relative_path = art_path
                .strip_prefix(source_base)
                .unwrap_or(art_path.as_path());
            let display_path = relative_path.to_string_lossy();

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&ArtProgress::with_file(
                ArtPhase::WritingEntries,
                current,
                total,
                display_path.to_string(),
            ));

            let relative_parent = relative_path.parent().unwrap_or(Path::new(""));
            let art_dest = dest_base.join(relative_parent);

            match ArtOperations::extract_with_options(art_path, &art_dest, options, &|_| {}) {
                Ok(_) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Extracted: {display_path}")
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Failed to extract {}: {}", display_path, e);
                    format!("Failed {display_path}: {e}")
                }
            }
        })
        .collect();

    BatchArtResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::art::build_bank;
    use tempfile::TempDir;

    #[test]
    fn test_find_art_files() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("menus")).unwrap();
        std::fs::write(temp.path().join("b.art"), b"").unwrap();
        std::fs::write(temp.path().join("menus/A.ART"), b"").unwrap();
        std::fs::write(temp.path().join("notes.txt"), b"").unwrap();

        let found = find_art_files(temp.path());
        assert_eq!(found, vec![temp.path().join("b.art"), temp.path().join("menus/A.ART")]);
    }

    #[test]
    fn test_batch_extract_keeps_structure() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("data");
        std::fs::create_dir_all(source.join("menus")).unwrap();
        let bank = build_bank(&[b"x".as_slice()]).unwrap();
        std::fs::write(source.join("cars.art"), &bank).unwrap();
        std::fs::write(source.join("menus/hud.art"), &bank).unwrap();
        std::fs::write(source.join("menus/broken.art"), [9, 0, 0, 0]).unwrap();

        let dest = temp.path().join("out");
        let files = find_art_files(&source);
        let result = batch_extract(&files, &source, &dest, ArtExtractionOptions::new(), |_| {});

        assert_eq!(result.success_count, 2);
        assert_eq!(result.fail_count, 1);
        assert_eq!(result.results.len(), 3);
        assert!(dest.join("cars/image0").exists());
        assert!(dest.join("menus/hud/image0").exists());
    }
}
