//! ART bank operations module
//!
//! File-level operations on top of [`crate::formats::art`]: listing,
//! extraction into a bank-named directory, bank creation and batch work.

mod batch;
mod operations;
mod options;
mod types;

// Primary public API
pub use operations::ArtOperations;
pub use options::ArtExtractionOptions;
pub use types::{ArtEntryInfo, ArtPhase, ArtProgress};

// Re-export batch operations
pub use batch::{BatchArtResult, batch_extract, find_art_files};

/// Progress callback for ART operations.
///
/// Must be `Sync + Send`; entries are written in parallel.
///
/// # Example
/// ```no_run
/// use gxkit::art::{ArtOperations, ArtPhase};
///
/// ArtOperations::extract_with_progress("cars.art", "out", &|progress| {
///     if progress.phase == ArtPhase::WritingEntries {
///         println!("{}/{}: {:?}", progress.current, progress.total, progress.current_file);
///     }
/// })?;
/// # Ok::<(), gxkit::Error>(())
/// ```
pub type ProgressCallback<'a> = &'a (dyn Fn(&ArtProgress) + Sync + Send);
