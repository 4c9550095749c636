//! Core ART bank operations

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use walkdir::WalkDir;

use super::types::{ArtEntryInfo, ArtPhase, ArtProgress};
use super::{ArtExtractionOptions, ProgressCallback};
use crate::converter::canonical_to_png_bytes;
use crate::error::{Error, Result};
use crate::formats::art::{DirectorySink, EntrySink, OffsetTable, build_bank, emit_entries};
use crate::formats::gxtx::{GxtxTexture, TextureHeader, TextureInfo, matches_magic};
use crate::utils::bank_stem;

/// Sink that writes entries and PNG views while reporting progress
struct ExtractionSink<'a> {
    dir: DirectorySink,
    options: ArtExtractionOptions,
    progress: ProgressCallback<'a>,
    processed: AtomicUsize,
    total: usize,
}

impl EntrySink for ExtractionSink<'_> {
    fn emit(&self, name: &str, data: &[u8]) -> Result<()> {
        let current = self.processed.fetch_add(1, Ordering::SeqCst) + 1;
        (self.progress)(&ArtProgress::with_file(
            ArtPhase::WritingEntries,
            current,
            self.total,
            name,
        ));

        let is_texture = matches_magic(data);
        if !is_texture || self.options.writes_raw_texture() {
            self.dir.emit(name, data)?;
        }
        if is_texture && self.options.writes_png() {
            let image = GxtxTexture::read(data)?.decode_image()?;
            std::fs::write(
                self.dir.entry_path(&format!("{name}.png")),
                canonical_to_png_bytes(&image)?,
            )?;
        }
        Ok(())
    }
}

/// High-level ART bank operations.
pub struct ArtOperations;

impl ArtOperations {
    /// Extract a bank into `<output_dir>/<bank name>/`
    ///
    /// Returns the directory the entries were written to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the bank cannot be read or the directory cannot be created.
    /// Returns [`Error::TruncatedInput`] or [`Error::MalformedOffsetTable`] for an invalid bank.
    /// Returns [`Error::ArtExtractionPartialFailure`] if some entries could not be written.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
    /// [`Error::MalformedOffsetTable`]: crate::Error::MalformedOffsetTable
    /// [`Error::ArtExtractionPartialFailure`]: crate::Error::ArtExtractionPartialFailure
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(bank_path: P, output_dir: Q) -> Result<PathBuf> {
        Self::extract_with_options(bank_path, output_dir, ArtExtractionOptions::default(), &|_| {})
    }

    /// Extract a bank with progress callback
    ///
    /// # Errors
    /// See [`Self::extract`].
    pub fn extract_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
        bank_path: P,
        output_dir: Q,
        progress: ProgressCallback,
    ) -> Result<PathBuf> {
        Self::extract_with_options(bank_path, output_dir, ArtExtractionOptions::default(), progress)
    }

    /// Extract a bank, optionally writing PNG views of texture entries
    ///
    /// Entries are written in parallel; every entry is attempted even if
    /// some fail.
    ///
    /// # Errors
    /// See [`Self::extract`]. PNG conversion failures count as failed entries.
    pub fn extract_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
        bank_path: P,
        output_dir: Q,
        options: ArtExtractionOptions,
        progress: ProgressCallback,
    ) -> Result<PathBuf> {
        let bank_path = bank_path.as_ref();
        tracing::info!("Extracting ART bank {}", bank_path.display());

        progress(&ArtProgress::new(ArtPhase::ReadingTable, 1, 1));
        let bank = std::fs::read(bank_path)?;
        let entries = OffsetTable::parse(&bank)?.entries();

        let dest = output_dir.as_ref().join(bank_stem(bank_path));
        let sink = ExtractionSink {
            dir: DirectorySink::create(&dest)?,
            options,
            progress,
            processed: AtomicUsize::new(0),
            total: entries.len(),
        };
        emit_entries(&bank, &entries, &sink)?;

        progress(&ArtProgress::new(ArtPhase::Complete, entries.len(), entries.len()));
        tracing::info!("Extracted {} entries to {}", entries.len(), dest.display());
        Ok(dest)
    }

    /// Build a bank from the files of a directory, in file name order
    ///
    /// Only the immediate files are packed; subdirectories and `.DS_Store`
    /// files are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArtSourceNotFound`] if `source_dir` is not a directory.
    /// Returns [`Error::Io`] or [`Error::WalkDirError`] if reading fails.
    ///
    /// [`Error::ArtSourceNotFound`]: crate::Error::ArtSourceNotFound
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::WalkDirError`]: crate::Error::WalkDirError
    pub fn create<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, output_bank: Q) -> Result<()> {
        Self::create_with_progress(source_dir, output_bank, &|_| {})
    }

    /// Build a bank from a directory with progress callback
    ///
    /// # Errors
    /// See [`Self::create`].
    pub fn create_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
        source_dir: P,
        output_bank: Q,
        progress: ProgressCallback,
    ) -> Result<()> {
        let source_dir = source_dir.as_ref();
        if !source_dir.is_dir() {
            return Err(Error::ArtSourceNotFound {
                path: source_dir.to_path_buf(),
            });
        }
        tracing::info!("Creating ART bank from {}", source_dir.display());

        let mut files = Vec::new();
        for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if entry.file_type().is_file() && entry.file_name() != ".DS_Store" {
                files.push(entry.into_path());
            }
        }
        files.sort();

        let total = files.len();
        let mut contents = Vec::with_capacity(total);
        for (i, path) in files.iter().enumerate() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            progress(&ArtProgress::with_file(ArtPhase::ScanningFiles, i + 1, total, name));
            contents.push(std::fs::read(path)?);
        }

        progress(&ArtProgress::new(ArtPhase::WritingBank, 1, 1));
        let bank = build_bank(&contents)?;
        if let Some(parent) = output_bank.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_bank.as_ref(), &bank)?;

        progress(&ArtProgress::new(ArtPhase::Complete, total, total));
        tracing::info!(
            "Wrote {} entries ({} bytes) to {}",
            total,
            bank.len(),
            output_bank.as_ref().display()
        );
        Ok(())
    }

    /// List the entries of a bank
    ///
    /// Entries starting with the GXTX magic carry their texture header
    /// summary; an unparseable header is reported as no texture.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the bank cannot be read.
    /// Returns [`Error::TruncatedInput`] or [`Error::MalformedOffsetTable`] for an invalid bank.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
    /// [`Error::MalformedOffsetTable`]: crate::Error::MalformedOffsetTable
    pub fn list<P: AsRef<Path>>(bank_path: P) -> Result<Vec<ArtEntryInfo>> {
        let bank = std::fs::read(bank_path.as_ref())?;
        Self::list_bytes(&bank)
    }

    /// List the entries of an in-memory bank
    ///
    /// # Errors
    /// See [`Self::list`].
    pub fn list_bytes(bank: &[u8]) -> Result<Vec<ArtEntryInfo>> {
        let entries = OffsetTable::parse(bank)?.entries();
        Ok(entries
            .iter()
            .map(|entry| {
                let data = entry.bytes(bank);
                ArtEntryInfo {
                    name: entry.name.clone(),
                    offset: entry.range.start,
                    size: entry.len(),
                    texture: sniff_texture(data),
                }
            })
            .collect())
    }
}

fn sniff_texture(data: &[u8]) -> Option<TextureInfo> {
    if !matches_magic(data) {
        return None;
    }
    match TextureHeader::parse(data) {
        Ok(header) => Some(TextureInfo::from_header(
            &header,
            data.len().saturating_sub(crate::formats::gxtx::HEADER_SIZE),
        )),
        Err(e) => {
            tracing::debug!("Entry has GXTX magic but no valid header: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::gxtx::{CompressionKind, GXTX_MAGIC};
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn texture_entry() -> Vec<u8> {
        let header = TextureHeader {
            magic: GXTX_MAGIC,
            width: 4,
            height: 4,
            data_size: 8,
            reserved: 0,
            kind: CompressionKind::Dxt1,
        };
        let mut bytes = header.to_bytes().to_vec();
        bytes.extend_from_slice(&[0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0]);
        bytes
    }

    fn write_bank(dir: &Path) -> PathBuf {
        let bank = build_bank(&[b"plain".to_vec(), texture_entry()]).unwrap();
        let path = dir.join("cars.art");
        std::fs::write(&path, bank).unwrap();
        path
    }

    #[test]
    fn test_extract_into_bank_named_dir() {
        let temp = TempDir::new().unwrap();
        let bank = write_bank(temp.path());
        let out = temp.path().join("out");

        let dest = ArtOperations::extract(&bank, &out).unwrap();
        assert_eq!(dest, out.join("cars"));
        assert_eq!(std::fs::read(dest.join("image0")).unwrap(), b"plain");
        assert_eq!(std::fs::read(dest.join("image1")).unwrap(), texture_entry());
        assert!(!dest.join("image1.png").exists());
    }

    #[test]
    fn test_extract_with_png_views() {
        let temp = TempDir::new().unwrap();
        let bank = write_bank(temp.path());
        let options = ArtExtractionOptions::new()
            .with_convert_to_png(true)
            .with_keep_original(false);

        let dest = ArtOperations::extract_with_options(&bank, temp.path(), options, &|_| {}).unwrap();
        assert!(dest.join("image0").exists());
        assert!(!dest.join("image1").exists());
        assert!(dest.join("image1.png").exists());
        assert!(!dest.join("image0.png").exists());
    }

    #[test]
    fn test_extract_reports_progress() {
        let temp = TempDir::new().unwrap();
        let bank = write_bank(temp.path());
        let phases = Mutex::new(Vec::new());

        ArtOperations::extract_with_progress(&bank, temp.path(), &|p| {
            phases.lock().unwrap().push(p.phase);
        })
        .unwrap();

        let phases = phases.into_inner().unwrap();
        assert_eq!(phases.first(), Some(&ArtPhase::ReadingTable));
        assert_eq!(phases.last(), Some(&ArtPhase::Complete));
        assert_eq!(phases.iter().filter(|p| **p == ArtPhase::WritingEntries).count(), 2);
    }

    #[test]
    fn test_create_then_extract() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        std::fs::create_dir_all(source.join("nested")).unwrap();
        std::fs::write(source.join("image1"), b"second").unwrap();
        std::fs::write(source.join("image0"), b"first").unwrap();
        std::fs::write(source.join("nested/ignored"), b"x").unwrap();

        let bank = temp.path().join("new.art");
        ArtOperations::create(&source, &bank).unwrap();

        let listing = ArtOperations::list(&bank).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].offset, 12);
        assert_eq!(listing[0].size, 5);
        assert_eq!(listing[1].size, 6);

        let dest = ArtOperations::extract(&bank, temp.path()).unwrap();
        assert_eq!(std::fs::read(dest.join("image0")).unwrap(), b"first");
        assert_eq!(std::fs::read(dest.join("image1")).unwrap(), b"second");
    }

    #[test]
    fn test_create_missing_source() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            ArtOperations::create(temp.path().join("missing"), temp.path().join("x.art")),
            Err(Error::ArtSourceNotFound { .. })
        ));
    }

    #[test]
    fn test_list_sniffs_textures() {
        let bank = build_bank(&[b"GXTX".to_vec(), texture_entry()]).unwrap();
        let listing = ArtOperations::list_bytes(&bank).unwrap();
        assert!(listing[0].texture.is_none());
        let texture = listing[1].texture.as_ref().unwrap();
        assert_eq!(texture.kind, CompressionKind::Dxt1);
        assert_eq!(texture.payload_available, 8);
    }

    #[test]
    fn test_malformed_bank() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.art");
        std::fs::write(&path, [2, 0, 0, 0, 20, 0, 0, 0]).unwrap();
        assert!(matches!(
            ArtOperations::extract(&path, temp.path()),
            Err(Error::TruncatedInput { .. })
        ));
    }
}
