//! Error types for `GxKit`

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::gxtx::CompressionKind;

/// The error type for `GxKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Structural Errors ====================
    /// The buffer is shorter than a structurally required size.
    #[error("truncated input: needed {needed} bytes, found {available}")]
    TruncatedInput {
        /// Number of bytes the structure requires.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// The ART offset table is non-monotonic or points outside the bank.
    #[error("malformed ART offset table: {message}")]
    MalformedOffsetTable {
        /// Description of the violated constraint.
        message: String,
    },

    /// Unrecognised magic bytes or an unmapped compression descriptor.
    #[error("unsupported format: {message}")]
    UnsupportedFormat {
        /// Description of what was not recognised.
        message: String,
    },

    /// Payload size inconsistent with the declared dimensions.
    #[error("corrupt texture data: {message}")]
    CorruptData {
        /// Description of the inconsistency.
        message: String,
    },

    /// The compression kind has no implemented transform for this operation.
    #[error("{operation} is not supported for {kind} textures")]
    UnsupportedOperation {
        /// The compression kind involved.
        kind: CompressionKind,
        /// The operation that was requested (e.g. "encode").
        operation: &'static str,
    },

    /// Image dimensions do not fit the 16-bit GXTX header fields.
    #[error("image dimensions {width}x{height} exceed the GXTX limit of 65535")]
    DimensionsTooLarge {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    // ==================== ART Bank Errors ====================
    /// ART extraction completed but some entries failed.
    #[error("extraction failed for {failed} of {total} entries: {first_error}")]
    ArtExtractionPartialFailure {
        /// Number of entries in the bank.
        total: usize,
        /// Number of failed entries.
        failed: usize,
        /// The first error message encountered.
        first_error: String,
    },

    /// The source directory for bank creation does not exist.
    #[error("ART source directory not found: {path}")]
    ArtSourceNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    // ==================== PNG/DDS Conversion Errors ====================
    /// Failed to create an image buffer from texture data.
    #[error("failed to create image buffer")]
    ImageBufferFailed,

    /// Failed to decode a PNG image.
    #[error("failed to decode PNG: {message}")]
    PngDecodeFailed {
        /// The decoding error message.
        message: String,
    },

    /// Failed to encode a PNG image.
    #[error("failed to encode PNG: {message}")]
    PngEncodeFailed {
        /// The encoding error message.
        message: String,
    },

    /// Failed to create a DDS texture.
    #[error("failed to create DDS: {message}")]
    DdsCreateFailed {
        /// The error message.
        message: String,
    },

    /// Failed to write DDS texture data.
    #[error("failed to write DDS: {message}")]
    DdsWriteFailed {
        /// The error message.
        message: String,
    },

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `GxKit` operations.
pub type Result<T> = std::result::Result<T, Error>;
