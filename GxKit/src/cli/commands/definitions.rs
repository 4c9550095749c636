//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

use crate::formats::gxtx::CompressionQuality;

/// ART bank commands
#[derive(Subcommand)]
pub enum ArtCommands {
    /// List the entries of a bank
    List {
        /// Bank file
        source: PathBuf,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract bank(s) into directories named after each bank
    Extract {
        /// Source bank file(s), or directories to search for banks
        #[arg(required = true)]
        source: Vec<PathBuf>,

        /// Output directory
        destination: PathBuf,

        /// Also write a PNG view of every texture entry
        #[arg(long)]
        png: bool,

        /// Keep raw texture entries when writing PNG views
        #[arg(long, requires = "png")]
        keep_original: bool,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Create a bank from the files of a directory (in name order)
    Create {
        /// Source directory
        source: PathBuf,

        /// Output bank file
        destination: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Find all banks in a directory
    Find {
        /// Directory to search
        dir: PathBuf,
    },
}

/// Texture commands
#[derive(Subcommand)]
pub enum TextureCommands {
    /// Show the header of a GXTX texture
    Info {
        /// GXTX file to analyze
        path: PathBuf,

        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a GXTX texture to PNG
    #[command(name = "to-png")]
    ToPng {
        /// Source GXTX file
        source: PathBuf,

        /// Output PNG file
        destination: PathBuf,
    },

    /// Rebuild a GXTX texture from an edited PNG
    #[command(name = "from-png")]
    FromPng {
        /// Edited PNG file
        source: PathBuf,

        /// Original GXTX file (header fields are taken from it)
        #[arg(short, long)]
        original: PathBuf,

        /// Output GXTX file (may be the original)
        destination: PathBuf,

        /// Block compression quality (fast, balanced, best)
        #[arg(long, default_value = "balanced")]
        quality: CompressionQuality,
    },

    /// Export the DXT payload of a GXTX texture as DDS
    ///
    /// Blocks are copied in stored row order, so most DDS viewers show the
    /// image upside down.
    #[command(name = "to-dds")]
    ToDds {
        /// Source GXTX file
        source: PathBuf,

        /// Output DDS file
        destination: PathBuf,
    },
}
