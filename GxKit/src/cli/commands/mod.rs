//! CLI command definitions and handlers

pub mod art;
mod definitions;
mod execute;
pub mod identify;
pub mod texture;

use clap::Subcommand;
use std::path::PathBuf;

pub use definitions::{ArtCommands, TextureCommands};

#[derive(Subcommand)]
pub enum Commands {
    /// ART bank operations
    Art {
        #[command(subcommand)]
        command: ArtCommands,
    },

    /// GXTX texture operations
    Texture {
        #[command(subcommand)]
        command: TextureCommands,
    },

    /// Report which handler claims a file
    Identify {
        /// File to classify
        path: PathBuf,
    },
}
