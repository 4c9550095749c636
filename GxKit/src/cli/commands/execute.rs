//! Command execution implementations

use super::Commands;
use super::definitions::{ArtCommands, TextureCommands};
use super::{art, identify, texture};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Art { command } => command.execute(),
            Commands::Texture { command } => command.execute(),
            Commands::Identify { path } => identify::execute(path),
        }
    }
}

impl ArtCommands {
    /// Execute the selected ART command.
    ///
    /// # Errors
    /// Returns an error if the underlying bank operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ArtCommands::List { source, json } => art::list(source, *json),
            ArtCommands::Extract {
                source,
                destination,
                png,
                keep_original,
                quiet,
            } => art::extract(source, destination, *png, *keep_original, *quiet),
            ArtCommands::Create {
                source,
                destination,
                quiet,
            } => art::create(source, destination, *quiet),
            ArtCommands::Find { dir } => art::find(dir),
        }
    }
}

impl TextureCommands {
    /// Execute the selected texture command.
    ///
    /// # Errors
    /// Returns an error if the underlying texture operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            TextureCommands::Info { path, json } => texture::info(path, *json),
            TextureCommands::ToPng {
                source,
                destination,
            } => texture::to_png(source, destination),
            TextureCommands::FromPng {
                source,
                original,
                destination,
                quality,
            } => texture::from_png(source, original, destination, *quality),
            TextureCommands::ToDds {
                source,
                destination,
            } => texture::to_dds(source, destination),
        }
    }
}
