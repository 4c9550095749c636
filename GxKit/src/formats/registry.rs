//! File classification and dispatch
//!
//! A [`FormatRegistry`] is a plain table of `(predicate, handler)` pairs.
//! Build one at startup and pass it by reference to whatever walks files.

use serde::Serialize;

use super::art::{self, ArtEntry};
use super::gxtx::{self, GxtxTexture};
use crate::error::Result;

/// Kind of file a handler claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileKind {
    /// `.art` container of sub-resources
    ArtBank,
    /// GXTX texture resource
    GxtxTexture,
}

impl FileKind {
    /// Get display name for UI
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            FileKind::ArtBank => "ART bank",
            FileKind::GxtxTexture => "GXTX texture",
        }
    }
}

/// Predicate deciding whether a handler claims a file.
///
/// Receives the file name and the leading bytes of its content.
pub type ClaimFn = fn(name: &str, head: &[u8]) -> bool;

/// A single registered format
#[derive(Debug, Clone, Copy)]
pub struct FormatHandler {
    pub kind: FileKind,
    pub name: &'static str,
    pub claims: ClaimFn,
}

impl FormatHandler {
    /// Bank handler: matched on the `.art` suffix
    #[must_use]
    pub fn art_bank() -> Self {
        Self {
            kind: FileKind::ArtBank,
            name: "art",
            claims: |name, _| art::matches_name(name),
        }
    }

    /// Texture handler: matched on the `GXTX` magic
    #[must_use]
    pub fn gxtx_texture() -> Self {
        Self {
            kind: FileKind::GxtxTexture,
            name: "gxtx",
            claims: |_, head| gxtx::matches_magic(head),
        }
    }
}

/// A file loaded through the registry
#[derive(Debug, Clone)]
pub enum Resource {
    /// Segmented bank; ranges index into the loaded buffer
    Bank(Vec<ArtEntry>),
    /// Parsed texture
    Texture(GxtxTexture),
}

/// Ordered table of format handlers; the first claiming handler wins
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    handlers: Vec<FormatHandler>,
}

impl FormatRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the bank and texture handlers
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FormatHandler::art_bank());
        registry.register(FormatHandler::gxtx_texture());
        registry
    }

    /// Append a handler
    pub fn register(&mut self, handler: FormatHandler) {
        self.handlers.push(handler);
    }

    #[must_use]
    pub fn handlers(&self) -> &[FormatHandler] {
        &self.handlers
    }

    /// Find the handler claiming a file
    #[must_use]
    pub fn classify(&self, name: &str, head: &[u8]) -> Option<&FormatHandler> {
        self.handlers.iter().find(|handler| (handler.claims)(name, head))
    }

    /// Classify and parse a file
    ///
    /// Returns `Ok(None)` when no handler claims it.
    ///
    /// # Errors
    /// Returns an error if the claiming handler fails to parse the content.
    pub fn load(&self, name: &str, bytes: &[u8]) -> Result<Option<Resource>> {
        let Some(handler) = self.classify(name, bytes) else {
            tracing::debug!("No handler claims {}", name);
            return Ok(None);
        };
        tracing::debug!("{} claimed by {} handler", name, handler.name);

        let resource = match handler.kind {
            FileKind::ArtBank => Resource::Bank(art::segment(bytes)?),
            FileKind::GxtxTexture => Resource::Texture(GxtxTexture::read(bytes)?),
        };
        Ok(Some(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::art::build_bank;
    use crate::formats::gxtx::{CompressionKind, GXTX_MAGIC, TextureHeader};

    fn texture_bytes() -> Vec<u8> {
        let header = TextureHeader {
            magic: GXTX_MAGIC,
            width: 4,
            height: 4,
            data_size: 8,
            reserved: 0,
            kind: CompressionKind::Dxt1,
        };
        let mut bytes = header.to_bytes().to_vec();
        bytes.extend_from_slice(&[0u8; 8]);
        bytes
    }

    #[test]
    fn test_classify() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.classify("cars.art", &[]).map(|h| h.kind),
            Some(FileKind::ArtBank)
        );
        assert_eq!(
            registry.classify("image03", b"GXTX....").map(|h| h.kind),
            Some(FileKind::GxtxTexture)
        );
        assert!(registry.classify("notes.txt", b"hello").is_none());
    }

    #[test]
    fn test_empty_registry_claims_nothing() {
        let registry = FormatRegistry::new();
        assert!(registry.handlers().is_empty());
        assert!(registry.classify("cars.art", b"GXTX").is_none());
    }

    #[test]
    fn test_load_bank() {
        let bank = build_bank(&[vec![1u8, 2, 3], vec![4u8]]).unwrap();
        let Some(Resource::Bank(entries)) = FormatRegistry::with_defaults().load("a.ART", &bank).unwrap() else {
            panic!("expected a bank");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].bytes(&bank), &[4]);
    }

    #[test]
    fn test_load_texture() {
        let Some(Resource::Texture(texture)) = FormatRegistry::with_defaults()
            .load("image0", &texture_bytes())
            .unwrap()
        else {
            panic!("expected a texture");
        };
        assert_eq!(texture.header.kind, CompressionKind::Dxt1);
    }

    #[test]
    fn test_load_unclaimed() {
        assert!(FormatRegistry::with_defaults().load("x.bin", b"data").unwrap().is_none());
    }

    #[test]
    fn test_registration_order_wins() {
        let mut registry = FormatRegistry::new();
        registry.register(FormatHandler::gxtx_texture());
        registry.register(FormatHandler::art_bank());
        assert_eq!(
            registry.classify("odd.art", b"GXTX").map(|h| h.kind),
            Some(FileKind::GxtxTexture)
        );
    }
}
