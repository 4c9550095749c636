//! CLI command for file classification

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::formats::gxtx::HEADER_SIZE;
use crate::formats::registry::FormatRegistry;

/// Report which handler claims a file
pub fn execute(path: &Path) -> anyhow::Result<()> {
    let registry = FormatRegistry::with_defaults();

    let mut head = Vec::with_capacity(HEADER_SIZE);
    File::open(path)?
        .take(HEADER_SIZE as u64)
        .read_to_end(&mut head)?;

    let name = path.to_string_lossy();
    match registry.classify(&name, &head) {
        Some(handler) => println!("{}: {}", path.display(), handler.kind.display_name()),
        None => println!("{}: not recognised", path.display()),
    }

    Ok(())
}
