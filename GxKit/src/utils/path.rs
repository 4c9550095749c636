//! Path utilities

use std::path::Path;

/// Case-insensitive extension check (`"art"`, not `".art"`)
pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Directory name used for the entries of a bank: the file name without extension
pub fn bank_stem<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension("data/cars.art", "art"));
        assert!(has_extension("data/CARS.ART", "art"));
        assert!(!has_extension("data/cars.artx", "art"));
        assert!(!has_extension("data/cars", "art"));
    }

    #[test]
    fn test_bank_stem() {
        assert_eq!(bank_stem("data/cars.art"), "cars");
        assert_eq!(bank_stem("hud.art"), "hud");
    }
}
