use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_supported_image(Path::new("a/photo.JPG")));
        assert!(is_supported_image(Path::new("a/photo.webp")));
        assert!(!is_supported_image(Path::new("a/notes.txt")));
        assert!(!is_supported_image(Path::new("a/no_extension")));
    }
}
