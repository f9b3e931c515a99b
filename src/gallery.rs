//! The Gallery Item Set: an ordered, immutable sequence of displayable
//! images collected once at startup.

use crate::config::GalleryConfig;
use crate::error::Result;
use crate::file_utils;
use std::path::{Path, PathBuf};

/// One displayable image in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub path: PathBuf,
    pub caption: Option<String>,
    /// 0-based position in the sequence.
    pub index: usize,
}

impl GalleryItem {
    /// Caption text for display. Falls back to the empty string.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    /// Suggested file name for the download affordance. Falls back to
    /// `"image"` when the item has no caption.
    pub fn download_name(&self) -> String {
        let stem = self.caption.as_deref().unwrap_or("image");
        match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem.to_string(),
        }
    }
}

/// The fixed item sequence. Built once; not mutable afterward.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Scans `dir` for supported images and attaches captions from the
    /// site configuration, keyed by file name.
    pub fn from_directory(dir: &Path, config: &GalleryConfig) -> Result<Self> {
        let paths = file_utils::scan_directory(dir)?;
        Ok(Self::from_paths(paths, config))
    }

    fn from_paths(paths: Vec<PathBuf>, config: &GalleryConfig) -> Self {
        let items = paths
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                let caption = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|name| config.captions.get(name))
                    .cloned();
                GalleryItem {
                    path,
                    caption,
                    index,
                }
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn gallery_config(captions: &[(&str, &str)]) -> GalleryConfig {
        GalleryConfig {
            captions: captions
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn captions_attach_by_file_name() {
        let config = gallery_config(&[("b.png", "Second")]);
        let gallery = Gallery::from_paths(
            vec![PathBuf::from("g/a.png"), PathBuf::from("g/b.png")],
            &config,
        );

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.item(0).unwrap().caption, None);
        assert_eq!(gallery.item(1).unwrap().caption.as_deref(), Some("Second"));
        assert_eq!(gallery.item(1).unwrap().index, 1);
    }

    #[test]
    fn caption_text_falls_back_to_empty() {
        let gallery = Gallery::from_paths(vec![PathBuf::from("g/a.png")], &GalleryConfig::default());
        assert_eq!(gallery.item(0).unwrap().caption_text(), "");
    }

    #[test]
    fn download_name_falls_back_to_image() {
        let config = gallery_config(&[("b.png", "Harbor at dusk")]);
        let gallery = Gallery::from_paths(
            vec![PathBuf::from("g/a.png"), PathBuf::from("g/b.png")],
            &config,
        );

        assert_eq!(gallery.item(0).unwrap().download_name(), "image.png");
        assert_eq!(gallery.item(1).unwrap().download_name(), "Harbor at dusk.png");
    }
}
