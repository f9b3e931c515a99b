//! Application configuration: fixed tuning constants plus the optional
//! `showcase.toml` site configuration.

use crate::error::{AppError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Supported image file extensions for scanning the gallery directory.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Horizontal displacement a terminating touch sequence must exceed to
/// count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Vertical page offset past which the nav bar switches to its scrolled
/// styling.
pub const SCROLLED_THRESHOLD_PX: f32 = 40.0;

/// How long a failed form submission shows its error label before the
/// control is restored and re-enabled.
pub const FORM_RESET_DELAY_MS: u64 = 3000;

/// Capacity of the decoded-image LRU cache.
pub const IMAGE_CACHE_CAPACITY: usize = 10;

/// Long-edge bound for gallery tile thumbnails.
pub const THUMBNAIL_MAX_EDGE: u32 = 512;

/// Number of desktop dropdown regions / mobile accordion sections in the
/// nav bar scene. The two widgets mirror the same sections.
pub const NAV_SECTION_COUNT: usize = 2;

/// Site configuration loaded from `showcase.toml` in the gallery directory.
///
/// Everything is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub forms: FormsConfig,
    pub gallery: GalleryConfig,
}

/// Endpoints the two signup forms post to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub newsletter_endpoint: String,
    pub notify_endpoint: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            newsletter_endpoint: "https://example.com/api/newsletter".to_string(),
            notify_endpoint: "https://example.com/api/notify".to_string(),
        }
    }
}

/// Gallery presentation options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Captions keyed by file name. Files without an entry have no caption.
    pub captions: HashMap<String, String>,
}

impl SiteConfig {
    /// Loads `showcase.toml` from the given directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("showcase.toml");
        if !path.exists() {
            log::debug!("No showcase.toml in {}, using defaults", dir.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_endpoints() {
        let config = SiteConfig::default();
        assert!(!config.forms.newsletter_endpoint.is_empty());
        assert!(!config.forms.notify_endpoint.is_empty());
        assert!(config.gallery.captions.is_empty());
    }

    #[test]
    fn parses_partial_toml() {
        let config: SiteConfig = toml::from_str(
            r#"
            [forms]
            newsletter_endpoint = "https://site.test/newsletter"

            [gallery.captions]
            "sunset.jpg" = "Sunset over the bay"
            "#,
        )
        .unwrap();

        assert_eq!(config.forms.newsletter_endpoint, "https://site.test/newsletter");
        // Unspecified fields keep their defaults.
        assert_eq!(
            config.forms.notify_endpoint,
            FormsConfig::default().notify_endpoint
        );
        assert_eq!(
            config.gallery.captions.get("sunset.jpg").map(String::as_str),
            Some("Sunset over the bay")
        );
    }
}
