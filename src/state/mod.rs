//! State management for the showcase application.
//!
//! Every widget's logical state lives here as an explicit struct; the
//! Slint scene only ever receives projections of these structs, never the
//! other way around.

use crate::config::{NAV_SECTION_COUNT, SiteConfig};
use crate::gallery::Gallery;
use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex};

pub mod focus;
pub mod forms;
pub mod lightbox;
pub mod nav;
pub mod panels;
pub mod scroll;
pub mod swipe;

pub use forms::FormMachine;
pub use lightbox::LightboxState;
pub use nav::NavState;

/// Application-wide state container.
pub struct AppState {
    /// The fixed Gallery Item Set; immutable after startup.
    pub gallery: Arc<Gallery>,
    pub site_config: Arc<SiteConfig>,
    pub lightbox: Arc<Mutex<LightboxState>>,
    pub nav: Arc<Mutex<NavState>>,
    pub newsletter: Arc<Mutex<FormMachine>>,
    pub notify: Arc<Mutex<FormMachine>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
}

impl AppState {
    pub fn new(gallery: Gallery, site_config: SiteConfig) -> Self {
        let item_count = gallery.len();
        Self {
            gallery: Arc::new(gallery),
            site_config: Arc::new(site_config),
            lightbox: Arc::new(Mutex::new(LightboxState::new(item_count))),
            nav: Arc::new(Mutex::new(NavState::new(NAV_SECTION_COUNT))),
            newsletter: Arc::new(Mutex::new(FormMachine::new())),
            notify: Arc::new(Mutex::new(FormMachine::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(
                crate::config::IMAGE_CACHE_CAPACITY,
            ))),
        }
    }
}
