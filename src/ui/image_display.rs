//! Loading and displaying the lightbox image.
//!
//! Cache-first: a hit displays immediately on the UI thread; a miss
//! decodes on a rayon worker and returns through
//! `slint::invoke_from_event_loop`. Wraparound neighbors of the displayed
//! item are preloaded so arrow navigation feels instant.

use crate::gallery::Gallery;
use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use log::error;
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shows the gallery item at `index` in the lightbox.
pub fn display_item(
    ui: slint::Weak<crate::AppWindow>,
    gallery: Arc<Gallery>,
    cache: Arc<Mutex<ImageCache>>,
    index: usize,
) {
    let Some(item) = gallery.item(index) else {
        return;
    };
    let path = item.path.clone();

    // Check cache first
    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));

    if let Some(cached_image) = cached {
        if let Some(ui) = ui.upgrade() {
            set_lightbox_image(&ui, cached_image);
            preload_neighbors(gallery, cache, index);
        }
        return;
    }

    // Cache miss: decode off the event loop
    let cache_clone = cache.clone();
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            match result {
                Ok((data, width, height)) => {
                    let cached_image = CachedImage::new(data, width, height);
                    if let Ok(mut cache) = cache_clone.lock() {
                        cache.put(path, cached_image.clone());
                    }
                    set_lightbox_image(&ui, cached_image);
                    preload_neighbors(gallery, cache_clone, index);
                }
                Err(e) => error!("Failed to load {}: {}", path.display(), e),
            }
        });
    });
}

fn set_lightbox_image(ui: &crate::AppWindow, cached: CachedImage) {
    let image = image_loader::create_slint_image(cached.data, cached.width, cached.height);
    ui.global::<crate::LightboxViewState>().set_current_image(image);
}

/// Warms the cache with the items on either side of `index`, with the
/// same wraparound the navigation uses.
fn preload_neighbors(gallery: Arc<Gallery>, cache: Arc<Mutex<ImageCache>>, index: usize) {
    let count = gallery.len();
    if count < 2 {
        return;
    }

    let next = (index + 1) % count;
    let prev = (index + count - 1) % count;
    for neighbor in [next, prev] {
        if neighbor == index {
            continue;
        }
        if let Some(item) = gallery.item(neighbor) {
            preload(item.path.clone(), cache.clone());
        }
    }
}

fn preload(path: PathBuf, cache: Arc<Mutex<ImageCache>>) {
    let should_load = cache
        .lock()
        .ok()
        .map(|mut c| !c.contains(&path))
        .unwrap_or(false);
    if !should_load {
        return;
    }

    rayon::spawn(move || {
        // Silently ignore errors during preload
        if let Ok((data, width, height)) = image_loader::load_image_blocking(&path) {
            if let Ok(mut cache) = cache.lock() {
                cache.put(path, CachedImage::new(data, width, height));
            }
        }
    });
}
