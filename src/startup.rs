//! Startup: resolve the gallery directory, build the fixed item set, and
//! populate the tile model.

use crate::config::{SiteConfig, THUMBNAIL_MAX_EDGE};
use crate::error::Result;
use crate::gallery::Gallery;
use crate::image_loader;
use crate::state::AppState;
use log::{info, warn};
use slint::{ComponentHandle, Model, VecModel};
use std::path::PathBuf;
use std::rc::Rc;

fn gallery_dir_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find(|path| path.is_dir())
}

/// The gallery root: first directory argument, then `./gallery`, then a
/// folder picker. `None` when the user cancels the picker.
fn resolve_gallery_dir() -> Option<PathBuf> {
    if let Some(dir) = gallery_dir_from_args() {
        return Some(dir);
    }
    let default = PathBuf::from("gallery");
    if default.is_dir() {
        return Some(default);
    }
    rfd::FileDialog::new()
        .set_title("Choose a gallery folder")
        .pick_folder()
}

/// Builds the application state from the resolved gallery directory.
///
/// With no directory (picker cancelled) or an empty scan the app still
/// starts: the nav bar and forms work, and the lightbox controller simply
/// never attaches to anything.
pub fn build_app_state() -> Result<AppState> {
    let Some(dir) = resolve_gallery_dir() else {
        warn!("No gallery directory chosen; starting with an empty gallery");
        return Ok(AppState::new(Gallery::default(), SiteConfig::default()));
    };

    let site_config = SiteConfig::load(&dir)?;
    let gallery = Gallery::from_directory(&dir, &site_config.gallery)?;
    if gallery.is_empty() {
        warn!("No images in {}; the lightbox stays inactive", dir.display());
    } else {
        info!("Gallery: {} image(s) from {}", gallery.len(), dir.display());
    }

    Ok(AppState::new(gallery, site_config))
}

/// Fills the tile model with captions immediately and decodes thumbnails
/// on rayon workers, swapping each row in as it completes.
pub fn populate_tiles(ui: &crate::AppWindow, app_state: &AppState) {
    let gallery = &app_state.gallery;

    let tiles: Vec<crate::GalleryTileData> = gallery
        .items()
        .iter()
        .map(|item| crate::GalleryTileData {
            thumbnail: slint::Image::default(),
            caption: item.caption_text().into(),
            has_caption: item.caption.is_some(),
        })
        .collect();

    let view = ui.global::<crate::GalleryViewState>();
    view.set_empty(gallery.is_empty());
    view.set_tiles(Rc::new(VecModel::from(tiles)).into());

    for item in gallery.items() {
        let ui_handle = ui.as_weak();
        let path = item.path.clone();
        let index = item.index;
        rayon::spawn(move || {
            let loaded = image_loader::load_thumbnail_blocking(&path, THUMBNAIL_MAX_EDGE);
            let _ = slint::invoke_from_event_loop(move || {
                let Some(ui) = ui_handle.upgrade() else {
                    return;
                };
                match loaded {
                    Ok((data, width, height)) => {
                        let tiles = ui.global::<crate::GalleryViewState>().get_tiles();
                        if let Some(mut tile) = tiles.row_data(index) {
                            tile.thumbnail = image_loader::create_slint_image(data, width, height);
                            tiles.set_row_data(index, tile);
                        }
                    }
                    Err(e) => warn!("Thumbnail for {} failed: {}", path.display(), e),
                }
            });
        });
    }
}
