//! Saving a copy of the displayed gallery image.
//!
//! The per-item and lightbox download affordances both land here: a save
//! dialog pre-filled with the caption-derived file name, then a plain file
//! copy on a worker thread. Failures are logged, never fatal.

use crate::gallery::GalleryItem;
use log::{error, info};

/// Opens a save dialog for `item` and copies the source file to the chosen
/// destination. Must be called from the UI thread (the dialog requires it).
pub fn save_copy(item: GalleryItem) {
    let _ = slint::spawn_local(async move {
        let dialog = rfd::AsyncFileDialog::new().set_file_name(item.download_name());

        // The dialog must run on the main thread; the copy must not.
        let Some(handle) = dialog.save_file().await else {
            return;
        };
        let dest = handle.path().to_path_buf();

        rayon::spawn(move || match std::fs::copy(&item.path, &dest) {
            Ok(bytes) => info!("Saved {} ({} bytes)", dest.display(), bytes),
            Err(e) => error!("Failed to save {}: {}", dest.display(), e),
        });
    });
}
