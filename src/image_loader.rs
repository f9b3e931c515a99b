//! Decoding gallery images into Slint-displayable form.
//!
//! Decoding is CPU-bound and runs on rayon workers; only the cheap
//! `slint::Image` construction happens on the UI thread.

use crate::error::{AppError, Result};
use slint::{Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes the image at `path` to raw RGB8. Blocking; call from a worker
/// thread, never from the event loop.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .decode()?;

    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    Ok((rgb.into_raw(), width, height))
}

/// Decodes the image at `path` and downscales it to at most `max_edge`
/// pixels on the long edge, for the gallery tiles. Blocking.
pub fn load_thumbnail_blocking(path: &Path, max_edge: u32) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .decode()?;

    let rgb = img.thumbnail(max_edge, max_edge).to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    Ok((rgb.into_raw(), width, height))
}

/// Wraps raw RGB8 data in a `slint::Image`. Must run on the UI thread.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    slint::Image::from_rgb8(buffer)
}
