//! Image loading and saving for the demo application.

use std::path::Path;

use faceplay_core::RasterBuffer;
use image::imageops::FilterType;

/// Load an image from disk and resize it to the detection frame size.
///
/// Supports common formats via the `image` crate (PNG, JPEG, BMP, ...).
pub fn load_frame(path: &Path, width: u32, height: u32) -> Result<RasterBuffer, ImageIoError> {
    let img = image::open(path).map_err(ImageIoError::Decode)?;
    let rgba = img.to_rgba8();
    let resized = if rgba.dimensions() == (width, height) {
        rgba
    } else {
        image::imageops::resize(&rgba, width, height, FilterType::Triangle)
    };
    Ok(RasterBuffer::from(&resized))
}

/// Write a raster as PNG, creating parent directories as needed.
pub fn save_png(raster: &RasterBuffer, path: &Path) -> Result<(), ImageIoError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let rgba: image::RgbaImage = raster.into();
    rgba.save_with_format(path, image::ImageFormat::Png)
        .map_err(ImageIoError::Encode)
}

/// Errors that can occur while reading or writing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageIoError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
