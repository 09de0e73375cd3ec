//! Region crop and overlay, used to filter only the face area of a frame.

use tracing::trace;

use crate::error::{PixelError, Result};
use crate::image::{RasterBuffer, Rect};

/// Copy `rect` out of `img` into a new raster.
///
/// The rectangle is clipped to the image first; an empty intersection is
/// an invalid argument. Source alpha is preserved.
pub fn crop_rect(img: &RasterBuffer, rect: Rect) -> Result<RasterBuffer> {
    let clipped = rect.clip(img.width(), img.height()).ok_or_else(|| {
        PixelError::InvalidArgument(format!(
            "crop region {rect:?} does not intersect {}x{} image",
            img.width(),
            img.height()
        ))
    })?;

    if clipped != rect {
        trace!(?rect, ?clipped, "crop region clipped to image bounds");
    }

    let (ox, oy) = (clipped.x as u32, clipped.y as u32);
    Ok(RasterBuffer::from_fn(clipped.w, clipped.h, |x, y| {
        img.pixel(ox + x, oy + y)
    }))
}

/// Return a copy of `img` with `patch` written at `(x, y)`.
///
/// The patch must lie entirely inside `img`; nothing is stretched or
/// truncated.
pub fn overlay(img: &RasterBuffer, patch: &RasterBuffer, x: i32, y: i32) -> Result<RasterBuffer> {
    let fits = x >= 0
        && y >= 0
        && x as u64 + patch.width() as u64 <= img.width() as u64
        && y as u64 + patch.height() as u64 <= img.height() as u64;
    if !fits {
        return Err(PixelError::RegionOutOfBounds {
            x: x as i64,
            y: y as i64,
            width: patch.width(),
            height: patch.height(),
            target_width: img.width(),
            target_height: img.height(),
        });
    }

    let mut out = img.clone();
    for py in 0..patch.height() {
        for px in 0..patch.width() {
            out.set_pixel(x as u32 + px, y as u32 + py, patch.pixel(px, py));
        }
    }
    Ok(out)
}
