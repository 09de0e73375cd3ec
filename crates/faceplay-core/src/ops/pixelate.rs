//! Block pixelation: each tile is replaced by its mean gray level.
//!
//! Tiles start at multiples of the block size from the origin; the last
//! row and column of tiles are clipped to the image instead of padded.

use crate::color::to_channel;
use crate::error::{PixelError, Result};
use crate::image::{OPAQUE, RasterBuffer};
use crate::ops::pointwise::mean_rgb;

/// Block size used when the caller has no preference.
pub const DEFAULT_BLOCK_SIZE: u32 = 5;

/// Replace every `block × block` tile with the mean of `(r + g + b) / 3`
/// over the tile's pixels.
pub fn pixelate(img: &RasterBuffer, block: u32) -> Result<RasterBuffer> {
    if block == 0 {
        return Err(PixelError::InvalidArgument("block size must be positive".into()));
    }

    let (w, h) = img.dimensions();
    let mut out = RasterBuffer::new(w, h);

    for by in (0..h).step_by(block as usize) {
        let y_end = by.saturating_add(block).min(h);
        for bx in (0..w).step_by(block as usize) {
            let x_end = bx.saturating_add(block).min(w);

            let mut sum = 0.0_f64;
            let mut count = 0u32;
            for y in by..y_end {
                for x in bx..x_end {
                    sum += mean_rgb(img.pixel(x, y));
                    count += 1;
                }
            }

            let avg = to_channel(sum / count as f64);
            for y in by..y_end {
                for x in bx..x_end {
                    out.set_pixel(x, y, [avg, avg, avg, OPAQUE]);
                }
            }
        }
    }

    Ok(out)
}
