//! Neighborhood convolution with edge replication.
//!
//! Out-of-range taps are clamped to the nearest valid row/column, so border
//! pixels only ever see real image content (no zero padding, no wrap).
//!
//! # Complexity
//! O(width × height × size²).

use crate::color::to_channel;
use crate::error::{PixelError, Result};
use crate::image::{OPAQUE, RasterBuffer};

/// A square, odd-sized convolution kernel, weights in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a kernel from `size × size` weights. `size` must be odd.
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(PixelError::InvalidArgument(format!(
                "kernel size must be odd and positive, got {size}"
            )));
        }
        if weights.len() != size * size {
            return Err(PixelError::InvalidArgument(format!(
                "{size}x{size} kernel needs {} weights, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    /// Uniform mean filter: every weight is `1 / size²`.
    pub fn box_mean(size: usize) -> Result<Self> {
        let taps = size * size;
        Self::new(size, vec![1.0 / taps as f64; taps])
    }

    /// The 3×3 box blur kernel.
    pub fn box3() -> Self {
        Self {
            size: 3,
            weights: vec![1.0 / 9.0; 9],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Convolve the color channels of `img` with `kernel`. Alpha is forced opaque.
pub fn convolve(img: &RasterBuffer, kernel: &Kernel) -> RasterBuffer {
    if img.is_empty() {
        return img.clone();
    }

    let off = (kernel.size / 2) as i64;

    RasterBuffer::from_fn(img.width(), img.height(), |x, y| {
        let mut sum = [0.0_f64; 3];

        for j in 0..kernel.size {
            for i in 0..kernel.size {
                let px = img.pixel_clamped(x as i64 + i as i64 - off, y as i64 + j as i64 - off);
                let wt = kernel.weights[j * kernel.size + i];
                for c in 0..3 {
                    sum[c] += px[c] as f64 * wt;
                }
            }
        }

        [to_channel(sum[0]), to_channel(sum[1]), to_channel(sum[2]), OPAQUE]
    })
}

/// 3×3 box blur: mean of the edge-clamped neighborhood.
pub fn blur3x3(img: &RasterBuffer) -> RasterBuffer {
    convolve(img, &Kernel::box3())
}
