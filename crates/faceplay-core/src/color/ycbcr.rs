//! RGB → YCbCr (ITU-R BT.601, full range, JPEG/JFIF offsets).
//!
//! ```text
//! Y  =       0.299    R + 0.587    G + 0.114    B
//! Cb = 128 − 0.168736 R − 0.331264 G + 0.5      B
//! Cr = 128 + 0.5      R − 0.418688 G − 0.081312 B
//! ```

/// Luma and chroma, each clamped to `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCr {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

/// Convert an RGB triple in 0–255 space.
pub fn rgb_to_ycbcr(r: f64, g: f64, b: f64) -> YCbCr {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b;
    let cr = 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b;

    YCbCr {
        y: y.clamp(0.0, 255.0),
        cb: cb.clamp(0.0, 255.0),
        cr: cr.clamp(0.0, 255.0),
    }
}
