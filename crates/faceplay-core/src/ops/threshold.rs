//! Binary thresholds over RGB channels, YCbCr chroma and HSV value.
//!
//! A pixel passes when its measured value is `>= T`. Raising `T` can only
//! shrink the passing set: `T = 0` passes everything, `T = 255` passes only
//! pixels whose value is exactly 255 (or above, for Cr, which may reach
//! 255.5 before clamping).

use serde::{Deserialize, Serialize};

use crate::color::{rgb_to_hsv, rgb_to_ycbcr};
use crate::error::{PixelError, Result};
use crate::image::{Channel, OPAQUE, RasterBuffer};

const BLACK: [u8; 4] = [0, 0, 0, OPAQUE];
const WHITE: [u8; 4] = [255, 255, 255, OPAQUE];

/// A validated threshold level in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Threshold(u8);

impl Threshold {
    /// Reject levels outside `[0, 255]`; they are never clamped.
    pub fn new(level: i32) -> Result<Self> {
        u8::try_from(level).map(Self).map_err(|_| {
            PixelError::InvalidArgument(format!("threshold {level} outside [0, 255]"))
        })
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    fn passes(self, value: f64) -> bool {
        value >= self.0 as f64
    }
}

impl TryFrom<i32> for Threshold {
    type Error = PixelError;

    fn try_from(level: i32) -> Result<Self> {
        Self::new(level)
    }
}

fn white_or_black(pass: bool) -> [u8; 4] {
    if pass { WHITE } else { BLACK }
}

/// Tinted binary threshold on one channel: full intensity in that channel
/// where `channel >= t`, black elsewhere.
pub fn threshold_channel(img: &RasterBuffer, channel: Channel, t: i32) -> Result<RasterBuffer> {
    let t = Threshold::new(t)?;
    let c = channel.index();
    Ok(img.map_pixels(|px| {
        let mut out = BLACK;
        if t.passes(px[c] as f64) {
            out[c] = 255;
        }
        out
    }))
}

pub fn threshold_red(img: &RasterBuffer, t: i32) -> Result<RasterBuffer> {
    threshold_channel(img, Channel::Red, t)
}

pub fn threshold_green(img: &RasterBuffer, t: i32) -> Result<RasterBuffer> {
    threshold_channel(img, Channel::Green, t)
}

pub fn threshold_blue(img: &RasterBuffer, t: i32) -> Result<RasterBuffer> {
    threshold_channel(img, Channel::Blue, t)
}

/// White where the Cr (red-difference chroma) component is `>= t`.
pub fn threshold_cr_gray(img: &RasterBuffer, t: i32) -> Result<RasterBuffer> {
    let t = Threshold::new(t)?;
    Ok(img.map_pixels(|px| {
        let c = rgb_to_ycbcr(px[0] as f64, px[1] as f64, px[2] as f64);
        white_or_black(t.passes(c.cr))
    }))
}

/// White where the HSV value, on the 0–255 scale, is `>= t`.
///
/// The scaled value is rounded so integer levels compare exactly.
pub fn threshold_v_gray(img: &RasterBuffer, t: i32) -> Result<RasterBuffer> {
    let t = Threshold::new(t)?;
    Ok(img.map_pixels(|px| {
        let hsv = rgb_to_hsv(
            px[0] as f64 / 255.0,
            px[1] as f64 / 255.0,
            px[2] as f64 / 255.0,
        );
        white_or_black(t.passes((hsv.v * 255.0).round()))
    }))
}
