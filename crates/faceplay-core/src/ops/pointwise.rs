//! Grayscale and single-channel views.

use crate::color::to_channel;
use crate::image::{Channel, OPAQUE, RasterBuffer};

/// Brightness boost applied by [`make_gray_plus20`].
const BRIGHTEN: f64 = 0.2;

/// Equal-weight mean of the three color samples.
pub(crate) fn mean_rgb(px: [u8; 4]) -> f64 {
    (px[0] as f64 + px[1] as f64 + px[2] as f64) / 3.0
}

fn gray(v: u8) -> [u8; 4] {
    [v, v, v, OPAQUE]
}

/// Equal-weight grayscale: `v = (r + g + b) / 3`.
pub fn make_gray(img: &RasterBuffer) -> RasterBuffer {
    img.map_pixels(|px| gray(to_channel(mean_rgb(px))))
}

/// Grayscale brightened by 20% and saturated at white.
pub fn make_gray_plus20(img: &RasterBuffer) -> RasterBuffer {
    img.map_pixels(|px| {
        let v = mean_rgb(px);
        gray(to_channel((v + v * BRIGHTEN).min(255.0)))
    })
}

/// Keep one channel, zero the other two.
pub fn isolate_channel(img: &RasterBuffer, channel: Channel) -> RasterBuffer {
    let c = channel.index();
    img.map_pixels(|px| {
        let mut out = [0, 0, 0, OPAQUE];
        out[c] = px[c];
        out
    })
}

/// The three isolated-channel views of one image.
#[derive(Debug, Clone)]
pub struct ChannelSplit {
    pub red: RasterBuffer,
    pub green: RasterBuffer,
    pub blue: RasterBuffer,
}

/// Split an image into its red, green and blue views.
pub fn split_into_rgb_channels(img: &RasterBuffer) -> ChannelSplit {
    ChannelSplit {
        red: isolate_channel(img, Channel::Red),
        green: isolate_channel(img, Channel::Green),
        blue: isolate_channel(img, Channel::Blue),
    }
}
