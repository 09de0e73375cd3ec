//! Diagnostic color-space views packed back into RGB for display.

use crate::color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr, to_channel};
use crate::image::{OPAQUE, RasterBuffer};

/// Pack `(Y, Cb, Cr)` into `(R, G, B)`.
///
/// Not a real color: a neutral pixel shows as `(v, 128, 128)`.
pub fn make_ycbcr_view(img: &RasterBuffer) -> RasterBuffer {
    img.map_pixels(|px| {
        let c = rgb_to_ycbcr(px[0] as f64, px[1] as f64, px[2] as f64);
        [to_channel(c.y), to_channel(c.cb), to_channel(c.cr), OPAQUE]
    })
}

/// Fully saturated hue map that keeps the brightness structure.
///
/// Each pixel is converted to HSV and rebuilt with `s = 1` and its
/// original hue and value.
pub fn make_hsv_view(img: &RasterBuffer) -> RasterBuffer {
    img.map_pixels(|px| {
        let hsv = rgb_to_hsv(
            px[0] as f64 / 255.0,
            px[1] as f64 / 255.0,
            px[2] as f64 / 255.0,
        );
        let [r, g, b] = hsv_to_rgb(hsv.h, 1.0, hsv.v);
        [to_channel(r), to_channel(g), to_channel(b), OPAQUE]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ycbcr_view_of_gray_is_centered() {
        let img = RasterBuffer::filled(2, 2, [100, 100, 100, 255]);
        let out = make_ycbcr_view(&img);
        assert!(out.pixels().iter().all(|&p| p == [100, 128, 128, 255]));
    }

    #[test]
    fn test_ycbcr_view_of_red() {
        let img = RasterBuffer::filled(1, 1, [255, 0, 0, 0]);
        // Y = 76.245, Cb = 84.97, Cr = 255.5 → clamped.
        assert_eq!(make_ycbcr_view(&img).pixel(0, 0), [76, 85, 255, 255]);
    }

    #[test]
    fn test_hsv_view_saturates_hue() {
        let img = RasterBuffer::from_pixels(2, 1, vec![[200, 150, 150, 255], [60, 90, 120, 255]]).unwrap();
        let out = make_hsv_view(&img);
        // Pinkish red → pure red at the same value.
        assert_eq!(out.pixel(0, 0), [200, 0, 0, 255]);
        // Hue 210° at v = 120: (0, 60, 120).
        assert_eq!(out.pixel(1, 0), [0, 60, 120, 255]);
    }

    #[test]
    fn test_hsv_view_of_gray_is_red_at_same_value() {
        // Achromatic hue is 0°, so forcing s = 1 paints it red.
        let img = RasterBuffer::filled(1, 1, [80, 80, 80, 255]);
        assert_eq!(make_hsv_view(&img).pixel(0, 0), [80, 0, 0, 255]);
    }
}
