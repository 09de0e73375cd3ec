//! Color-space conversions: YCbCr (BT.601 full range) and HSV.

pub mod hsv;
pub mod ycbcr;

pub use hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use ycbcr::{YCbCr, rgb_to_ycbcr};

/// Quantize a channel value to a byte.
///
/// Rounds half to even, then saturates into `[0, 255]`. Out-of-range
/// values are expected here (conversion math overshoots), not errors.
pub fn to_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_channel_rounds_half_to_even() {
        assert_eq!(to_channel(127.5), 128);
        assert_eq!(to_channel(128.5), 128);
        assert_eq!(to_channel(84.333), 84);
        assert_eq!(to_channel(84.7), 85);
    }

    #[test]
    fn test_to_channel_saturates() {
        assert_eq!(to_channel(-3.0), 0);
        assert_eq!(to_channel(306.0), 255);
        assert_eq!(to_channel(f64::NAN), 0);
    }
}
