//! Clamped linear remapping from face box geometry to volume and rate.
//!
//! ```text
//! volume = map(w, [20, 160] → [0.05, 0.9])   wider face → louder
//! rate   = map(y, [0, 120]  → [1.4, 0.7])    higher face → faster
//! ```
//!
//! Remapping is instantaneous; there is no smoothing between frames.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::image::Rect;

/// Face width range (detection pixels) mapped onto the volume range.
pub const WIDTH_RANGE: RangeInclusive<f32> = 20.0..=160.0;
/// Output volume range.
pub const VOLUME_RANGE: RangeInclusive<f32> = 0.05..=0.9;
/// Face top edge range (detection pixels) mapped onto the rate range.
pub const Y_RANGE: RangeInclusive<f32> = 0.0..=120.0;
/// Output rate range, reversed: the top of the frame is fastest.
pub const RATE_RANGE: RangeInclusive<f32> = 1.4..=0.7;

/// Per-frame playback controls. `rate` is `None` when the sound is muted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSignal {
    /// Volume in `[0, 1]`.
    pub volume: f32,
    /// Playback rate, strictly positive.
    pub rate: Option<f32>,
}

impl ControlSignal {
    /// Volume driven to zero, rate left alone.
    pub const fn silent() -> Self {
        Self {
            volume: 0.0,
            rate: None,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.volume == 0.0
    }
}

/// Linearly remap `value` from one range to another, clamped into the
/// target range whichever way it is oriented.
///
/// A degenerate source range maps everything to the target start.
pub fn linear_map(value: f32, from: RangeInclusive<f32>, to: RangeInclusive<f32>) -> f32 {
    let (a0, a1) = (*from.start(), *from.end());
    let (b0, b1) = (*to.start(), *to.end());
    if a1 == a0 {
        return b0;
    }

    let mapped = b0 + (value - a0) / (a1 - a0) * (b1 - b0);
    mapped.clamp(b0.min(b1), b0.max(b1))
}

/// Controls for the current frame.
///
/// Silent unless sound control is enabled and a live face is present.
pub fn map_face_to_control(face: Option<Rect>, enabled: bool) -> ControlSignal {
    match face {
        Some(face) if enabled => ControlSignal {
            volume: linear_map(face.w as f32, WIDTH_RANGE, VOLUME_RANGE),
            rate: Some(linear_map(face.y as f32, Y_RANGE, RATE_RANGE)),
        },
        _ => ControlSignal::silent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_linear_map_endpoints() {
        assert!((linear_map(20.0, WIDTH_RANGE, VOLUME_RANGE) - 0.05).abs() < EPSILON);
        assert!((linear_map(160.0, WIDTH_RANGE, VOLUME_RANGE) - 0.9).abs() < EPSILON);
        assert!((linear_map(90.0, WIDTH_RANGE, VOLUME_RANGE) - 0.475).abs() < EPSILON);
    }

    #[test]
    fn test_linear_map_clamps_reversed_range() {
        assert!((linear_map(-40.0, Y_RANGE, RATE_RANGE) - 1.4).abs() < EPSILON);
        assert!((linear_map(500.0, Y_RANGE, RATE_RANGE) - 0.7).abs() < EPSILON);
        assert!((linear_map(60.0, Y_RANGE, RATE_RANGE) - 1.05).abs() < EPSILON);
    }

    #[test]
    fn test_linear_map_degenerate_source() {
        assert_eq!(linear_map(3.0, 5.0..=5.0, 0.0..=1.0), 0.0);
    }

    #[test]
    fn test_face_maps_to_volume_and_rate() {
        let signal = map_face_to_control(Some(Rect::new(40, 0, 160, 100)), true);
        assert!((signal.volume - 0.9).abs() < EPSILON);
        assert!((signal.rate.unwrap() - 1.4).abs() < EPSILON);

        let signal = map_face_to_control(Some(Rect::new(40, 120, 10, 10)), true);
        assert!((signal.volume - 0.05).abs() < EPSILON);
        assert!((signal.rate.unwrap() - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_no_face_or_disabled_is_silent() {
        assert_eq!(map_face_to_control(None, true), ControlSignal::silent());
        let face = Some(Rect::new(10, 10, 80, 80));
        assert!(map_face_to_control(face, false).is_silent());
        assert_eq!(map_face_to_control(face, false).rate, None);
    }

    #[test]
    fn test_closer_face_is_louder() {
        let near = map_face_to_control(Some(Rect::new(0, 50, 120, 120)), true);
        let far = map_face_to_control(Some(Rect::new(0, 50, 40, 40)), true);
        assert!(near.volume > far.volume);
    }
}
