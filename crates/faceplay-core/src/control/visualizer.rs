//! Bar heights for the face-to-sound visualizer tile.

use std::f32::consts::TAU;

/// Number of bars drawn in the tile.
pub const BAR_COUNT: usize = 14;
/// Amplitude used while the sound is off or no face is present.
pub const IDLE_AMPLITUDE: f32 = 0.05;
/// Phase advance per frame, in cycles.
const PHASE_PER_FRAME: f32 = 0.01;

/// Height of each bar for `frame`, in the same units as `max_height`.
///
/// ```text
/// t      = i / (BAR_COUNT − 1)
/// height = a × max_height × (0.3 + 0.7 × sin(2π (t + frame × 0.01)))
/// ```
///
/// `a` is the current volume when `active`, otherwise [`IDLE_AMPLITUDE`].
/// Heights can go negative on the trough of the wave; the renderer draws
/// them centered, so the sign only flips the bar around the midline.
pub fn bar_heights(volume: f32, active: bool, max_height: f32, frame: u64) -> [f32; BAR_COUNT] {
    let amplitude = if active { volume } else { IDLE_AMPLITUDE };
    let phase = (frame as f64 * PHASE_PER_FRAME as f64).fract() as f32;

    let mut heights = [0.0_f32; BAR_COUNT];
    for (i, h) in heights.iter_mut().enumerate() {
        let t = i as f32 / (BAR_COUNT - 1) as f32;
        *h = amplitude * max_height * (0.3 + 0.7 * (TAU * (t + phase)).sin());
    }
    heights
}
