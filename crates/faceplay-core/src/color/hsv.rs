//! RGB ↔ HSV conversion.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and value in `[0, 1]`.
//!
//! The forward conversion uses the six-sector form where the sector is
//! picked from which channel is the maximum and which is the minimum:
//!
//! ```text
//! r' = (max − r) / Δ,  g' = (max − g) / Δ,  b' = (max − b) / Δ
//!
//! r = max, g = min → h = 5 + b'
//! r = max          → h = 1 − g'
//! g = max, b = min → h = 1 + r'
//! g = max          → h = 3 − b'
//! b = max, r = min → h = 3 + g'
//! otherwise        → h = 5 − r'
//!
//! h ×= 60
//! ```
//!
//! Branches are tested in exactly this order. When two channels tie for
//! the maximum the earlier branch wins, which fixes the hue reported at
//! exact ties (e.g. `r = g = max` lands in the `1 − g'` branch and yields
//! 60°).

/// Hue in degrees, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Convert normalized RGB (`[0, 1]` per channel) to HSV.
///
/// Achromatic input (`max == min`) reports `h = 0`; black reports `s = 0`.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let mut h = 0.0;
    if delta != 0.0 {
        let rp = (max - r) / delta;
        let gp = (max - g) / delta;
        let bp = (max - b) / delta;

        h = if r == max && g == min {
            5.0 + bp
        } else if r == max {
            1.0 - gp
        } else if g == max && b == min {
            1.0 + rp
        } else if g == max {
            3.0 - bp
        } else if r == min {
            3.0 + gp
        } else {
            5.0 - rp
        };

        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }
        if h >= 360.0 {
            h -= 360.0;
        }
    }

    Hsv { h, s, v: max }
}

/// Convert HSV back to RGB, scaled to 0–255 (unrounded, may overshoot by
/// floating-point error).
///
/// ```text
/// c = v × s
/// x = c × (1 − |(h / 60) mod 2 − 1|)
/// m = v − c
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (rp, gp, bp) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [(rp + m) * 255.0, (gp + m) * 255.0, (bp + m) * 255.0]
}
