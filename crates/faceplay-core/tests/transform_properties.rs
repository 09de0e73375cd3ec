//! Property checks over sampled color grids and synthetic frames.
//!
//! Run with: `cargo test -p faceplay-core`

use faceplay_core::color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr};
use faceplay_core::ops::{
    blur3x3, make_gray, make_hsv_view, pixelate, threshold_blue, threshold_cr_gray,
    threshold_green, threshold_red, threshold_v_gray,
};
use faceplay_core::{RasterBuffer, Result};
use palette::{FromColor, Hsv, Srgb};

/// Sample step across each 0–255 axis (0, 5, ..., 255).
const STEP: usize = 5;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn color_grid() -> impl Iterator<Item = [u8; 3]> {
    (0..=255u8).step_by(STEP).flat_map(|r| {
        (0..=255u8)
            .step_by(STEP)
            .flat_map(move |g| (0..=255u8).step_by(STEP).map(move |b| [r, g, b]))
    })
}

/// A 64×48 frame with gradients in every channel and a few hard edges.
fn test_frame() -> RasterBuffer {
    RasterBuffer::from_fn(64, 48, |x, y| {
        let r = (x * 4) as u8;
        let g = (y * 5) as u8;
        let b = if (x / 8 + y / 8) % 2 == 0 { 255 } else { ((x + y) * 2) as u8 };
        [r, g, b, 255]
    })
}

/// One row of pure red, r = 0..=255.
fn red_ramp() -> RasterBuffer {
    RasterBuffer::from_fn(256, 1, |x, _| [x as u8, 0, 0, 255])
}

/// Whether each pixel of a threshold output is "on" (any non-zero channel).
fn mask(img: &RasterBuffer) -> Vec<bool> {
    img.pixels().iter().map(|p| (p[0] | p[1] | p[2]) != 0).collect()
}

type ThresholdFn = fn(&RasterBuffer, i32) -> Result<RasterBuffer>;

fn all_thresholds() -> [(&'static str, ThresholdFn); 5] {
    [
        ("red", threshold_red),
        ("green", threshold_green),
        ("blue", threshold_blue),
        ("cr", threshold_cr_gray),
        ("v", threshold_v_gray),
    ]
}

#[test]
fn test_hsv_round_trip_within_one() {
    for [r, g, b] in color_grid() {
        let hsv = rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        let back = hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        for (orig, out) in [r, g, b].iter().zip(back) {
            assert!(
                (*orig as f64 - out).abs() <= 1.0,
                "round trip of ({r}, {g}, {b}) gave {back:?}"
            );
        }
    }
}

#[test]
fn test_hsv_matches_palette() {
    for [r, g, b] in color_grid() {
        let ours = rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        let theirs: Hsv = Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());

        assert!((ours.v as f32 - theirs.value).abs() < 1e-4);
        assert!((ours.s as f32 - theirs.saturation).abs() < 1e-4);
        if ours.s > 0.0 {
            let diff = (ours.h as f32 - theirs.hue.into_positive_degrees()).abs();
            let diff = diff.min(360.0 - diff);
            assert!(diff < 1e-2, "hue of ({r}, {g}, {b}): {} vs {diff}", ours.h);
        }
    }
}

#[test]
fn test_hue_stays_in_degree_range() {
    for [r, g, b] in color_grid() {
        let hsv = rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        assert!((0.0..360.0).contains(&hsv.h), "hue {} for ({r}, {g}, {b})", hsv.h);
    }
}

#[test]
fn test_ycbcr_components_stay_in_range() {
    for [r, g, b] in color_grid() {
        let c = rgb_to_ycbcr(r as f64, g as f64, b as f64);
        for v in [c.y, c.cb, c.cr] {
            assert!((0.0..=255.0).contains(&v), "({r}, {g}, {b}) → {c:?}");
        }
    }
}

#[test]
fn test_gray_channels_equal() {
    let out = make_gray(&test_frame());
    assert!(out.pixels().iter().all(|p| p[0] == p[1] && p[1] == p[2] && p[3] == 255));
}

#[test]
fn test_thresholds_are_monotonic() {
    let img = test_frame();
    for (name, f) in all_thresholds() {
        let mut previous = mask(&f(&img, 0).unwrap());
        for t in (8..=255).step_by(8) {
            let current = mask(&f(&img, t).unwrap());
            for (i, (&prev, &cur)) in previous.iter().zip(&current).enumerate() {
                assert!(!cur || prev, "{name}: pixel {i} turned on when raising T to {t}");
            }
            previous = current;
        }
    }
}

#[test]
fn test_threshold_zero_passes_everything() {
    let img = test_frame();
    for (name, f) in all_thresholds() {
        let on = mask(&f(&img, 0).unwrap());
        assert!(on.iter().all(|&p| p), "{name} at T = 0 left pixels black");
    }
}

#[test]
fn test_threshold_max_passes_only_full_values() {
    let img = test_frame();
    let checks: [(ThresholdFn, fn([u8; 4]) -> bool); 5] = [
        (threshold_red, |p| p[0] == 255),
        (threshold_green, |p| p[1] == 255),
        (threshold_blue, |p| p[2] == 255),
        (threshold_cr_gray, |p| {
            rgb_to_ycbcr(p[0] as f64, p[1] as f64, p[2] as f64).cr == 255.0
        }),
        (threshold_v_gray, |p| p[0].max(p[1]).max(p[2]) == 255),
    ];
    for img in [img, red_ramp()] {
        for (f, expected) in checks {
            let out = f(&img, 255).unwrap();
            for (src, on) in img.pixels().iter().zip(mask(&out)) {
                assert_eq!(on, expected(*src), "pixel {src:?}");
            }
        }
    }
}

#[test]
fn test_cr_threshold_max_compares_clamped_cr() {
    // Cr = 128 + r/2 on a pure red ramp: 254 lands on 255.0 exactly and
    // 255 overshoots to 255.5 before clamping.
    let img = red_ramp();
    let out = threshold_cr_gray(&img, 255).unwrap();
    let passing: Vec<u32> = (0..img.width())
        .filter(|&x| out.pixel(x, 0) == WHITE)
        .collect();
    assert_eq!(passing, vec![254, 255]);
}

#[test]
fn test_gray_threshold_outputs_are_binary() {
    let img = test_frame();
    for out in [threshold_cr_gray(&img, 140).unwrap(), threshold_v_gray(&img, 140).unwrap()] {
        assert!(out.pixels().iter().all(|&p| p == WHITE || p == [0, 0, 0, 255]));
    }
}

#[test]
fn test_blur_of_constant_frame_is_unchanged() {
    for color in [[0, 0, 0, 255], [255, 255, 255, 255], [17, 128, 240, 255]] {
        let img = RasterBuffer::filled(9, 7, color);
        assert_eq!(blur3x3(&img), img);
    }
}

#[test]
fn test_pixelate_checkerboard_tile() {
    // 10×10 with block 4: the top-left 4×4 tile is an exact half/half
    // checkerboard, so its mean is 127.5 → 128.
    let img = RasterBuffer::from_fn(10, 10, |x, y| {
        if (x + y) % 2 == 0 { WHITE } else { [0, 0, 0, 255] }
    });
    let out = pixelate(&img, 4).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), [128, 128, 128, 255]);
        }
    }
}

#[test]
fn test_pixelate_tiles_are_uniform() {
    let img = test_frame();
    let block = 5;
    let out = pixelate(&img, block).unwrap();
    for y in 0..out.height() {
        for x in 0..out.width() {
            let anchor = out.pixel(x - x % block, y - y % block);
            assert_eq!(out.pixel(x, y), anchor, "({x}, {y})");
        }
    }
}

#[test]
fn test_hsv_view_preserves_value() {
    let img = test_frame();
    let out = make_hsv_view(&img);
    for (src, dst) in img.pixels().iter().zip(out.pixels()) {
        let v_src = src[0].max(src[1]).max(src[2]);
        let v_dst = dst[0].max(dst[1]).max(dst[2]);
        assert!(v_src.abs_diff(v_dst) <= 1, "{src:?} → {dst:?}");
    }
}
