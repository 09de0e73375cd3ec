//! Tile composition. Turns the current [`AppState`] into the set of
//! rasters the display grid would show.

use faceplay_core::ops::{
    blur3x3, crop_rect, make_gray, make_gray_plus20, make_hsv_view, make_ycbcr_view, overlay,
    pixelate, split_into_rgb_channels, threshold_blue, threshold_cr_gray, threshold_green,
    threshold_red, threshold_v_gray,
};
use faceplay_core::{RasterBuffer, Rect, Result};
use tracing::debug;

use crate::state::{AppState, FaceMode};

/// Outline color of the live face box.
const LIVE_BOX: [u8; 4] = [0, 255, 0, 255];
/// Outline color of the frozen face box.
const FROZEN_BOX: [u8; 4] = [255, 0, 0, 255];

/// A named raster ready for display or export.
#[derive(Debug, Clone)]
pub struct Tile {
    pub name: &'static str,
    pub image: RasterBuffer,
}

impl Tile {
    fn new(name: &'static str, image: RasterBuffer) -> Self {
        Self { name, image }
    }
}

/// The live frame with the live face outlined.
pub fn live_tile(frame: &RasterBuffer, live_face: Option<Rect>) -> Tile {
    let image = match live_face {
        Some(face) => outline(frame, face, LIVE_BOX),
        None => frame.clone(),
    };
    Tile::new("live", image)
}

/// Every snapshot tile, in grid order. Empty until a snapshot exists.
pub fn snapshot_tiles(state: &AppState, block_size: u32) -> Result<Vec<Tile>> {
    let Some(src) = state.snapshot.as_ref() else {
        return Ok(Vec::new());
    };
    let t = state.thresholds;
    let channels = split_into_rgb_channels(src);

    Ok(vec![
        Tile::new("gray_plus20", make_gray_plus20(src)),
        Tile::new("red", channels.red),
        Tile::new("green", channels.green),
        Tile::new("blue", channels.blue),
        Tile::new("threshold_red", threshold_red(src, t.red)?),
        Tile::new("threshold_green", threshold_green(src, t.green)?),
        Tile::new("threshold_blue", threshold_blue(src, t.blue)?),
        Tile::new("snapshot", src.clone()),
        Tile::new("ycbcr", make_ycbcr_view(src)),
        Tile::new("hsv", make_hsv_view(src)),
        Tile::new("threshold_cr", threshold_cr_gray(src, t.cr)?),
        Tile::new("threshold_v", threshold_v_gray(src, t.v)?),
        Tile::new("face", face_tile(src, state.frozen_face, state.face_mode, block_size)?),
    ])
}

/// The snapshot with the frozen face region filtered by `mode` and outlined.
pub fn face_tile(
    snapshot: &RasterBuffer,
    frozen_face: Option<Rect>,
    mode: FaceMode,
    block_size: u32,
) -> Result<RasterBuffer> {
    let Some(face) = frozen_face else {
        return Ok(snapshot.clone());
    };
    let Some(region) = face.clip(snapshot.width(), snapshot.height()) else {
        debug!(?face, "frozen face lies outside the snapshot");
        return Ok(snapshot.clone());
    };

    let roi = crop_rect(snapshot, region)?;
    let replacement = match mode {
        FaceMode::Box => None,
        FaceMode::Gray => Some(make_gray(&roi)),
        FaceMode::Blur => Some(blur3x3(&roi)),
        FaceMode::Hsv => Some(make_hsv_view(&roi)),
        FaceMode::Pixelate => Some(pixelate(&roi, block_size)?),
    };

    let composed = match replacement {
        Some(patch) => {
            debug!(%mode, ?region, "replacing face region");
            overlay(snapshot, &patch, region.x, region.y)?
        }
        None => snapshot.clone(),
    };
    Ok(outline(&composed, region, FROZEN_BOX))
}

/// Draw a one-pixel outline of `rect`, clipped to the image.
fn outline(img: &RasterBuffer, rect: Rect, color: [u8; 4]) -> RasterBuffer {
    let mut out = img.clone();
    let Some(r) = rect.clip(img.width(), img.height()) else {
        return out;
    };
    let (x0, y0) = (r.x as u32, r.y as u32);
    let (x1, y1) = (x0 + r.w - 1, y0 + r.h - 1);
    for x in x0..=x1 {
        out.set_pixel(x, y0, color);
        out.set_pixel(x, y1, color);
    }
    for y in y0..=y1 {
        out.set_pixel(x0, y, color);
        out.set_pixel(x1, y, color);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceplay_core::ops::DEFAULT_BLOCK_SIZE;

    fn frame() -> RasterBuffer {
        RasterBuffer::from_fn(20, 16, |x, y| [x as u8 * 12, y as u8 * 15, 100, 255])
    }

    #[test]
    fn test_no_snapshot_no_tiles() {
        let state = AppState::default();
        assert!(snapshot_tiles(&state, DEFAULT_BLOCK_SIZE).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_tiles_share_dimensions() {
        let mut state = AppState::default();
        state.take_snapshot(&frame());
        let tiles = snapshot_tiles(&state, DEFAULT_BLOCK_SIZE).unwrap();
        assert_eq!(tiles.len(), 13);
        assert!(tiles.iter().all(|t| t.image.dimensions() == (20, 16)));
        assert_eq!(tiles.first().map(|t| t.name), Some("gray_plus20"));
        assert_eq!(tiles.last().map(|t| t.name), Some("face"));
    }

    #[test]
    fn test_invalid_threshold_surfaces() {
        let mut state = AppState::default();
        state.thresholds.v = 300;
        state.take_snapshot(&frame());
        assert!(snapshot_tiles(&state, DEFAULT_BLOCK_SIZE).is_err());
    }

    #[test]
    fn test_face_tile_only_touches_region() {
        let src = frame();
        let face = Rect::new(4, 4, 8, 6);
        let out = face_tile(&src, Some(face), FaceMode::Gray, DEFAULT_BLOCK_SIZE).unwrap();

        // Outside the box: untouched.
        assert_eq!(out.pixel(0, 0), src.pixel(0, 0));
        assert_eq!(out.pixel(19, 15), src.pixel(19, 15));
        // Border: outlined.
        assert_eq!(out.pixel(4, 4), FROZEN_BOX);
        assert_eq!(out.pixel(11, 9), FROZEN_BOX);
        // Interior: gray.
        let p = out.pixel(6, 6);
        assert!(p[0] == p[1] && p[1] == p[2]);
    }

    #[test]
    fn test_box_mode_only_outlines() {
        let src = frame();
        let face = Rect::new(2, 2, 5, 5);
        let out = face_tile(&src, Some(face), FaceMode::Box, DEFAULT_BLOCK_SIZE).unwrap();
        assert_eq!(out.pixel(4, 4), src.pixel(4, 4));
        assert_eq!(out.pixel(2, 2), FROZEN_BOX);
    }

    #[test]
    fn test_face_tile_without_face_is_snapshot() {
        let src = frame();
        assert_eq!(face_tile(&src, None, FaceMode::Blur, DEFAULT_BLOCK_SIZE).unwrap(), src);
        let off = Some(Rect::new(100, 100, 5, 5));
        assert_eq!(face_tile(&src, off, FaceMode::Blur, DEFAULT_BLOCK_SIZE).unwrap(), src);
    }

    #[test]
    fn test_live_tile_outlines_face() {
        let src = frame();
        let tile = live_tile(&src, Some(Rect::new(1, 1, 3, 3)));
        assert_eq!(tile.image.pixel(1, 1), LIVE_BOX);
        assert_eq!(tile.image.pixel(2, 2), src.pixel(2, 2));
        assert_eq!(live_tile(&src, None).image, src);
    }
}
