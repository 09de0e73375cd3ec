//! Live face selection from raw detector output.
//!
//! The detector itself is external; it hands back candidate rectangles with
//! a confidence score. The largest confident candidate is the live face.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::image::Rect;

/// Candidates must score strictly above this to be considered.
pub const MIN_FACE_SCORE: f32 = 3.0;

/// Width of the frame the detector runs on.
pub const DETECTION_WIDTH: u32 = 160;
/// Height of the frame the detector runs on.
pub const DETECTION_HEIGHT: u32 = 120;

/// One detector hit: `{x, y, w, h, score}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceCandidate {
    #[serde(flatten)]
    pub rect: Rect,
    pub score: f32,
}

impl FaceCandidate {
    pub const fn new(x: i32, y: i32, w: u32, h: u32, score: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            score,
        }
    }
}

/// Pick the largest-area candidate whose score exceeds [`MIN_FACE_SCORE`].
///
/// Ties on area keep the earlier candidate. A NaN score never qualifies.
/// Returns `None` when nothing qualifies.
pub fn select_live_face(candidates: &[FaceCandidate]) -> Option<Rect> {
    let mut best: Option<Rect> = None;
    for candidate in candidates {
        if candidate.score.partial_cmp(&MIN_FACE_SCORE) != Some(Ordering::Greater) {
            trace!(?candidate, "face candidate below score threshold");
            continue;
        }
        if best.is_none_or(|b| candidate.rect.area() > b.area()) {
            best = Some(candidate.rect);
        }
    }
    best
}
