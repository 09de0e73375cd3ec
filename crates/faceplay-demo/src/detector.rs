//! Face detector seam.
//!
//! The detector is an external black box: it returns candidate rectangles
//! with a confidence score. The shipped implementation replays detections
//! recorded as JSON, either one list for every frame or one list per frame.

use std::path::Path;

use faceplay_core::{FaceCandidate, RasterBuffer};
use serde::Deserialize;

/// Something that finds faces in a detection-sized frame.
pub trait FaceDetector {
    fn detect(&mut self, frame: &RasterBuffer) -> Result<Vec<FaceCandidate>, DetectorError>;
}

/// Errors from loading or running a detector.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed detections file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Script {
    PerFrame(Vec<Vec<FaceCandidate>>),
    Fixed(Vec<FaceCandidate>),
}

/// Replays recorded detector output.
///
/// Past the end of a per-frame script the last entry repeats.
#[derive(Debug, Default)]
pub struct ScriptedDetector {
    frames: Vec<Vec<FaceCandidate>>,
    cursor: usize,
}

impl ScriptedDetector {
    pub fn from_json(json: &str) -> Result<Self, DetectorError> {
        let frames = match serde_json::from_str(json)? {
            Script::PerFrame(frames) => frames,
            Script::Fixed(candidates) => vec![candidates],
        };
        Ok(Self { frames, cursor: 0 })
    }

    pub fn from_file(path: &Path) -> Result<Self, DetectorError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &RasterBuffer) -> Result<Vec<FaceCandidate>, DetectorError> {
        let Some(last) = self.frames.len().checked_sub(1) else {
            return Ok(Vec::new());
        };
        let candidates = self.frames[self.cursor.min(last)].clone();
        self.cursor += 1;
        Ok(candidates)
    }
}
