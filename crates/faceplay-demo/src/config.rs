//! Application configuration for the demo.

use std::path::PathBuf;

use clap::ValueEnum;
use faceplay_core::detect::{DETECTION_HEIGHT, DETECTION_WIDTH};
use faceplay_core::ops::{DEFAULT_BLOCK_SIZE, Threshold};
use faceplay_core::{PixelError, Result};

use crate::state::{DEFAULT_THRESHOLD, FaceMode, Thresholds};

/// Default output directory for rendered tiles.
const DEFAULT_OUTPUT_DIR: &str = "faceplay-out";
/// Default number of frames to drive through the pipeline.
const DEFAULT_FRAMES: u32 = 30;
/// Default frame on which the snapshot is frozen.
const DEFAULT_SNAPSHOT_FRAME: u32 = 0;

/// Runtime configuration for the Faceplay demo.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the tile PNGs and run report are written to.
    pub output_dir: PathBuf,
    /// Frames are resized to this before detection and snapshotting.
    pub frame_width: u32,
    pub frame_height: u32,
    /// Number of frames to process.
    pub frames: u32,
    /// Frame index on which the snapshot key is pressed.
    pub snapshot_frame: u32,
    /// Initial slider values.
    pub thresholds: Thresholds,
    /// Block size for the pixelate face mode.
    pub block_size: u32,
    /// Initial face mode.
    pub face_mode: FaceMode,
    /// Whether sound control starts enabled.
    pub sound_on: bool,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

impl Default for AppConfig {
    fn default() -> Self {
        let threshold = |key: &str| env_parse(key).unwrap_or(DEFAULT_THRESHOLD);
        Self {
            output_dir: std::env::var_os("FACEPLAY_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            frame_width: env_parse("FACEPLAY_FRAME_WIDTH").unwrap_or(DETECTION_WIDTH),
            frame_height: env_parse("FACEPLAY_FRAME_HEIGHT").unwrap_or(DETECTION_HEIGHT),
            frames: env_parse("FACEPLAY_FRAMES").unwrap_or(DEFAULT_FRAMES),
            snapshot_frame: env_parse("FACEPLAY_SNAPSHOT_FRAME").unwrap_or(DEFAULT_SNAPSHOT_FRAME),
            thresholds: Thresholds {
                red: threshold("FACEPLAY_THRESHOLD_RED"),
                green: threshold("FACEPLAY_THRESHOLD_GREEN"),
                blue: threshold("FACEPLAY_THRESHOLD_BLUE"),
                cr: threshold("FACEPLAY_THRESHOLD_CR"),
                v: threshold("FACEPLAY_THRESHOLD_V"),
            },
            block_size: env_parse("FACEPLAY_BLOCK_SIZE").unwrap_or(DEFAULT_BLOCK_SIZE),
            face_mode: std::env::var("FACEPLAY_FACE_MODE")
                .ok()
                .and_then(|s| FaceMode::from_str(&s, true).ok())
                .unwrap_or_default(),
            sound_on: env_parse("FACEPLAY_SOUND").unwrap_or(false),
        }
    }
}

impl AppConfig {
    /// Reject settings the transforms would refuse later, before any frame
    /// is processed.
    pub fn validate(&self) -> Result<()> {
        let t = self.thresholds;
        for level in [t.red, t.green, t.blue, t.cr, t.v] {
            Threshold::new(level)?;
        }
        if self.block_size == 0 {
            return Err(PixelError::InvalidArgument("block size must be at least 1".into()));
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(PixelError::InvalidArgument(format!(
                "frame size {}x{} is empty",
                self.frame_width, self.frame_height
            )));
        }
        Ok(())
    }
}
