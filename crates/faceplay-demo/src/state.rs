//! Application state for the frame orchestrator.
//!
//! Everything the UI would mutate lives in one explicit struct that the
//! render step borrows; there are no globals.

use std::fmt;

use faceplay_core::{FaceCandidate, RasterBuffer, Rect, select_live_face};
use serde::{Deserialize, Serialize};

/// Initial value of every threshold slider.
pub const DEFAULT_THRESHOLD: i32 = 128;

/// What replaces the frozen face region in the face tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FaceMode {
    /// Outline only.
    #[default]
    Box,
    Gray,
    Blur,
    Hsv,
    Pixelate,
}

impl FaceMode {
    /// Mode bound to a digit key `0`–`4`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0' => Some(Self::Box),
            '1' => Some(Self::Gray),
            '2' => Some(Self::Blur),
            '3' => Some(Self::Hsv),
            '4' => Some(Self::Pixelate),
            _ => None,
        }
    }
}

impl fmt::Display for FaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => write!(f, "box"),
            Self::Gray => write!(f, "gray"),
            Self::Blur => write!(f, "blur"),
            Self::Hsv => write!(f, "hsv"),
            Self::Pixelate => write!(f, "pixelate"),
        }
    }
}

/// Slider values for every threshold tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    /// Cr (YCbCr) threshold.
    pub cr: i32,
    /// V (HSV) threshold.
    pub v: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            red: DEFAULT_THRESHOLD,
            green: DEFAULT_THRESHOLD,
            blue: DEFAULT_THRESHOLD,
            cr: DEFAULT_THRESHOLD,
            v: DEFAULT_THRESHOLD,
        }
    }
}

/// Result of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The caller should freeze the current frame.
    Snapshot,
    /// State changed.
    Handled,
    /// Key has no binding.
    Ignored,
}

/// Change in live face presence between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceTransition {
    Found(Rect),
    Lost,
    Unchanged,
}

/// UI-driven state carried from frame to frame.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub face_mode: FaceMode,
    pub sound_on: bool,
    pub thresholds: Thresholds,
    /// Frozen detection-sized frame.
    pub snapshot: Option<RasterBuffer>,
    /// Face in the most recent frame.
    pub live_face: Option<Rect>,
    /// Face at the time the snapshot was taken.
    pub frozen_face: Option<Rect>,
}

impl AppState {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Space freezes, `0`–`4` pick the face mode, `s`/`S` toggles sound.
    pub fn handle_key(&mut self, key: char) -> KeyOutcome {
        if key == ' ' {
            return KeyOutcome::Snapshot;
        }
        if let Some(mode) = FaceMode::from_key(key) {
            self.face_mode = mode;
            return KeyOutcome::Handled;
        }
        if key.eq_ignore_ascii_case(&'s') {
            self.sound_on = !self.sound_on;
            return KeyOutcome::Handled;
        }
        KeyOutcome::Ignored
    }

    /// Freeze `frame` and the current live face (or clear the frozen face).
    pub fn take_snapshot(&mut self, frame: &RasterBuffer) {
        self.snapshot = Some(frame.clone());
        self.frozen_face = self.live_face;
    }

    /// Replace the live face with this frame's best candidate.
    pub fn update_live_face(&mut self, candidates: &[FaceCandidate]) -> FaceTransition {
        let previous = self.live_face;
        self.live_face = select_live_face(candidates);
        match (previous, self.live_face) {
            (None, Some(face)) => FaceTransition::Found(face),
            (Some(_), None) => FaceTransition::Lost,
            _ => FaceTransition::Unchanged,
        }
    }
}
