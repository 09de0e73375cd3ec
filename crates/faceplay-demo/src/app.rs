//! Frame orchestrator. Drives source, detector, state and sound one frame
//! at a time.

use faceplay_core::control::visualizer::{BAR_COUNT, bar_heights};
use faceplay_core::{ControlSignal, PixelError, RasterBuffer, Rect, map_face_to_control};
use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::detector::{DetectorError, FaceDetector};
use crate::image_loader::ImageIoError;
use crate::render::{Tile, live_tile, snapshot_tiles};
use crate::sound::{AudioSink, SoundDriver};
use crate::source::FrameSource;
use crate::state::{AppState, FaceTransition, KeyOutcome, Thresholds};

/// Drawable height of the visualizer bars, in tile pixels.
const BAR_AREA_HEIGHT: f32 = 105.0;

/// Errors that stop the frame loop.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("frame source: {0}")]
    Source(#[from] ImageIoError),
    #[error("face detector: {0}")]
    Detector(#[from] DetectorError),
    #[error("transform: {0}")]
    Transform(#[from] PixelError),
}

/// What one frame produced.
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub frame: RasterBuffer,
    pub signal: ControlSignal,
    pub bars: [f32; BAR_COUNT],
}

/// Summary of a run, written next to the tiles.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub frames: u64,
    pub face_mode: String,
    pub sound_on: bool,
    pub thresholds: Thresholds,
    pub live_face: Option<Rect>,
    pub frozen_face: Option<Rect>,
    pub last_signal: Option<ControlSignal>,
    pub tiles: Vec<String>,
}

pub struct FrameOrchestrator<F, D, S: AudioSink> {
    config: AppConfig,
    source: F,
    detector: D,
    sound: SoundDriver<S>,
    state: AppState,
    frame_index: u64,
    last_frame: Option<RasterBuffer>,
}

impl<F, D, S> FrameOrchestrator<F, D, S>
where
    F: FrameSource,
    D: FaceDetector,
    S: AudioSink,
{
    pub fn new(config: AppConfig, source: F, detector: D, sink: S) -> Self {
        let mut state = AppState::new(config.thresholds);
        state.face_mode = config.face_mode;
        state.sound_on = config.sound_on;
        Self {
            config,
            source,
            detector,
            sound: SoundDriver::new(sink),
            state,
            frame_index: 0,
            last_frame: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Forward a key press. A snapshot freezes the most recent frame; before
    /// the first frame there is nothing to freeze and the press is dropped.
    pub fn press(&mut self, key: char) -> KeyOutcome {
        let outcome = self.state.handle_key(key);
        match outcome {
            KeyOutcome::Snapshot => match self.last_frame.as_ref() {
                Some(frame) => {
                    self.state.take_snapshot(frame);
                    info!(frozen_face = ?self.state.frozen_face, "snapshot taken");
                }
                None => info!("no frame yet, snapshot ignored"),
            },
            KeyOutcome::Handled => info!(
                face_mode = %self.state.face_mode,
                sound_on = self.state.sound_on,
                "key {key:?} handled"
            ),
            KeyOutcome::Ignored => {}
        }
        outcome
    }

    /// Process the next frame.
    pub fn step(&mut self) -> Result<FrameOutcome, OrchestratorError> {
        let frame = self.source.next_frame()?;
        let candidates = self.detector.detect(&frame)?;

        match self.state.update_live_face(&candidates) {
            FaceTransition::Found(face) => info!(frame = self.frame_index, ?face, "live face found"),
            FaceTransition::Lost => info!(frame = self.frame_index, "live face lost"),
            FaceTransition::Unchanged => {}
        }
        self.last_frame = Some(frame.clone());

        if self.frame_index == self.config.snapshot_frame as u64 {
            self.press(' ');
        }

        let signal = map_face_to_control(self.state.live_face, self.state.sound_on);
        self.sound.apply(signal);

        let active = self.state.sound_on && self.state.live_face.is_some();
        let bars = bar_heights(signal.volume, active, BAR_AREA_HEIGHT, self.frame_index);

        self.frame_index += 1;
        Ok(FrameOutcome { frame, signal, bars })
    }

    /// Run `config.frames` frames.
    pub fn run(&mut self) -> Result<Option<FrameOutcome>, OrchestratorError> {
        let mut last = None;
        for _ in 0..self.config.frames {
            last = Some(self.step()?);
        }
        Ok(last)
    }

    /// The live tile followed by every snapshot tile.
    pub fn render(&self) -> Result<Vec<Tile>, OrchestratorError> {
        let mut tiles = Vec::new();
        if let Some(frame) = self.last_frame.as_ref() {
            tiles.push(live_tile(frame, self.state.live_face));
        }
        tiles.extend(snapshot_tiles(&self.state, self.config.block_size)?);
        Ok(tiles)
    }

    pub fn report(&self, tiles: &[Tile]) -> RunReport {
        RunReport {
            frames: self.frame_index,
            face_mode: self.state.face_mode.to_string(),
            sound_on: self.state.sound_on,
            thresholds: self.state.thresholds,
            live_face: self.state.live_face,
            frozen_face: self.state.frozen_face,
            last_signal: self.sound.last_signal(),
            tiles: tiles.iter().map(|t| t.name.to_string()).collect(),
        }
    }
}
