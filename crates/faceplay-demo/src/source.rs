//! Frame sources. Capture hardware is out of scope; frames come from
//! still images on disk, replayed in order.

use std::path::PathBuf;

use faceplay_core::RasterBuffer;

use crate::image_loader::{ImageIoError, load_frame};

/// Produces detection-sized frames on demand.
pub trait FrameSource {
    /// The next frame, already resized to the detection frame size.
    fn next_frame(&mut self) -> Result<RasterBuffer, ImageIoError>;
}

/// Cycles through a fixed list of frames.
pub struct StillFrames {
    frames: Vec<RasterBuffer>,
    cursor: usize,
}

impl StillFrames {
    /// Load every path up front, resized to `width × height`.
    pub fn load(paths: &[PathBuf], width: u32, height: u32) -> Result<Self, ImageIoError> {
        let frames = paths
            .iter()
            .map(|p| load_frame(p, width, height))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_frames(frames))
    }

    pub fn from_frames(frames: Vec<RasterBuffer>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl FrameSource for StillFrames {
    fn next_frame(&mut self) -> Result<RasterBuffer, ImageIoError> {
        if self.frames.is_empty() {
            return Err(ImageIoError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "frame source has no frames",
            )));
        }
        let frame = self.frames[self.cursor % self.frames.len()].clone();
        self.cursor += 1;
        Ok(frame)
    }
}
