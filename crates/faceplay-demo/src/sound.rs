//! Face-to-sound driver.
//!
//! Audio synthesis is external; this module only pushes the per-frame
//! [`ControlSignal`] into an [`AudioSink`].

use faceplay_core::ControlSignal;
use tracing::{debug, info};

/// Seconds over which volume changes are ramped.
pub const VOLUME_RAMP: f32 = 0.05;

/// Playback backend controlled by the face box.
pub trait AudioSink {
    fn set_volume(&mut self, volume: f32, ramp_seconds: f32);
    fn set_rate(&mut self, rate: f32);
}

/// Sink that only logs what a real backend would be told.
#[derive(Debug, Default)]
pub struct LoggingSink {
    pub volume: f32,
    pub rate: f32,
}

impl AudioSink for LoggingSink {
    fn set_volume(&mut self, volume: f32, ramp_seconds: f32) {
        debug!(volume, ramp_seconds, "set volume");
        self.volume = volume;
    }

    fn set_rate(&mut self, rate: f32) {
        debug!(rate, "set rate");
        self.rate = rate;
    }
}

/// Applies control signals frame by frame.
pub struct SoundDriver<S: AudioSink> {
    sink: S,
    last: Option<ControlSignal>,
}

impl<S: AudioSink> SoundDriver<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, last: None }
    }

    /// Push one frame's signal. A silent signal drives volume to zero and
    /// leaves the rate where it was.
    pub fn apply(&mut self, signal: ControlSignal) {
        self.sink.set_volume(signal.volume, VOLUME_RAMP);
        if let Some(rate) = signal.rate {
            self.sink.set_rate(rate);
        }

        let was_silent = self.last.is_none_or(|s| s.is_silent());
        if was_silent != signal.is_silent() {
            if signal.is_silent() {
                info!("sound muted");
            } else {
                info!(volume = signal.volume, rate = ?signal.rate, "sound following face");
            }
        }
        self.last = Some(signal);
    }

    pub fn last_signal(&self) -> Option<ControlSignal> {
        self.last
    }
}
