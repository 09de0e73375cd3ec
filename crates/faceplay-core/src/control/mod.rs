//! Face-to-sound control. Maps live face geometry to playback controls.

pub mod mapping;
pub mod visualizer;

pub use mapping::{ControlSignal, linear_map, map_face_to_control};
pub use visualizer::bar_heights;
