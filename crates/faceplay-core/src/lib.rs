//! Faceplay Core, the pixel transform engine behind the face filter demo.
//!
//! This crate contains the color-space math, per-pixel and neighborhood
//! transforms, face candidate selection and the face-to-sound control
//! mapping. No capture, detector, audio or UI dependencies.

pub mod color;
pub mod control;
pub mod detect;
pub mod error;
pub mod image;
pub mod ops;

// Re-exports for convenience.
pub use control::mapping::{ControlSignal, map_face_to_control};
pub use detect::{FaceCandidate, select_live_face};
pub use error::{PixelError, Result};
pub use image::{Channel, RasterBuffer, Rect};
