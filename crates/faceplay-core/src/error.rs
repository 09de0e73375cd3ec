//! Error type shared by every fallible transform.

/// Errors raised by the transform engine.
///
/// Every variant signals a programming error on the caller's side: the
/// transforms themselves are total over valid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("region {x},{y} {width}x{height} does not fit inside {target_width}x{target_height}")]
    RegionOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, PixelError>;
