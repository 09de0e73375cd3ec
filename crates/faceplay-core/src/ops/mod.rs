//! Raster transforms: pointwise, thresholding, color-space views,
//! convolution, pixelation and region crop/overlay.
//!
//! Every transform borrows its input and returns a new opaque raster of the
//! same dimensions (crop excepted).

pub mod convolve;
pub mod pixelate;
pub mod pointwise;
pub mod region;
pub mod threshold;
pub mod views;

pub use convolve::{Kernel, blur3x3, convolve};
pub use pixelate::{DEFAULT_BLOCK_SIZE, pixelate};
pub use pointwise::{ChannelSplit, isolate_channel, make_gray, make_gray_plus20, split_into_rgb_channels};
pub use region::{crop_rect, overlay};
pub use threshold::{
    Threshold, threshold_blue, threshold_channel, threshold_cr_gray, threshold_green, threshold_red,
    threshold_v_gray,
};
pub use views::{make_hsv_view, make_ycbcr_view};
