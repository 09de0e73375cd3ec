//! Raster representation for the transform pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{PixelError, Result};

/// Fully opaque alpha, written by every transform.
pub const OPAQUE: u8 = 255;

/// One of the three color channels of an RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Red, sample 0.
    Red,
    /// Green, sample 1.
    Green,
    /// Blue, sample 2.
    Blue,
}

impl Channel {
    /// Offset of this channel inside an RGBA pixel.
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// An 8-bit RGBA raster, row-major, one `[r, g, b, a]` entry per pixel.
///
/// Transforms never mutate their input; each one allocates a fresh buffer
/// of the same dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl RasterBuffer {
    /// Allocate an opaque black raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0, OPAQUE])
    }

    /// Allocate a raster with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Wrap already-decoded pixels. The pixel count must be `width × height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PixelError::DimensionMismatch {
                expected: expected * 4,
                actual: pixels.len() * 4,
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Wrap interleaved RGBA bytes. The byte count must be `width × height × 4`.
    pub fn from_raw(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(PixelError::DimensionMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytemuck::cast_slice::<u8, [u8; 4]>(bytes).to_vec();
        Ok(Self { width, height, pixels })
    }

    /// Build a raster by evaluating `f` at every coordinate.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Interleaved RGBA view of the same memory.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Pixel at `(x, y)` with both coordinates clamped to the nearest edge.
    ///
    /// The raster must not be empty.
    pub fn pixel_clamped(&self, x: i64, y: i64) -> [u8; 4] {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.pixel(cx, cy)
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    /// Apply `f` to every pixel independently, producing a new raster.
    pub fn map_pixels(&self, f: impl Fn([u8; 4]) -> [u8; 4]) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl From<&::image::RgbaImage> for RasterBuffer {
    fn from(img: &::image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.pixels().map(|p| p.0).collect(),
        }
    }
}

impl From<&RasterBuffer> for ::image::RgbaImage {
    fn from(raster: &RasterBuffer) -> Self {
        ::image::RgbaImage::from_fn(raster.width, raster.height, |x, y| {
            ::image::Rgba(raster.pixel(x, y))
        })
    }
}

/// Axis-aligned rectangle, origin top-left, in the coordinate space of the
/// frame it was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Intersection with a `width × height` raster, or `None` if empty.
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.w as i64).min(width as i64);
        let y1 = (self.y as i64 + self.h as i64).min(height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}
