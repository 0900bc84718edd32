//! Owned raster buffers shared by every pipeline stage.
//!
//! Two value-like types flow through the pipeline:
//! - [`RasterImage`]: interleaved 8-bit samples, 1 (gray), 3 (RGB) or
//!   4 (RGBA) channels, row-major.
//! - [`WeightMap`]: a single-channel f32 grid in [0, 1] used as per-pixel
//!   blend coefficients.
//!
//! Every transform takes a reference and returns a fresh buffer; stages never
//! mutate their input, so the contrast and white-balance branches of the
//! pipeline cannot alias each other.

use crate::color;
use crate::error::{EnhanceError, Result};

/// Decoded 8-bit raster image.
///
/// Channel order for color images is RGB(A). The alpha channel is carried
/// until the first color-space-dependent operation, which drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Number of interleaved channels (1, 3 or 4)
    pub channels: u8,

    /// Row-major interleaved samples, `width * height * channels` bytes
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Create an image after validating geometry and buffer length.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let image = Self {
            width,
            height,
            channels,
            data,
        };
        image.validate()?;
        Ok(image)
    }

    /// Check the geometry invariants: non-zero area, supported channel
    /// count, buffer length consistent with the declared dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EnhanceError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if !matches!(self.channels, 1 | 3 | 4) {
            return Err(EnhanceError::UnsupportedChannels {
                channels: self.channels,
            });
        }
        let expected = self.width as usize * self.height as usize * self.channels as usize;
        if self.data.len() != expected {
            return Err(EnhanceError::InvalidBufferLength {
                width: self.width,
                height: self.height,
                channels: self.channels,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Number of pixels (not samples).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Spatial dimensions as a (width, height) pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Sample at (x, y) for channel `c`. Intended for tests and spot checks,
    /// not bulk processing.
    pub fn sample(&self, x: u32, y: u32, c: u8) -> u8 {
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize
            + c as usize;
        self.data[idx]
    }

    /// Convert to a single-channel intensity image (Rec.601 luma).
    ///
    /// 1-channel input is returned as a copy; the alpha channel of 4-channel
    /// input does not participate.
    pub fn to_grayscale(&self) -> RasterImage {
        if self.channels == 1 {
            return self.clone();
        }
        let step = self.channels as usize;
        let mut data = Vec::with_capacity(self.pixel_count());
        for pixel in self.data.chunks_exact(step) {
            data.push(color::luma_u8(pixel[0], pixel[1], pixel[2]));
        }
        RasterImage {
            width: self.width,
            height: self.height,
            channels: 1,
            data,
        }
    }

    /// Convert to a 3-channel RGB image.
    ///
    /// Grayscale input is promoted by channel replication (no colorization);
    /// 4-channel input drops alpha; 3-channel input is returned as a copy.
    pub fn to_rgb(&self) -> RasterImage {
        let data = match self.channels {
            3 => return self.clone(),
            1 => {
                let mut data = Vec::with_capacity(self.pixel_count() * 3);
                for &v in &self.data {
                    data.extend_from_slice(&[v, v, v]);
                }
                data
            }
            _ => {
                let mut data = Vec::with_capacity(self.pixel_count() * 3);
                for pixel in self.data.chunks_exact(4) {
                    data.extend_from_slice(&pixel[..3]);
                }
                data
            }
        };
        RasterImage {
            width: self.width,
            height: self.height,
            channels: 3,
            data,
        }
    }
}

/// Per-pixel blend coefficients in [0, 1].
///
/// A map is derived from exactly one source image; it carries no identity
/// beyond its geometry and values. Maps may be resampled to a second image's
/// geometry before use.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMap {
    /// Map width in pixels
    pub width: u32,

    /// Map height in pixels
    pub height: u32,

    /// Row-major weights, `width * height` values in [0, 1]
    pub data: Vec<f32>,
}

impl WeightMap {
    /// Create a map after validating the buffer length.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 {
            return Err(EnhanceError::EmptyImage { width, height });
        }
        if data.len() != expected {
            return Err(EnhanceError::InvalidBufferLength {
                width,
                height,
                channels: 1,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Spatial dimensions as a (width, height) pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Weight at (x, y).
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Bilinearly resample to a new geometry.
    ///
    /// Samples are taken at pixel centers with clamped borders, so a resample
    /// to the map's own geometry reproduces it exactly.
    pub fn resized(&self, width: u32, height: u32) -> WeightMap {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let scale_x = self.width as f32 / width as f32;
        let scale_y = self.height as f32 / height as f32;
        let src_w = self.width as usize;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let sy = ((y as f32 + 0.5) * scale_y - 0.5).max(0.0);
            let y0 = (sy as usize).min(self.height as usize - 1);
            let y1 = (y0 + 1).min(self.height as usize - 1);
            let fy = sy - y0 as f32;
            for x in 0..width {
                let sx = ((x as f32 + 0.5) * scale_x - 0.5).max(0.0);
                let x0 = (sx as usize).min(src_w - 1);
                let x1 = (x0 + 1).min(src_w - 1);
                let fx = sx - x0 as f32;

                let tl = self.data[y0 * src_w + x0];
                let tr = self.data[y0 * src_w + x1];
                let bl = self.data[y1 * src_w + x0];
                let br = self.data[y1 * src_w + x1];

                let top = tl * (1.0 - fx) + tr * fx;
                let bottom = bl * (1.0 - fx) + br * fx;
                data.push(top * (1.0 - fy) + bottom * fy);
            }
        }
        WeightMap {
            width,
            height,
            data,
        }
    }
}
