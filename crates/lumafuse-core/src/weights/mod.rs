//! Per-pixel weight map generation
//!
//! Three independent, stateless map generators, each producing an H×W grid
//! in [0, 1] from an image:
//! - luminance: 8-bit Rec.601 luma scaled to [0, 1]
//! - saliency: normalized magnitude of a second-derivative edge response
//! - chromatic: HSV saturation
//!
//! Grayscale input is promoted to RGB by channel replication before any
//! color-space conversion, so its chromatic map is identically zero and its
//! luminance map is the intensity itself. That is the defined behavior for
//! the grayscale branch, not an error.

mod saliency;


use crate::color;
use crate::raster::{RasterImage, WeightMap};

/// Luminance weight map: per-pixel 8-bit luma divided by 255.
pub fn luminance_weights(image: &RasterImage) -> WeightMap {
    let rgb = image.to_rgb();
    let data = rgb
        .data
        .chunks_exact(3)
        .map(|px| color::luma_u8(px[0], px[1], px[2]) as f32 / 255.0)
        .collect();
    WeightMap {
        width: rgb.width,
        height: rgb.height,
        data,
    }
}

/// Saliency weight map: absolute Laplacian response, min–max normalized.
///
/// A perfectly uniform image has zero response range and maps to all zeros.
pub fn saliency_weights(image: &RasterImage) -> WeightMap {
    let gray = image.to_grayscale();
    let response = saliency::laplacian_magnitude(&gray);

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &v in &response {
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;

    let data = if range > 0.0 {
        response
            .iter()
            .map(|&v| ((v - min) / range) as f32)
            .collect()
    } else {
        vec![0.0; response.len()]
    };

    WeightMap {
        width: gray.width,
        height: gray.height,
        data,
    }
}

/// Chromatic weight map: per-pixel 8-bit HSV saturation divided by 255.
pub fn chromatic_weights(image: &RasterImage) -> WeightMap {
    let rgb = image.to_rgb();
    let data = rgb
        .data
        .chunks_exact(3)
        .map(|px| {
            let hsv = color::rgb_to_hsv(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
            );
            (hsv.s * 255.0).round() / 255.0
        })
        .collect();
    WeightMap {
        width: rgb.width,
        height: rgb.height,
        data,
    }
}
