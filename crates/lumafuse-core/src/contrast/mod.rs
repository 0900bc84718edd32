//! Contrast enhancement
//!
//! Converts the input to single-channel intensity and boosts contrast with
//! one of two interchangeable strategies:
//! - global histogram equalization
//! - contrast-limited adaptive equalization over a tile grid

mod adaptive;


pub use adaptive::adaptive_equalize;

use crate::models::{ContrastMethod, EnhanceOptions};
use crate::parallel;
use crate::raster::RasterImage;

/// Enhance contrast of an image with the strategy selected in `options`.
///
/// Any supported channel count is accepted; color input is converted to
/// Rec.601 intensity first. Output is single-channel with the input's
/// geometry.
pub fn enhance_contrast(image: &RasterImage, options: &EnhanceOptions) -> RasterImage {
    let gray = image.to_grayscale();
    match options.contrast {
        ContrastMethod::HistogramEqualization => equalize_histogram(&gray),
        ContrastMethod::AdaptiveEqualization => adaptive_equalize(
            &gray,
            options.clip_limit,
            options.tiles_x,
            options.tiles_y,
        ),
    }
}

/// Global 256-bin histogram equalization of a single-channel image.
///
/// The lookup table maps through the cumulative distribution with the
/// darkest occupied bin's mass excluded, so the darkest occupied level maps
/// to 0 and the brightest occupied level to 255. A zero-variance image is
/// returned unchanged.
pub fn equalize_histogram(gray: &RasterImage) -> RasterImage {
    debug_assert_eq!(gray.channels, 1);

    let hist = build_histogram(&gray.data);
    let total = gray.data.len() as u64;

    // Mass of the darkest occupied bin; with a constant image it is the
    // whole distribution and there is nothing to redistribute.
    let cdf_min = hist.iter().copied().find(|&c| c > 0).unwrap_or(0) as u64;
    if cdf_min == total {
        return gray.clone();
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    let mut cumulative = 0u64;
    for (v, entry) in lut.iter_mut().enumerate() {
        cumulative += hist[v] as u64;
        let shifted = cumulative.saturating_sub(cdf_min);
        *entry = (shifted as f64 * scale + 0.5).min(255.0) as u8;
    }

    let mut data = gray.data.clone();
    parallel::for_each_chunk_mut(&mut data, 1, |px| {
        px[0] = lut[px[0] as usize];
    });

    RasterImage {
        width: gray.width,
        height: gray.height,
        channels: 1,
        data,
    }
}

/// 256-bin histogram of 8-bit samples.
fn build_histogram(data: &[u8]) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for &v in data {
        hist[v as usize] += 1;
    }
    hist
}
