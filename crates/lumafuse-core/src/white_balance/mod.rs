//! White balance correction
//!
//! Removes color cast from an image with one of two interchangeable
//! strategies:
//! - gray-world channel rebalancing (equalize the channel means)
//! - percentile normalization (map each channel's high percentile to full
//!   brightness)
//!
//! Both are pure transforms: the source image is never touched, and a
//! channel with degenerate statistics (zero mean, zero percentile) keeps a
//! gain of 1.0 instead of dividing by zero.

#[cfg(test)]
mod tests;

use crate::models::{EnhanceOptions, WhiteBalanceMethod};
use crate::parallel;
use crate::raster::RasterImage;
use crate::verbose_println;

/// White-balance an image with the strategy selected in `options`.
///
/// Grayscale input is promoted to RGB by replication (gray-world then
/// reduces to the identity, since all channel means coincide); 4-channel
/// input drops alpha. Output is always 3-channel with the input's geometry.
pub fn white_balance(image: &RasterImage, options: &EnhanceOptions) -> RasterImage {
    let rgb = image.to_rgb();
    let gains = match options.white_balance {
        WhiteBalanceMethod::GrayWorld => gray_world_gains(&rgb),
        WhiteBalanceMethod::PercentileNormalization => {
            percentile_gains(&rgb, options.percentile)
        }
    };
    verbose_println!(
        "[lumafuse] white balance gains: r={:.4} g={:.4} b={:.4}",
        gains[0],
        gains[1],
        gains[2]
    );
    apply_gains(rgb, gains)
}

/// Per-channel gains under the gray-world assumption.
///
/// Channel means are accumulated in f64; each gain is the grand mean over
/// the channel's own mean. A zero channel mean keeps gain 1.0.
pub fn gray_world_gains(rgb: &RasterImage) -> [f32; 3] {
    debug_assert_eq!(rgb.channels, 3);

    let mut sums = [0.0f64; 3];
    for pixel in rgb.data.chunks_exact(3) {
        sums[0] += pixel[0] as f64;
        sums[1] += pixel[1] as f64;
        sums[2] += pixel[2] as f64;
    }

    let pixels = rgb.pixel_count() as f64;
    let means = [sums[0] / pixels, sums[1] / pixels, sums[2] / pixels];
    let grand_mean = (means[0] + means[1] + means[2]) / 3.0;

    let mut gains = [1.0f32; 3];
    for (gain, &mean) in gains.iter_mut().zip(&means) {
        if mean > 0.0 {
            *gain = (grand_mean / mean) as f32;
        }
    }
    gains
}

/// Per-channel gains mapping the `percentile`-th sample value to 255.
///
/// The percentile is computed with linear interpolation between order
/// statistics. A zero percentile value keeps gain 1.0.
pub fn percentile_gains(rgb: &RasterImage, percentile: f32) -> [f32; 3] {
    debug_assert_eq!(rgb.channels, 3);

    let mut gains = [1.0f32; 3];
    for channel in 0..3 {
        let hist = channel_histogram(&rgb.data, channel);
        let level = percentile_from_histogram(&hist, rgb.pixel_count(), percentile);
        if level > 0.0 {
            gains[channel] = 255.0 / level as f32;
        }
    }
    gains
}

/// Scale every channel by its gain, clip to [0, 255], round to 8-bit.
fn apply_gains(mut rgb: RasterImage, gains: [f32; 3]) -> RasterImage {
    if gains == [1.0, 1.0, 1.0] {
        return rgb;
    }
    parallel::for_each_chunk_mut(&mut rgb.data, 3, |pixel| {
        for (v, &gain) in pixel.iter_mut().zip(&gains) {
            *v = (*v as f32 * gain + 0.5).clamp(0.0, 255.0) as u8;
        }
    });
    rgb
}

/// 256-bin histogram of one channel of interleaved RGB data.
fn channel_histogram(data: &[u8], channel: usize) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for pixel in data.chunks_exact(3) {
        hist[pixel[channel] as usize] += 1;
    }
    hist
}

/// Percentile of 8-bit samples from their histogram, with linear
/// interpolation between the two straddling order statistics.
fn percentile_from_histogram(hist: &[u32; 256], count: usize, percentile: f32) -> f64 {
    debug_assert!(count > 0);

    let rank = (count as f64 - 1.0) * (percentile as f64 / 100.0);
    let lower_rank = rank.floor() as usize;
    let fraction = rank - lower_rank as f64;

    let lower = order_statistic(hist, lower_rank);
    if fraction == 0.0 {
        return lower as f64;
    }
    let upper = order_statistic(hist, (lower_rank + 1).min(count - 1));
    lower as f64 + (upper as f64 - lower as f64) * fraction
}

/// k-th smallest sample value (0-based) from a histogram.
fn order_statistic(hist: &[u32; 256], k: usize) -> u8 {
    let mut remaining = k as u64;
    for (value, &bin) in hist.iter().enumerate() {
        if (bin as u64) > remaining {
            return value as u8;
        }
        remaining -= bin as u64;
    }
    255
}
