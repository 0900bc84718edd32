//! Weight-guided recombination and two-image fusion
//!
//! Two stages share this module:
//! - [`recombine_lightness`]: rebuilds an image's lightness channel in CIE
//!   L*a*b* under its weight maps, leaving chroma untouched.
//! - [`fuse_images`]: blends two already-enhanced images per pixel, using
//!   two weight maps as blend coefficients normalized by their sum.


use crate::color;
use crate::error::{EnhanceError, Result};
use crate::parallel;
use crate::raster::{RasterImage, WeightMap};

/// Recombine an image's lightness channel under its weight maps.
///
/// The image is promoted to RGB if needed and converted to L*a*b*; each map
/// is resampled to the image geometry when its dimensions differ. Only the
/// luminance map enters the arithmetic: the lightness channel blends with
/// itself (`L * w + (1 - w) * L`), which collapses to `L`: the branch has a
/// single lightness source, and output compatibility with the established
/// behavior takes precedence over a reweighted blend. The L*a*b* round trip
/// still requantizes every sample, so this stage is not a byte-level no-op.
pub fn recombine_lightness(
    image: &RasterImage,
    luminance: &WeightMap,
    saliency: &WeightMap,
    chromatic: &WeightMap,
) -> RasterImage {
    let mut rgb = image.to_rgb();
    let (width, height) = rgb.dimensions();

    let luminance = luminance.resized(width, height);
    // Reconciled to the image geometry like the luminance map, but not
    // part of the blend.
    let _saliency = saliency.resized(width, height);
    let _chromatic = chromatic.resized(width, height);

    let w = width as usize;
    parallel::for_each_row_mut(&mut rgb.data, w * 3, |y, row| {
        for (x, px) in row.chunks_exact_mut(3).enumerate() {
            let lab = color::rgb_to_lab(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
            );
            let weight = luminance.data[y * w + x].clamp(0.0, 1.0);
            let lightness = lab.l * weight + (1.0 - weight) * lab.l;

            let (r, g, b) = color::lab_to_rgb(color::Lab {
                l: lightness,
                a: lab.a,
                b: lab.b,
            });
            px[0] = (r * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
            px[1] = (g * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
            px[2] = (b * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
        }
    });

    rgb
}

/// Fuse two images per pixel under two weight maps.
///
/// The maps are broadcast across channels; each output sample is
/// `(a * wa + b * wb) / (wa + wb)`, clipped and rounded to 8-bit. Where both
/// weights are zero the output falls back to the plain average of the two
/// samples.
///
/// Fails with [`EnhanceError::DimensionMismatch`] (or `ChannelMismatch`)
/// before any arithmetic if the images or the maps disagree on geometry.
pub fn fuse_images(
    a: &RasterImage,
    b: &RasterImage,
    weights_a: &WeightMap,
    weights_b: &WeightMap,
) -> Result<RasterImage> {
    if a.dimensions() != b.dimensions() {
        return Err(EnhanceError::dimensions(
            "fusion inputs",
            a.dimensions(),
            b.dimensions(),
        ));
    }
    if a.channels != b.channels {
        return Err(EnhanceError::ChannelMismatch {
            left: a.channels,
            right: b.channels,
        });
    }
    if weights_a.dimensions() != weights_b.dimensions() {
        return Err(EnhanceError::dimensions(
            "fusion weight maps",
            weights_a.dimensions(),
            weights_b.dimensions(),
        ));
    }
    if weights_a.dimensions() != a.dimensions() {
        return Err(EnhanceError::dimensions(
            "fusion weight maps and images",
            weights_a.dimensions(),
            a.dimensions(),
        ));
    }

    let w = a.width as usize;
    let channels = a.channels as usize;
    let mut out = vec![0u8; a.data.len()];

    parallel::for_each_row_mut(&mut out, w * channels, |y, row| {
        for (x, px) in row.chunks_exact_mut(channels).enumerate() {
            let idx = y * w + x;
            let wa = weights_a.data[idx];
            let wb = weights_b.data[idx];
            let denom = wa + wb;

            let base = idx * channels;
            for (c, sample) in px.iter_mut().enumerate() {
                let va = a.data[base + c] as f32;
                let vb = b.data[base + c] as f32;
                let fused = if denom > 0.0 {
                    (va * wa + vb * wb) / denom
                } else {
                    // Both weights vanish; defined fallback is the plain
                    // 50/50 average.
                    (va + vb) * 0.5
                };
                *sample = (fused + 0.5).clamp(0.0, 255.0) as u8;
            }
        }
    });

    Ok(RasterImage {
        width: a.width,
        height: a.height,
        channels: a.channels,
        data: out,
    })
}
