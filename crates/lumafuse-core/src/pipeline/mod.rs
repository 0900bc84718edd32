//! Image enhancement pipeline
//!
//! One invocation derives two branches from the same input (a
//! contrast-enhanced branch and a white-balanced branch), generates three
//! weight maps per branch, recombines each branch's lightness under its own
//! maps, and fuses the two results using each branch's luminance map as its
//! fusion weight.
//!
//! Invocations are pure and independent: no state is shared between
//! branches or between calls, so callers may run many invocations (or both
//! stock configurations for one image) in parallel without locking.


use crate::contrast;
use crate::error::Result;
use crate::fusion;
use crate::models::EnhanceOptions;
use crate::raster::{RasterImage, WeightMap};
use crate::verbose_println;
use crate::weights;
use crate::white_balance;

/// A branch image together with the three weight maps derived from it.
///
/// Transient by design: built and consumed inside one pipeline invocation.
pub struct EnhancedVariant {
    /// Branch image (post contrast or white-balance transform)
    pub image: RasterImage,

    /// Luminance weight map of the branch image
    pub luminance: WeightMap,

    /// Saliency weight map of the branch image
    pub saliency: WeightMap,

    /// Chromatic weight map of the branch image
    pub chromatic: WeightMap,
}

impl EnhancedVariant {
    /// Generate all three weight maps for a branch image.
    pub fn from_branch(image: RasterImage) -> Self {
        let luminance = weights::luminance_weights(&image);
        let saliency = weights::saliency_weights(&image);
        let chromatic = weights::chromatic_weights(&image);
        Self {
            image,
            luminance,
            saliency,
            chromatic,
        }
    }

    /// Recombine the branch image's lightness under its maps.
    fn recombined(&self) -> RasterImage {
        fusion::recombine_lightness(&self.image, &self.luminance, &self.saliency, &self.chromatic)
    }
}

/// Run one pipeline invocation with the strategy pair selected in `options`.
///
/// Accepts 1-, 3- or 4-channel 8-bit input; returns a 3-channel image with
/// the input's geometry. Fails up front on empty or malformed input, and at
/// fusion time if the branches ever disagree on geometry.
pub fn enhance_image(image: &RasterImage, options: &EnhanceOptions) -> Result<RasterImage> {
    image.validate()?;
    verbose_println!(
        "[lumafuse] enhancing {}x{} ({} channels): {:?} + {:?}",
        image.width,
        image.height,
        image.channels,
        options.contrast,
        options.white_balance
    );

    let contrast_branch =
        EnhancedVariant::from_branch(contrast::enhance_contrast(image, options));
    let balance_branch =
        EnhancedVariant::from_branch(white_balance::white_balance(image, options));

    let enhanced_contrast = contrast_branch.recombined();
    let enhanced_balance = balance_branch.recombined();

    fusion::fuse_images(
        &enhanced_contrast,
        &enhanced_balance,
        &contrast_branch.luminance,
        &balance_branch.luminance,
    )
}

/// Run both stock configurations on one input.
///
/// Returns the equalization + gray-world result first and the adaptive
/// equalization + percentile result second. Numeric knobs come from the
/// process-wide configuration handle; the two invocations are fully
/// independent.
pub fn enhance_pair(image: &RasterImage) -> Result<(RasterImage, RasterImage)> {
    let (first_options, second_options) = EnhanceOptions::configured_pair();
    let first = enhance_image(image, &first_options)?;
    let second = enhance_image(image, &second_options)?;
    Ok((first, second))
}
