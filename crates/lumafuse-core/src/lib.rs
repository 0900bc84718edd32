//! # lumafuse
//!
//! Single-image enhancement by two-branch weighted fusion.
//!
//! One invocation derives a contrast-enhanced branch and a white-balanced
//! branch from the same decoded image, scores each branch with per-pixel
//! weight maps (luminance, saliency, chromaticity), recombines each branch's
//! lightness in CIE L*a*b*, and fuses the two branches into one output
//! using the luminance maps as blend coefficients.
//!
//! Two stock configurations ship:
//! - global histogram equalization + gray-world white balance
//! - adaptive (tiled, contrast-limited) equalization + percentile white
//!   balance
//!
//! The crate works on decoded raster buffers only; decoding, encoding and
//! transport belong to the caller.
//!
//! ## Example
//!
//! ```
//! use lumafuse_core::{enhance_image, EnhanceOptions, RasterImage};
//!
//! let image = RasterImage::new(2, 2, 3, vec![90, 120, 30, 200, 40, 60, 10, 10, 10, 250, 250, 20])?;
//! let enhanced = enhance_image(&image, &EnhanceOptions::adaptive_percentile())?;
//! assert_eq!(enhanced.dimensions(), (2, 2));
//! # Ok::<(), lumafuse_core::EnhanceError>(())
//! ```

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod fusion;
pub mod models;
pub mod pipeline;
pub mod raster;
pub mod weights;
pub mod white_balance;

mod parallel;

pub use config::{set_verbose, PipelineDefaults};
pub use error::{EnhanceError, Result};
pub use models::{ContrastMethod, EnhanceOptions, WhiteBalanceMethod};
pub use pipeline::{enhance_image, enhance_pair, EnhancedVariant};
pub use raster::{RasterImage, WeightMap};
