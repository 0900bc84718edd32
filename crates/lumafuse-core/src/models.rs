//! Option types for the enhancement pipeline.
//!
//! One pipeline invocation is parameterized by a contrast strategy and a
//! white-balance strategy plus their numeric knobs. The two stock
//! configurations pair global equalization with gray-world balancing and
//! adaptive equalization with percentile balancing.

use serde::{Deserialize, Serialize};

use crate::config::PipelineDefaults;

/// Contrast enhancement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContrastMethod {
    /// Global 256-bin histogram equalization: redistributes the intensity
    /// histogram toward a uniform distribution over the full 8-bit range.
    #[default]
    HistogramEqualization,

    /// Contrast-limited adaptive equalization: per-tile equalization with a
    /// clip on histogram redistribution, blended across tile boundaries.
    /// Tile grid and clip limit come from [`EnhanceOptions`].
    AdaptiveEqualization,
}

/// White balance strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WhiteBalanceMethod {
    /// Gray-world assumption: scale each channel so all channel means meet
    /// at the grand mean.
    #[default]
    GrayWorld,

    /// Percentile normalization: rescale each channel so its high-percentile
    /// value maps to full brightness.
    PercentileNormalization,
}

/// Options for one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceOptions {
    /// Contrast branch strategy
    pub contrast: ContrastMethod,

    /// White-balance branch strategy
    pub white_balance: WhiteBalanceMethod,

    /// Histogram clip limit for adaptive equalization
    pub clip_limit: f32,

    /// Adaptive equalization tile columns
    pub tiles_x: u32,

    /// Adaptive equalization tile rows
    pub tiles_y: u32,

    /// Channel percentile mapped to full brightness by percentile balancing
    pub percentile: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            contrast: ContrastMethod::HistogramEqualization,
            white_balance: WhiteBalanceMethod::GrayWorld,
            clip_limit: 2.0,
            tiles_x: 8,
            tiles_y: 8,
            percentile: 99.0,
        }
    }
}

impl EnhanceOptions {
    /// Global equalization + gray-world balance.
    pub fn equalization_gray_world() -> Self {
        Self::default()
    }

    /// Adaptive equalization + percentile balance.
    pub fn adaptive_percentile() -> Self {
        Self {
            contrast: ContrastMethod::AdaptiveEqualization,
            white_balance: WhiteBalanceMethod::PercentileNormalization,
            ..Self::default()
        }
    }

    /// Replace the numeric knobs with values from loaded configuration,
    /// keeping the strategy pair.
    pub fn with_defaults(mut self, defaults: &PipelineDefaults) -> Self {
        self.clip_limit = defaults.clahe_clip_limit;
        self.tiles_x = defaults.clahe_tiles_x;
        self.tiles_y = defaults.clahe_tiles_y;
        self.percentile = defaults.wb_percentile;
        self
    }

    /// The stock configuration pair, with numeric knobs taken from the
    /// process-wide configuration handle.
    pub fn configured_pair() -> (Self, Self) {
        let defaults = &crate::config::pipeline_config_handle().config.defaults;
        (
            Self::equalization_gray_world().with_defaults(defaults),
            Self::adaptive_percentile().with_defaults(defaults),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_configurations_pair_the_right_strategies() {
        let first = EnhanceOptions::equalization_gray_world();
        assert_eq!(first.contrast, ContrastMethod::HistogramEqualization);
        assert_eq!(first.white_balance, WhiteBalanceMethod::GrayWorld);

        let second = EnhanceOptions::adaptive_percentile();
        assert_eq!(second.contrast, ContrastMethod::AdaptiveEqualization);
        assert_eq!(second.white_balance, WhiteBalanceMethod::PercentileNormalization);
        assert_eq!(second.clip_limit, 2.0);
        assert_eq!((second.tiles_x, second.tiles_y), (8, 8));
        assert_eq!(second.percentile, 99.0);
    }

    #[test]
    fn configured_pair_keeps_the_stock_strategies() {
        // No config file is present in the test environment, so the knobs
        // are the built-in defaults
        let (first, second) = EnhanceOptions::configured_pair();
        assert_eq!(first, EnhanceOptions::equalization_gray_world());
        assert_eq!(second, EnhanceOptions::adaptive_percentile());
    }

    #[test]
    fn config_defaults_replace_numeric_knobs() {
        let defaults = PipelineDefaults {
            clahe_clip_limit: 3.5,
            clahe_tiles_x: 4,
            clahe_tiles_y: 16,
            wb_percentile: 95.0,
        };
        let options = EnhanceOptions::adaptive_percentile().with_defaults(&defaults);
        assert_eq!(options.contrast, ContrastMethod::AdaptiveEqualization);
        assert_eq!(options.clip_limit, 3.5);
        assert_eq!((options.tiles_x, options.tiles_y), (4, 16));
        assert_eq!(options.percentile, 95.0);
    }
}
