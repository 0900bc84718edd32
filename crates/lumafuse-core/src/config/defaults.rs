//! Default pipeline parameter values and their validation/sanitization.

use serde::Deserialize;

/// Numeric pipeline defaults, loadable from a config file.
///
/// These seed [`crate::EnhanceOptions`] via
/// [`EnhanceOptions::with_defaults`](crate::EnhanceOptions::with_defaults);
/// strategy selection itself is always per invocation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineDefaults {
    /// Histogram clip limit for adaptive equalization
    pub clahe_clip_limit: f32,

    /// Adaptive equalization tile columns
    pub clahe_tiles_x: u32,

    /// Adaptive equalization tile rows
    pub clahe_tiles_y: u32,

    /// Percentile mapped to full brightness by percentile white balance
    pub wb_percentile: f32,
}

impl Default for PipelineDefaults {
    fn default() -> Self {
        Self {
            clahe_clip_limit: 2.0,
            clahe_tiles_x: 8,
            clahe_tiles_y: 8,
            wb_percentile: 99.0,
        }
    }
}

impl PipelineDefaults {
    /// Clamp out-of-range values to usable bounds, reporting each adjustment.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(0.01..=1000.0).contains(&self.clahe_clip_limit) || !self.clahe_clip_limit.is_finite()
        {
            warnings.push(format!(
                "clahe_clip_limit {} out of range, clamped",
                self.clahe_clip_limit
            ));
            self.clahe_clip_limit = self.clahe_clip_limit.clamp(0.01, 1000.0);
            if !self.clahe_clip_limit.is_finite() {
                self.clahe_clip_limit = 2.0;
            }
        }

        for (name, tiles) in [
            ("clahe_tiles_x", &mut self.clahe_tiles_x),
            ("clahe_tiles_y", &mut self.clahe_tiles_y),
        ] {
            if !(1..=256).contains(tiles) {
                warnings.push(format!("{} {} out of range, clamped", name, tiles));
                *tiles = (*tiles).clamp(1, 256);
            }
        }

        if !(1.0..=100.0).contains(&self.wb_percentile) || !self.wb_percentile.is_finite() {
            warnings.push(format!(
                "wb_percentile {} out of range, clamped",
                self.wb_percentile
            ));
            self.wb_percentile = self.wb_percentile.clamp(1.0, 100.0);
            if !self.wb_percentile.is_finite() {
                self.wb_percentile = 99.0;
            }
        }

        warnings
    }
}
