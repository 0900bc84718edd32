//! Error types for the enhancement pipeline

use thiserror::Error;

/// Result type alias for enhancement operations
pub type Result<T> = std::result::Result<T, EnhanceError>;

/// Errors surfaced by the enhancement pipeline.
///
/// Degenerate numeric situations (zero channel statistics, zero fusion
/// weight sums) are handled by defined fallbacks inside the pipeline and
/// never reach the caller; only structural problems do.
#[derive(Error, Debug)]
pub enum EnhanceError {
    /// Two buffers that must agree spatially do not
    #[error("dimension mismatch between {context}: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        context: &'static str,
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    /// Two images that must share a channel count do not
    #[error("channel count mismatch: {left} vs {right}")]
    ChannelMismatch { left: u8, right: u8 },

    /// Zero-width or zero-height image
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Channel count outside the supported set (1, 3, 4)
    #[error("unsupported channel count: {channels} (expected 1, 3 or 4)")]
    UnsupportedChannels { channels: u8 },

    /// Sample buffer length inconsistent with the declared geometry
    #[error("buffer length {actual} does not match {width}x{height}x{channels} = {expected}")]
    InvalidBufferLength {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
}

impl EnhanceError {
    /// Build a `DimensionMismatch` from two (width, height) pairs.
    pub(crate) fn dimensions(
        context: &'static str,
        left: (u32, u32),
        right: (u32, u32),
    ) -> Self {
        Self::DimensionMismatch {
            context,
            left_width: left.0,
            left_height: left.1,
            right_width: right.0,
            right_height: right.1,
        }
    }
}
