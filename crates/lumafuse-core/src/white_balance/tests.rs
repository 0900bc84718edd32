//! Tests for white balance correction

use super::*;
use crate::models::EnhanceOptions;
use crate::raster::RasterImage;

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RasterImage {
    let data = rgb
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect();
    RasterImage::new(width, height, 3, data).unwrap()
}

#[test]
fn gray_world_leaves_balanced_image_unchanged() {
    // Channel means are all 20, so every gain is exactly 1.0
    let data = vec![10, 20, 30, 20, 30, 10, 30, 10, 20];
    let img = RasterImage::new(3, 1, 3, data.clone()).unwrap();
    let out = white_balance(&img, &EnhanceOptions::equalization_gray_world());
    assert_eq!(out.data, data);
}

#[test]
fn gray_world_equalizes_channel_means_of_solid_color() {
    // Means (100, 150, 200), grand mean 150: gains (1.5, 1.0, 0.75)
    let img = solid(2, 2, [100, 150, 200]);
    let out = white_balance(&img, &EnhanceOptions::equalization_gray_world());
    for pixel in out.data.chunks_exact(3) {
        assert_eq!(pixel, &[150, 150, 150]);
    }
    // Source untouched
    assert_eq!(img.sample(0, 0, 0), 100);
}

#[test]
fn percentile_maps_solid_color_to_white() {
    let img = solid(2, 2, [100, 150, 200]);
    let out = white_balance(&img, &EnhanceOptions::adaptive_percentile());
    for pixel in out.data.chunks_exact(3) {
        assert_eq!(pixel, &[255, 255, 255]);
    }
}

#[test]
fn zero_channels_keep_identity_gain() {
    // All-black image: every statistic is zero under both strategies
    let img = solid(3, 3, [0, 0, 0]);

    let gw = white_balance(&img, &EnhanceOptions::equalization_gray_world());
    assert_eq!(gw.data, img.data);

    let pct = white_balance(&img, &EnhanceOptions::adaptive_percentile());
    assert_eq!(pct.data, img.data);
}

#[test]
fn single_zero_channel_is_left_alone() {
    // Red channel is identically zero; the other two still rebalance
    // around the grand mean (0 + 100 + 200) / 3 = 100
    let img = solid(2, 2, [0, 100, 200]);
    let gains = gray_world_gains(&img);
    assert_eq!(gains[0], 1.0);
    assert!((gains[1] - 1.0).abs() < 1e-6);
    assert!((gains[2] - 0.5).abs() < 1e-6);
}

#[test]
fn gray_world_gains_match_hand_computation() {
    let img = solid(4, 4, [50, 100, 150]);
    let gains = gray_world_gains(&img);
    // Grand mean 100: gains (2.0, 1.0, 100/150)
    assert!((gains[0] - 2.0).abs() < 1e-6);
    assert!((gains[1] - 1.0).abs() < 1e-6);
    assert!((gains[2] - 100.0 / 150.0).abs() < 1e-6);
}

#[test]
fn percentile_uses_linear_interpolation() {
    // Ten pixels, red values 0..=9; 50th percentile = 4.5
    let mut data = Vec::new();
    for v in 0..10u8 {
        data.extend_from_slice(&[v, 100, 100]);
    }
    let img = RasterImage::new(10, 1, 3, data).unwrap();
    let gains = percentile_gains(&img, 50.0);
    assert!((gains[0] - 255.0 / 4.5).abs() < 1e-4);
    assert!((gains[1] - 255.0 / 100.0).abs() < 1e-6);
}

#[test]
fn grayscale_input_is_promoted_and_self_balanced() {
    let img = RasterImage::new(2, 2, 1, vec![40, 80, 120, 160]).unwrap();
    let out = white_balance(&img, &EnhanceOptions::equalization_gray_world());
    assert_eq!(out.channels, 3);
    // Replicated channels share one mean, so gray-world is the identity
    assert_eq!(out.data, img.to_rgb().data);
}

#[test]
fn alpha_channel_is_dropped() {
    let img = RasterImage::new(1, 2, 4, vec![100, 150, 200, 255, 100, 150, 200, 0]).unwrap();
    let out = white_balance(&img, &EnhanceOptions::equalization_gray_world());
    assert_eq!(out.channels, 3);
    assert_eq!(out.dimensions(), (1, 2));
}

#[test]
fn brightening_gains_saturate_at_white() {
    // Percentile balance of a dim solid color pushes every channel to 255
    let img = solid(2, 2, [10, 20, 30]);
    let out = white_balance(&img, &EnhanceOptions::adaptive_percentile());
    for pixel in out.data.chunks_exact(3) {
        assert_eq!(pixel, &[255, 255, 255]);
    }
}
