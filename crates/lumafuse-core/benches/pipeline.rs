//! Benchmarks for lumafuse-core pipeline operations
//!
//! Run with: cargo bench -p lumafuse-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lumafuse_core::{
    contrast, enhance_image, fusion, weights, white_balance, EnhanceOptions, RasterImage,
};

/// Generate a synthetic color gradient image
fn generate_test_image(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 255) / width) as u8);
            data.push(((y * 255) / height) as u8);
            data.push((((x + y) * 128) / (width + height)) as u8);
        }
    }
    RasterImage::new(width, height, 3, data).expect("valid synthetic image")
}

/// Benchmark the two contrast enhancement strategies
fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("equalization", size),
            &image,
            |b, image| {
                let options = EnhanceOptions::equalization_gray_world();
                b.iter(|| contrast::enhance_contrast(black_box(image), &options));
            },
        );
        group.bench_with_input(BenchmarkId::new("adaptive", size), &image, |b, image| {
            let options = EnhanceOptions::adaptive_percentile();
            b.iter(|| contrast::enhance_contrast(black_box(image), &options));
        });
    }

    group.finish();
}

/// Benchmark the two white balance strategies
fn bench_white_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("white_balance");

    for size in [256u32, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("gray_world", size), &image, |b, image| {
            let options = EnhanceOptions::equalization_gray_world();
            b.iter(|| white_balance::white_balance(black_box(image), &options));
        });
        group.bench_with_input(BenchmarkId::new("percentile", size), &image, |b, image| {
            let options = EnhanceOptions::adaptive_percentile();
            b.iter(|| white_balance::white_balance(black_box(image), &options));
        });
    }

    group.finish();
}

/// Benchmark the three weight map generators
fn bench_weight_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_maps");

    let image = generate_test_image(512, 512);
    group.throughput(Throughput::Elements(512 * 512));

    group.bench_function("luminance", |b| {
        b.iter(|| weights::luminance_weights(black_box(&image)));
    });
    group.bench_function("saliency", |b| {
        b.iter(|| weights::saliency_weights(black_box(&image)));
    });
    group.bench_function("chromatic", |b| {
        b.iter(|| weights::chromatic_weights(black_box(&image)));
    });

    group.finish();
}

/// Benchmark two-image fusion
fn bench_fusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("fusion");

    for size in [256u32, 512, 1024].iter() {
        let a = generate_test_image(*size, *size);
        let b_img = white_balance::white_balance(&a, &EnhanceOptions::equalization_gray_world());
        let wa = weights::luminance_weights(&a);
        let wb = weights::luminance_weights(&b_img);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| {
                fusion::fuse_images(black_box(&a), black_box(&b_img), &wa, &wb)
                    .expect("matching geometry")
            });
        });
    }

    group.finish();
}

/// Benchmark the full pipeline for both stock configurations
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    for size in [256u32, 512].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("equalization_gray_world", size),
            &image,
            |b, image| {
                let options = EnhanceOptions::equalization_gray_world();
                b.iter(|| enhance_image(black_box(image), &options).expect("valid input"));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("adaptive_percentile", size),
            &image,
            |b, image| {
                let options = EnhanceOptions::adaptive_percentile();
                b.iter(|| enhance_image(black_box(image), &options).expect("valid input"));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_contrast,
    bench_white_balance,
    bench_weight_maps,
    bench_fusion,
    bench_full_pipeline
);
criterion_main!(benches);
