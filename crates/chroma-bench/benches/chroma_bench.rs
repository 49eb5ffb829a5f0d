//! Benchmarks for color conversion.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chroma_convert::{ColorSpaceConverter, ConverterOptions, VonKriesAdaptation};
use chroma_core::{CieLab, CieXyz, Hsl, LinearRgb, Rgb};
use chroma_math::CAT02;
use chroma_primaries::{ADOBE_RGB_1998, PRO_PHOTO_RGB};
use chroma_transfer::Companding;

fn gradient(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            Rgb::new(t, (t * 3.0).fract(), 1.0 - t)
        })
        .collect()
}

/// Benchmark companding curves.
fn bench_companding(c: &mut Criterion) {
    let mut group = c.benchmark_group("companding");

    let values: Vec<f32> = (0..10000).map(|i| i as f32 / 10000.0).collect();
    group.throughput(Throughput::Elements(10000));

    for (name, curve) in [
        ("srgb", Companding::Srgb),
        ("gamma_2.2", Companding::Gamma(2.2)),
        ("lstar", Companding::LStar),
        ("rec2020", Companding::Rec2020),
    ] {
        group.bench_function(BenchmarkId::new("expand", name), |b| {
            b.iter(|| {
                values.iter().map(|&x| curve.expand(black_box(x))).collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark single-value conversions.
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    let conv = ColorSpaceConverter::default();
    let rgb = Rgb::new(0.8, 0.4, 0.2);
    let lab = CieLab::new(54.0, 30.0, 45.0);

    group.bench_function("rgb_to_lab", |b| b.iter(|| conv.to_cie_lab(black_box(rgb))));
    group.bench_function("lab_to_rgb", |b| b.iter(|| conv.to_rgb(black_box(lab))));
    group.bench_function("rgb_to_hsl", |b| b.iter(|| conv.to_hsl(black_box(rgb))));
    group.bench_function("xyz_to_luv", |b| {
        b.iter(|| conv.to_cie_luv(black_box(CieXyz::new(0.3, 0.25, 0.2))))
    });

    // Foreign working space hits the linear RGB cache
    let adobe = LinearRgb::with_working_space(0.5, 0.3, 0.2, ADOBE_RGB_1998);
    group.bench_function("adobe_linear_to_xyz", |b| {
        b.iter(|| conv.to_cie_xyz(black_box(adobe)))
    });

    let cat02 = ColorSpaceConverter::new(
        ConverterOptions::default()
            .with_adaptation(VonKriesAdaptation::new(CAT02).unwrap_or_default())
            .with_target_rgb_working_space(PRO_PHOTO_RGB),
    )
    .unwrap();
    group.bench_function("rgb_to_prophoto_cat02", |b| {
        b.iter(|| cat02.to_rgb(black_box(rgb)))
    });

    group.finish();
}

/// Benchmark buffer conversions, sequential and parallel.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    let conv = ColorSpaceConverter::default();

    for size in [1024usize, 1920 * 1080] {
        let src = gradient(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rgb_to_lab", size), &src, |b, src| {
            let mut dst = vec![CieLab::default(); src.len()];
            b.iter(|| conv.convert_many(black_box(src), &mut dst).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("par_rgb_to_lab", size), &src, |b, src| {
            let mut dst = vec![CieLab::default(); src.len()];
            b.iter(|| conv.par_convert_many(black_box(src), &mut dst).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("rgb_to_hsl", size), &src, |b, src| {
            let mut dst = vec![Hsl::default(); src.len()];
            b.iter(|| conv.to_hsl_many(black_box(src), &mut dst).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_companding, bench_scalar, bench_bulk);
criterion_main!(benches);
