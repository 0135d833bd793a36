use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use lesion_metrics::{analyze, delta_e2000, Calibration, ColorConverter, Lab};

fn synthetic_lesion(size: u32) -> RgbaImage {
    let c = (size / 2) as i64;
    let r = (size as i64) / 6;
    RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as i64 - c, y as i64 - c);
        if dx * dx + dy * dy <= r * r {
            Rgba([170, 60, 60, 255])
        } else {
            Rgba([225, 185, 165, 255])
        }
    })
}

fn benchmark_lesion_analysis(c: &mut Criterion) {
    for size in [101u32, 480] {
        let image = synthetic_lesion(size);
        c.bench_function(&format!("analyze_{size}x{size}"), |b| {
            b.iter(|| analyze(black_box(&image), Calibration::pixels_per_cm(10.0)))
        });
    }
}

fn benchmark_color(c: &mut Criterion) {
    let converter = ColorConverter::new();
    c.bench_function("rgb_to_lab", |b| {
        b.iter(|| converter.rgb_to_lab(black_box(170), black_box(60), black_box(60)))
    });

    let lesion = Lab::new(41.38, 45.07, 24.51);
    let skin = Lab::new(78.12, 11.44, 15.55);
    c.bench_function("delta_e2000", |b| {
        b.iter(|| delta_e2000(black_box(lesion), black_box(skin)))
    });
}

criterion_group!(benches, benchmark_lesion_analysis, benchmark_color);
criterion_main!(benches);
