use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fractal_field::{build_grid, iterate, Complex, Region, Resolution, UpdateRule};

fn bench_iterate(c: &mut Criterion) {
    let region = Region::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    let grid = build_grid(region, Resolution::new(400, 400)).unwrap();
    let custom = UpdateRule::custom("square", |z: Complex| z * z);

    let mut group = c.benchmark_group("iterate_400x400");
    for (label, rule) in [("square", UpdateRule::Square), ("custom_square", custom), ("cube", UpdateRule::Cube)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &rule, |b, rule| {
            b.iter(|| iterate(black_box(&grid), rule, 100, 100.0).unwrap())
        });
    }
    group.finish();
}

fn bench_plottable(c: &mut Criterion) {
    let region = Region::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    let field = fractal_field::generate(
        "bench",
        region,
        100,
        Resolution::new(400, 400),
        None,
        &UpdateRule::Square,
    )
    .unwrap();

    c.bench_function("plottable_smoothed_scaled", |b| {
        b.iter(|| black_box(&field).plottable(true, true).unwrap())
    });
}

criterion_group!(benches, bench_iterate, bench_plottable);
criterion_main!(benches);
