//! Benchmarks pour le calcul du périmètre

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ellipse::{perimeter, sampler, solver, GeoPoint};

fn foci() -> (GeoPoint, GeoPoint) {
    (
        GeoPoint::new(32.076761, 34.792510),
        GeoPoint::new(32.083257, 34.767737),
    )
}

fn bench_perimeter(c: &mut Criterion) {
    let (f1, f2) = foci();
    let mut group = c.benchmark_group("perimeter");

    for num_points in [20usize, 200, 2000] {
        group.throughput(Throughput::Elements((2 * num_points - 2) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            &num_points,
            |b, &n| {
                b.iter(|| {
                    let result = perimeter(black_box(f1), black_box(f2), 3000.0, n).unwrap();
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

fn bench_sampler(c: &mut Criterion) {
    let (f1, f2) = foci();
    let axes = solver::axis_lengths(f1, f2, 3000.0).unwrap();

    c.bench_function("sample_perimeter_2000", |b| {
        b.iter(|| {
            let points = sampler::sample_perimeter(black_box(axes), 2000).unwrap();
            black_box(points)
        })
    });
}

criterion_group!(benches, bench_perimeter, bench_sampler);
criterion_main!(benches);
