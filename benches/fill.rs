use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use poly_fill::{Algorithm, Filler, Vertex};

fn octagon(r: i32) -> Vec<Vertex> {
    let c = 2 * r;
    let h = r / 2;
    vec![
        (c - r, c - h),
        (c - r, c + h),
        (c - h, c + r),
        (c + h, c + r),
        (c + r, c + h),
        (c + r, c - h),
        (c + h, c - r),
        (c - h, c - r),
    ]
}

fn bench_algorithms(c: &mut Criterion) {
    let filler = Filler::new(1024, 1024);
    let mut group = c.benchmark_group("fill");
    for radius in [32, 128, 256] {
        let shape = octagon(radius);
        let seed = Some((2 * radius, 2 * radius));
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), radius),
                &shape,
                |b, shape| b.iter(|| filler.fill(black_box(shape), algorithm, seed).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
