use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecgroup::Curve;

fn bench_order_of_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_of_group");
    group.sample_size(10);

    for p in [17u32, 97, 251, 509].iter() {
        let curve = Curve::new(2, 3, *p).expect("non-singular");
        group.bench_with_input(BenchmarkId::from_parameter(p), p, |bencher, _| {
            bencher.iter(|| black_box(black_box(&curve).order_of_group()))
        });
    }
    group.finish();
}

fn bench_order_of_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_of_element");

    for p in [17u32, 97, 251, 509].iter() {
        let curve = Curve::new(2, 3, *p).expect("non-singular");
        let g = curve.elements()[1].clone();
        group.bench_with_input(BenchmarkId::from_parameter(p), p, |bencher, _| {
            bencher.iter(|| black_box(curve.order_of_element(black_box(&g))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_order_of_group, bench_order_of_element);
criterion_main!(benches);
