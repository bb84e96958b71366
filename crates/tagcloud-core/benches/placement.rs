use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tagcloud_core::prelude::*;

fn generate_sizes(count: usize, min_side: i32, max_side: i32) -> Vec<Size> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Size::new(rng.gen_range(min_side..=max_side), rng.gen_range(min_side..=max_side)))
        .collect()
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    for count in [50, 100, 200] {
        let sizes = generate_sizes(count, 10, 100);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("place", count), &sizes, |b, sizes| {
            b.iter(|| {
                let mut layouter = CircularCloudLayouter::new(Point::new(0, 0));
                for size in sizes {
                    let _ = layouter.place(*size);
                }
                black_box(layouter)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
