use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skipkv::{Random, RandomGenerator, SkipList, K_MAX_HEIGHT};

fn build(n: u32) -> SkipList<u32, u32, Random> {
    let mut list = SkipList::new(K_MAX_HEIGHT + 6, Random::new(0xdead_beef));
    let mut rnd = Random::new(301);
    for _ in 0..n {
        let k = rnd.next();
        let _ = list.insert(k, k);
    }
    list
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [1_000u32, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| black_box(build(n)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for n in [1_000u32, 10_000, 100_000].iter() {
        let list = build(*n);
        let mut rnd = Random::new(7);
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| black_box(list.search(&rnd.next())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
