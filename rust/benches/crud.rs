use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordmap::OrderedMap;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

fn shuffled_keys(count: usize) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..count as i64).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xC0FFEE);
    keys.shuffle(&mut rng);
    keys
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in &[1_000usize, 10_000, 100_000] {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("ordmap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = OrderedMap::new();
                for &key in keys {
                    map.insert(key, key * 2);
                }
                black_box(map.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreemap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(key, key * 2);
                }
                black_box(map.len())
            })
        });
    }

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let size = 100_000usize;
    let keys = shuffled_keys(size);

    let mut our_map = OrderedMap::new();
    let mut std_map = BTreeMap::new();
    for &key in &keys {
        our_map.insert(key, key * 2);
        std_map.insert(key, key * 2);
    }
    let probes: Vec<i64> = keys.iter().step_by(97).copied().collect();

    group.bench_function("ordmap", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in &probes {
                if our_map.get(key).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.bench_function("std_btreemap", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in &probes {
                if std_map.get(key).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.finish();
}

fn remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    let size = 10_000usize;
    let keys = shuffled_keys(size);

    group.bench_function("ordmap", |b| {
        b.iter_batched(
            || {
                let mut map = OrderedMap::new();
                for &key in &keys {
                    map.insert(key, key);
                }
                map
            },
            |mut map| {
                for &key in &keys {
                    black_box(map.remove(&key));
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("std_btreemap", |b| {
        b.iter_batched(
            || {
                let mut map = BTreeMap::new();
                for &key in &keys {
                    map.insert(key, key);
                }
                map
            },
            |mut map| {
                for &key in &keys {
                    black_box(map.remove(&key));
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn iteration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let size = 100_000usize;
    let keys = shuffled_keys(size);

    let mut our_map = OrderedMap::new();
    let mut std_map = BTreeMap::new();
    for &key in &keys {
        our_map.insert(key, key);
        std_map.insert(key, key);
    }

    group.bench_function("ordmap", |b| {
        b.iter(|| black_box(our_map.iter().count()))
    });

    group.bench_function("std_btreemap", |b| {
        b.iter(|| black_box(std_map.iter().count()))
    });

    group.bench_function("ordmap_range", |b| {
        b.iter(|| black_box(our_map.range(25_000..75_000).count()))
    });

    group.finish();
}

criterion_group!(
    benches,
    insert_benchmark,
    lookup_benchmark,
    remove_benchmark,
    iteration_benchmark
);
criterion_main!(benches);
