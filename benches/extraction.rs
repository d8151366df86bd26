use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use attrson::extract;

fn flat_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("cfg:field-{}", i), format!("{}", i)))
        .collect()
}

fn array_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("cfg:items[{}]", i), format!("{}", i)))
        .collect()
}

fn nested_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .flat_map(|i| {
            [
                (format!("cfg:users[{}].id", i), format!("{}", i)),
                (format!("cfg:users[{}].user-name", i), format!("user{}", i)),
                (format!("cfg:users[{}].active", i), "true".to_string()),
            ]
        })
        .collect()
}

fn benchmark_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_flat");
    for size in [10, 100, 1000] {
        let pairs = flat_pairs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| {
                extract(
                    black_box(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))),
                    "cfg",
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_array");
    for size in [10, 100, 1000] {
        let pairs = array_pairs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| {
                extract(
                    black_box(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))),
                    "cfg",
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_nested");
    for size in [10, 100] {
        let pairs = nested_pairs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| {
                extract(
                    black_box(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))),
                    "cfg",
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_flat, benchmark_arrays, benchmark_nested);
criterion_main!(benches);
