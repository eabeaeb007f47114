// In vektor-core/benches/vector_bench.rs

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vektor::{FixedWidthVector, SystemAllocator, TransferPair, VectorConfig};

const BENCH_SLOTS: usize = 65536; // 64 Ki slots

fn make_vector(name: &str) -> FixedWidthVector<f32> {
    FixedWidthVector::new(
        name,
        Arc::new(SystemAllocator),
        Arc::new(VectorConfig::default()),
    )
}

/// Builds a populated vector with every third slot null, the shape the
/// split/transfer benchmarks operate on.
fn populated_vector(slots: usize) -> FixedWidthVector<f32> {
    let mut vector = make_vector("bench-source");
    for i in 0..slots {
        if i % 3 == 0 {
            vector.set_null_safe(i).unwrap();
        } else {
            vector.set_safe(i, i as f32).unwrap();
        }
    }
    vector.set_value_count(slots).unwrap();
    vector
}

fn bench_set_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    group.bench_function("set_raw_preallocated", |b| {
        let mut vector = make_vector("raw");
        vector.ensure_capacity(BENCH_SLOTS - 1).unwrap();
        b.iter(|| {
            for i in 0..BENCH_SLOTS {
                vector.set(black_box(i), black_box(i as f32)).unwrap();
            }
        });
    });

    group.bench_function("set_safe_from_empty", |b| {
        b.iter(|| {
            let mut vector = make_vector("safe");
            for i in 0..BENCH_SLOTS {
                vector.set_safe(black_box(i), black_box(i as f32)).unwrap();
            }
            vector
        });
    });

    group.finish();
}

fn bench_get_paths(c: &mut Criterion) {
    let vector = populated_vector(BENCH_SLOTS);
    let mut group = c.benchmark_group("get");

    group.bench_function("get_or_null_scan", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for i in 0..BENCH_SLOTS {
                if let Some(value) = vector.get_or_null(black_box(i)) {
                    sum += value;
                }
            }
            sum
        });
    });

    group.bench_function("raw_get_scan", |b| {
        let value_bytes = vector.value_bytes();
        b.iter(|| {
            let mut sum = 0.0f32;
            for i in 0..BENCH_SLOTS {
                sum += FixedWidthVector::<f32>::raw_get(black_box(value_bytes), i);
            }
            sum
        });
    });

    group.finish();
}

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    group.bench_function("split_and_transfer_half", |b| {
        let mut source = populated_vector(BENCH_SLOTS);
        let mut target = make_vector("bench-target");
        b.iter(|| {
            TransferPair::new(&mut source, &mut target)
                .split_and_transfer(BENCH_SLOTS / 4, BENCH_SLOTS / 2)
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_set_paths, bench_get_paths, bench_transfer);
criterion_main!(benches);
