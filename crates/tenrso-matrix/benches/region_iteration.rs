//! Benchmarks for reshape and region traversal.
//!
//! Region walks sit on the inner loop of every routine that reads a matrix
//! block by block, and reshape is hit whenever a workspace matrix is reused.
//!
//! Run with:
//! ```bash
//! cargo bench --bench region_iteration
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tenrso_matrix::{DenseMatrix, Matrix, Region, TraversalOrder};

/// Benchmark full-matrix walks in both orders
fn bench_region_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_walk");

    for &n in &[64usize, 256, 1024] {
        let m = DenseMatrix::from_fn(n, n, |r, c| (r * n + c) as f64);
        let region = Region::new(0, 0, n - 1, n - 1);
        group.throughput(Throughput::Elements((n * n) as u64));

        for (name, order) in [
            ("row_major", TraversalOrder::RowMajor),
            ("column_major", TraversalOrder::ColumnMajor),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &m, |b, m| {
                b.iter(|| {
                    let sum: f64 = m
                        .region_iter(black_box(order), black_box(region))
                        .unwrap()
                        .map(|e| e.value)
                        .sum();
                    black_box(sum);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark interior sub-region walks against raw nested get() loops
fn bench_sub_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_region");
    let n = 512;
    let m = DenseMatrix::from_fn(n, n, |r, c| (r + c) as f64);
    let region = Region::new(64, 64, 447, 447);
    group.throughput(Throughput::Elements(region.len() as u64));

    group.bench_function("iterator", |b| {
        b.iter(|| {
            let sum: f64 = m
                .region_iter(TraversalOrder::RowMajor, black_box(region))
                .unwrap()
                .map(|e| e.value)
                .sum();
            black_box(sum);
        });
    });

    group.bench_function("nested_get", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for r in region.min_row..=region.max_row {
                for c in region.min_col..=region.max_col {
                    sum += m.get(r, c).unwrap();
                }
            }
            black_box(sum);
        });
    });

    group.finish();
}

/// Benchmark reshape with and without value preservation
fn bench_reshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshape");

    let test_cases = vec![
        ("shrink_in_place", (512, 512), (256, 384)),
        ("widen_in_place", (512, 256), (256, 512)),
        ("grow_reallocate", (256, 256), (512, 512)),
    ];

    for (name, from, to) in test_cases {
        for save in [false, true] {
            let id = BenchmarkId::new(name, if save { "save" } else { "discard" });
            group.bench_function(id, |b| {
                b.iter_batched(
                    || DenseMatrix::from_elem(from.0, from.1, 1.0),
                    |mut m| {
                        m.reshape(black_box(to.0), black_box(to.1), save).unwrap();
                        black_box(m);
                    },
                    criterion::BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_region_walk, bench_sub_region, bench_reshape);
criterion_main!(benches);
