//! Criterion micro-benchmarks for append, insert, resize and comparison.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use growarray::GrowableArray;
use growarray_bench::{filled, front_insert_positions, reserved};
use growarray_test_utils::MoveOnly;

const LEN: u64 = 10_000;

/// Benchmark: 10K appends starting from an empty array.
fn bench_push_back_from_empty(c: &mut Criterion) {
    c.bench_function("push_back_10k_from_empty", |b| {
        b.iter(|| {
            let arr = filled(black_box(LEN));
            black_box(arr.len());
        });
    });
}

/// Benchmark: 10K appends into an array reserved up front.
fn bench_push_back_reserved(c: &mut Criterion) {
    c.bench_function("push_back_10k_reserved", |b| {
        b.iter_batched(
            || reserved(LEN),
            |mut arr| {
                for i in 0..LEN {
                    arr.push_back(i);
                }
                black_box(arr.capacity());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 2K inserts near the front of a growing array.
fn bench_front_inserts(c: &mut Criterion) {
    let positions = front_insert_positions(2_000);
    c.bench_function("insert_2k_front", |b| {
        b.iter(|| {
            let mut arr = GrowableArray::new();
            for (value, &pos) in positions.iter().enumerate() {
                arr.insert(pos, value);
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: erase from the front until empty.
fn bench_front_erase(c: &mut Criterion) {
    c.bench_function("erase_2k_front", |b| {
        b.iter_batched(
            || filled(2_000),
            |mut arr| {
                while !arr.is_empty() {
                    arr.erase(0);
                }
                black_box(arr.capacity());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: grow a move-only array through resize.
fn bench_resize_move_only(c: &mut Criterion) {
    c.bench_function("resize_move_only_10k", |b| {
        b.iter(|| {
            let mut arr: GrowableArray<MoveOnly> = GrowableArray::new();
            let mut len = 1;
            while len <= LEN as usize {
                arr.resize(len);
                len *= 3;
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: equality and ordering of two 10K arrays differing at the end.
fn bench_compare(c: &mut Criterion) {
    let a = filled(LEN);
    let mut b_arr = filled(LEN);
    b_arr.push_back(0);
    c.bench_function("compare_10k", |b| {
        b.iter(|| {
            black_box(black_box(&a) == black_box(&b_arr));
            black_box(black_box(&a) < black_box(&b_arr));
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_from_empty,
    bench_push_back_reserved,
    bench_front_inserts,
    bench_front_erase,
    bench_resize_move_only,
    bench_compare
);
criterion_main!(benches);
