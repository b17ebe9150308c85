use std::iter::repeat_with;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use qsort3::{qsort, qsort_with, MedianOfThree, RandomPivot};
use rand::{thread_rng, Rng};

const LEN: usize = 1_000_000;

pub fn qsort_bench(c: &mut Criterion) {
    let mut rand = thread_rng();
    let inputs: [(&str, Vec<i32>); 3] = [
        ("random", repeat_with(|| rand.gen::<i32>()).take(LEN).collect()),
        ("few distinct", repeat_with(|| rand.gen_range(0..8)).take(LEN).collect()),
        ("sorted", (0..LEN as i32).collect()),
    ];

    for (name, xs) in &inputs {
        let mut group = c.benchmark_group(*name);

        group.bench_function("qsort", |b| {
            b.iter_batched(|| xs.clone(), |mut xs| qsort(&mut xs), BatchSize::LargeInput);
        });

        group.bench_function("qsort seeded", |b| {
            b.iter_batched(
                || xs.clone(),
                |mut xs| qsort_with(&mut xs, &mut RandomPivot::seeded(0x5EED)),
                BatchSize::LargeInput,
            );
        });

        group.bench_function("qsort median of three", |b| {
            b.iter_batched(
                || xs.clone(),
                |mut xs| qsort_with(&mut xs, &mut MedianOfThree),
                BatchSize::LargeInput,
            );
        });

        group.bench_function("std sort_unstable", |b| {
            b.iter_batched(|| xs.clone(), |mut xs| xs.sort_unstable(), BatchSize::LargeInput);
        });

        group.finish();
    }
}
criterion_group!(benches, qsort_bench);
criterion_main!(benches);
