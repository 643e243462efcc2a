use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sleep_engine::{calculate, parse, MinuteOfDay, Mode};

fn bench_calculate(c: &mut Criterion) {
    let now = MinuteOfDay::from_hm(22, 0).unwrap_or_default();

    c.bench_function("calculate_bedtime", |b| {
        b.iter(|| calculate(black_box("23:30"), Mode::Bedtime, now))
    });
    c.bench_function("calculate_waketime_compact", |b| {
        b.iter(|| calculate(black_box("700"), Mode::WakeTime, now))
    });
    c.bench_function("parse_noisy_input", |b| {
        b.iter(|| parse(black_box("  7:30 pm ")))
    });
}

criterion_group!(benches, bench_calculate);
criterion_main!(benches);
