//! Benchmark for note to frequency conversion.

use std::hint::black_box;

use criterion::Criterion;
use saavy_tone::{note_to_freq, Tuning};

pub fn bench_pitch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/pitch");

    group.bench_function("note_to_freq/128", |b| {
        b.iter(|| {
            for note in 0..128 {
                black_box(note_to_freq(black_box(note)));
            }
        })
    });

    let tuning = Tuning::new(60, 256.0);
    group.bench_function("tuning/128", |b| {
        b.iter(|| {
            for note in 0..128 {
                black_box(tuning.frequency(black_box(note)));
            }
        })
    });

    group.finish();
}
