//! Benchmarks for waveform evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use saavy_tone::{NoiseSource, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let increment = std::f64::consts::TAU * 440.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut rng = NoiseSource::seed_from_u64(1);

        // Sine - sin() per sample
        // Square - sin() plus a branch
        // Triangle - floor and abs
        // Sawtooth - one division
        // Noise - PCG draw
        for waveform in Waveform::ALL {
            group.bench_with_input(BenchmarkId::new(waveform.name(), size), &size, |b, _| {
                b.iter(|| {
                    let mut phase = 0.0f64;
                    for out in buffer.iter_mut() {
                        phase = (phase + increment) % std::f64::consts::TAU;
                        *out = black_box(waveform).evaluate(phase, 0.5, &mut rng);
                    }
                    black_box(&buffer);
                })
            });
        }
    }

    group.finish();
}
