//! Benchmarks for pools of increasing size.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_tone::{LocalSynth, SynthConfig, Waveform};

use crate::BLOCK_SIZES;

fn chord_pool(voices: usize, waveform: Waveform) -> LocalSynth {
    let config = SynthConfig::new()
        .voices(voices)
        .waveform(waveform)
        .gain(1.0 / voices as f32);
    let mut synth = LocalSynth::new(config).expect("valid bench config");
    for i in 0..voices {
        synth.note_on(48 + 4 * i as i32, 1.0);
    }
    synth
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === SINGLE VOICE ===
        // The original one-oscillator instrument
        let mut mono = chord_pool(1, Waveform::Sine);
        group.bench_with_input(BenchmarkId::new("sine_x1", size), &size, |b, _| {
            b.iter(|| {
                buffer.fill(0.0);
                mono.render_block(black_box(&mut buffer), 1);
            })
        });

        // === CHORD ===
        let mut chord = chord_pool(8, Waveform::Sine);
        group.bench_with_input(BenchmarkId::new("sine_x8", size), &size, |b, _| {
            b.iter(|| {
                buffer.fill(0.0);
                chord.render_block(black_box(&mut buffer), 1);
            })
        });

        // === WORST CASE ===
        // Every voice busy, each drawing noise
        let mut dense = chord_pool(32, Waveform::Noise);
        group.bench_with_input(BenchmarkId::new("noise_x32", size), &size, |b, _| {
            b.iter(|| {
                buffer.fill(0.0);
                dense.render_block(black_box(&mut buffer), 1);
            })
        });
    }

    group.finish();
}
