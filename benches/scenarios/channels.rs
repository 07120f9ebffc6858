//! Benchmarks for interleaved multi-channel output.
//!
//! Voices evaluate once per frame and copy the value to every channel, so
//! cost should grow far slower than the channel count.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_tone::{LocalSynth, SynthConfig, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/channels");

    for &frames in BLOCK_SIZES {
        for channels in [1usize, 2, 6] {
            let config = SynthConfig::new().voices(4).waveform(Waveform::Triangle);
            let mut synth = LocalSynth::new(config).expect("valid bench config");
            for note in [57, 60, 64, 67] {
                synth.note_on(note, 1.0);
            }
            let mut buffer = vec![0.0f32; frames * channels];

            group.bench_with_input(
                BenchmarkId::new(format!("{channels}ch"), frames),
                &frames,
                |b, _| {
                    b.iter(|| {
                        buffer.fill(0.0);
                        synth.render_block(black_box(&mut buffer), channels);
                    })
                },
            );
        }
    }

    group.finish();
}
