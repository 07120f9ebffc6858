//! tonegen - play the tone generator from the keyboard
//!
//! Run with: cargo run -- [WAVEFORM] [--voices N] [--gain G] [--arp]
//!
//! Keys A W S E D F T G Z H U J K play one chromatic octave. Q or Esc quits.
//! `--arp` adds an arpeggiator that climbs one semitone every half second.

mod app;
mod arpeggiator;
mod keyboard;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::Tonegen;
use saavy_tone::Waveform;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut app = Tonegen::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--voices" => {
                let value = args.next().ok_or_else(|| eyre!("--voices needs a value"))?;
                let voices = value
                    .parse()
                    .wrap_err_with(|| format!("invalid voice count `{value}`"))?;
                app = app.voices(voices);
            }
            "--gain" => {
                let value = args.next().ok_or_else(|| eyre!("--gain needs a value"))?;
                let gain = value
                    .parse()
                    .wrap_err_with(|| format!("invalid gain `{value}`"))?;
                app = app.gain(gain);
            }
            "--arp" => app = app.arpeggiate(true),
            other => app = app.waveform(other.parse::<Waveform>()?),
        }
    }

    app.run()
}
