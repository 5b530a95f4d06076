//! CLI argument definitions for the puretone command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// puretone - Pure sinusoidal WAVE file generator
#[derive(Parser)]
#[command(name = "puretone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a sine-wave WAV file
    Generate {
        /// Tone frequency in Hz
        #[arg(short, long, conflicts_with = "spec")]
        frequency: Option<f64>,

        /// Duration of the output in seconds
        #[arg(short, long, conflicts_with = "spec")]
        duration: Option<f64>,

        /// Path to a JSON tone spec (alternative to the individual flags)
        #[arg(short, long)]
        spec: Option<String>,

        /// Sample rate in Hz (default: 48000)
        #[arg(long, conflicts_with = "spec")]
        sample_rate: Option<u32>,

        /// Bits per sample: 8, 16, 24, or 32 (default: 24)
        #[arg(long, conflicts_with = "spec")]
        bits: Option<u16>,

        /// Peak amplitude as an integer magnitude (default: 30000000)
        #[arg(long, conflicts_with = "spec")]
        amplitude: Option<u32>,

        /// Output file path
        #[arg(short, long, default_value = "audio.wav")]
        output: String,
    },

    /// Validate a JSON tone spec without generating audio
    Validate {
        /// Path to the tone spec file
        #[arg(short, long)]
        spec: String,
    },
}
