//! puretone — pure sinusoidal tone synthesis with byte-exact WAVE output.
//!
//! This crate renders a single sine tone and serializes it into an
//! uncompressed PCM WAVE container (44-byte RIFF header + packed samples).
//!
//! # Overview
//!
//! Two components compose linearly:
//!
//! - [`oscillator::SineOscillator`] — a pure function of the absolute sample
//!   index; no phase accumulator, no state between calls.
//! - [`wav`] — the container encoder: header construction, little-endian
//!   sample packing (including 24-bit), and the sink writer.
//!
//! [`render()`] ties them together: Validate → Build Header → Generate
//! Samples → Pack → Write.
//!
//! # Determinism
//!
//! Rendering is fully deterministic. Given the same [`ToneParams`], the
//! output is byte-identical across runs, and every result carries a BLAKE3
//! hash of the packed PCM payload for validation.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! use puretone::{create_wave_file, ToneParams};
//!
//! let params = ToneParams::new(440.0, 2.0);
//! let rendered = create_wave_file(&params, Path::new("a440.wav"))?;
//! println!("PCM hash: {}", rendered.pcm_hash);
//! ```

pub mod error;
pub mod oscillator;
pub mod params;
pub mod render;
pub mod wav;

// Re-export main types at crate root
pub use error::{ToneError, ToneResult};
pub use params::{BitDepth, ToneParams};
pub use render::{create_wave_file, render, RenderedTone};
