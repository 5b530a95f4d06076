//! Main entry point for tone rendering.
//!
//! A linear pipeline with no intermediate persisted state:
//! Validate → Build Header → Generate Samples → Pack → Write. Every
//! precondition (including the 32-bit container size limit) is checked
//! before the first sample is generated.

use std::path::Path;

use crate::error::ToneResult;
use crate::oscillator::SineOscillator;
use crate::params::{BitDepth, ToneParams};
use crate::wav::{pack_samples, write_wave_file, write_wave_to_vec, WavFormat, WaveHeader};

/// Result of rendering a tone.
#[derive(Debug)]
pub struct RenderedTone {
    /// Complete WAVE file bytes (header + packed data).
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the packed PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample width of the packed data.
    pub bit_depth: BitDepth,
    /// Number of samples rendered.
    pub num_samples: usize,
}

impl RenderedTone {
    fn from_parts(params: &ToneParams, header: &WaveHeader, pcm: Vec<u8>) -> Self {
        Self {
            pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
            num_samples: pcm.len() / params.bit_depth.bytes() as usize,
            wav_data: write_wave_to_vec(header, &pcm),
            sample_rate: params.sample_rate,
            bit_depth: params.bit_depth,
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Renders a tone to an in-memory WAVE file.
///
/// # Arguments
/// * `params` - Tone parameters
///
/// # Returns
/// The complete WAVE file bytes plus render metadata
pub fn render(params: &ToneParams) -> ToneResult<RenderedTone> {
    let (header, pcm) = render_parts(params)?;
    Ok(RenderedTone::from_parts(params, &header, pcm))
}

/// Renders a tone and writes it to a file.
///
/// The destination is created or truncated only after all preconditions
/// pass; an invalid request never touches the filesystem. On a write
/// failure the partially written file is left in place.
///
/// # Arguments
/// * `params` - Tone parameters
/// * `path` - Destination file path
///
/// # Returns
/// The same metadata as [`render`]
pub fn create_wave_file(params: &ToneParams, path: &Path) -> ToneResult<RenderedTone> {
    let (header, pcm) = render_parts(params)?;
    write_wave_file(path, &header, &pcm)?;
    Ok(RenderedTone::from_parts(params, &header, pcm))
}

/// Validates, sizes, generates, and packs; the shared front of the pipeline.
fn render_parts(params: &ToneParams) -> ToneResult<(WaveHeader, Vec<u8>)> {
    params.validate()?;

    let format = WavFormat::mono(params.sample_rate, params.bit_depth);
    let num_samples = params.num_samples();
    let data_bytes = num_samples.saturating_mul(u64::from(format.block_align()));

    // Fails on oversized output before any generation work happens.
    let header = WaveHeader::build(&format, data_bytes)?;

    let oscillator = SineOscillator::new(params.amplitude, params.frequency, params.sample_rate);
    let samples: Vec<i32> = (0..num_samples).map(|i| oscillator.sample_at(i)).collect();
    let pcm = pack_samples(&samples, params.bit_depth);
    debug_assert_eq!(pcm.len() as u64, data_bytes);

    Ok((header, pcm))
}
