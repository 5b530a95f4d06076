//! Generate command implementation
//!
//! Resolves tone parameters from CLI flags or a JSON tone spec, renders the
//! tone, and writes the WAV file.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use puretone::params::{DEFAULT_AMPLITUDE, DEFAULT_BIT_DEPTH, DEFAULT_SAMPLE_RATE};
use puretone::{create_wave_file, BitDepth, ToneParams};

/// Run the generate command
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz (required unless `spec_path` is given)
/// * `duration` - Output duration in seconds (required unless `spec_path` is given)
/// * `spec_path` - Optional JSON tone spec supplying the full parameter set
/// * `sample_rate` - Sample rate in Hz (default: 48000)
/// * `bits` - Bits per sample (default: 24)
/// * `amplitude` - Peak amplitude (default: 30000000)
/// * `output` - Output file path
///
/// # Returns
/// Exit code: 0 success, 1 invalid parameters or I/O failure
pub fn run(
    frequency: Option<f64>,
    duration: Option<f64>,
    spec_path: Option<&str>,
    sample_rate: Option<u32>,
    bits: Option<u16>,
    amplitude: Option<u32>,
    output: &str,
) -> Result<ExitCode> {
    let params = resolve_params(frequency, duration, spec_path, sample_rate, bits, amplitude)?;

    println!(
        "{} {} Hz for {} s at {} Hz / {}-bit",
        "Generating tone:".cyan().bold(),
        params.frequency,
        params.duration_seconds,
        params.sample_rate,
        params.bit_depth.bits(),
    );

    let rendered = create_wave_file(&params, Path::new(output))
        .with_context(|| format!("Failed to generate {}", output))?;

    println!(
        "{} {} ({} bytes, {} samples)",
        "Wrote:".green().bold(),
        output,
        rendered.wav_data.len(),
        rendered.num_samples,
    );
    println!("{} {}", "PCM hash:".dimmed(), rendered.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

/// Builds [`ToneParams`] from a spec file or from individual flags.
fn resolve_params(
    frequency: Option<f64>,
    duration: Option<f64>,
    spec_path: Option<&str>,
    sample_rate: Option<u32>,
    bits: Option<u16>,
    amplitude: Option<u32>,
) -> Result<ToneParams> {
    if let Some(path) = spec_path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tone spec: {}", path))?;
        return Ok(ToneParams::from_json(&json)?);
    }

    let (Some(frequency), Some(duration)) = (frequency, duration) else {
        bail!("--frequency and --duration are required unless --spec is given");
    };

    Ok(ToneParams {
        frequency,
        duration_seconds: duration,
        sample_rate: sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE),
        bit_depth: match bits {
            Some(bits) => BitDepth::try_from(bits)?,
            None => DEFAULT_BIT_DEPTH,
        },
        amplitude: amplitude.unwrap_or(DEFAULT_AMPLITUDE),
    })
}
