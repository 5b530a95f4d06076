//! Validate command implementation
//!
//! Loads a JSON tone spec and checks its preconditions without rendering.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use puretone::{ToneParams, ToneResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the tone spec file
///
/// # Returns
/// Exit code: 0 valid, 1 unparsable or invalid parameters
pub fn run(spec_path: &str) -> Result<ExitCode> {
    let json = std::fs::read_to_string(spec_path)
        .with_context(|| format!("Failed to read tone spec: {}", spec_path))?;

    match check_spec(&json) {
        Ok(params) => {
            println!(
                "{} {} Hz for {} s at {} Hz / {}-bit, amplitude {}",
                "OK".green().bold(),
                params.frequency,
                params.duration_seconds,
                params.sample_rate,
                params.bit_depth.bits(),
                params.amplitude,
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{} {}", "FAILED".red().bold(), e);
            Ok(ExitCode::from(1))
        }
    }
}

/// Parses and validates a JSON tone spec.
fn check_spec(json: &str) -> ToneResult<ToneParams> {
    let params = ToneParams::from_json(json)?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puretone::ToneError;

    #[test]
    fn test_check_spec_accepts_valid_spec() {
        let params = check_spec(r#"{"frequency": 440.0, "duration_seconds": 1.0}"#).unwrap();
        assert_eq!(params.frequency, 440.0);
    }

    #[test]
    fn test_check_spec_rejects_bad_parameters() {
        let err = check_spec(r#"{"frequency": 440.0, "duration_seconds": -1.0}"#).unwrap_err();
        assert!(matches!(err, ToneError::InvalidDuration { .. }));
    }

    #[test]
    fn test_check_spec_rejects_unparsable_input() {
        let err = check_spec("{").unwrap_err();
        assert!(matches!(err, ToneError::Spec { .. }));
    }

    #[test]
    fn test_run_reports_valid_and_invalid_specs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.json");

        std::fs::write(&path, r#"{"frequency": 440.0, "duration_seconds": 1.0}"#).unwrap();
        assert!(run(path.to_str().unwrap()).is_ok());

        std::fs::write(&path, r#"{"frequency": -1.0, "duration_seconds": 1.0}"#).unwrap();
        assert!(run(path.to_str().unwrap()).is_ok()); // failure is an exit code, not an Err

        assert!(run("no-such-spec.json").is_err());
    }
}
