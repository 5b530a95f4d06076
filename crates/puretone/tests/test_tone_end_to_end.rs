//! End-to-end tests: parameters in, finished WAVE file on disk out.

use pretty_assertions::assert_eq;

use puretone::{create_wave_file, render, BitDepth, ToneError, ToneParams};

/// The reference scenario: 1 kHz for 5 s at 48 kHz / 24-bit, amplitude 300000.
fn reference_params() -> ToneParams {
    let mut params = ToneParams::new(1000.0, 5.0);
    params.amplitude = 300_000;
    params
}

#[test]
fn test_reference_scenario_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio.wav");

    let rendered = create_wave_file(&reference_params(), &path).unwrap();
    let wav = std::fs::read(&path).unwrap();

    // 44-byte header + 48000 × 5 × 3 bytes of data
    assert_eq!(wav.len(), 720_044);
    assert_eq!(wav, rendered.wav_data);

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 720_036);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        48_000
    );
    assert_eq!(
        u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
        144_000
    );
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 3);
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 24);
    assert_eq!(
        u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]),
        720_000
    );

    // First sample is sin(0) = 0, packed little-endian
    assert_eq!(&wav[44..47], &[0, 0, 0]);
}

#[test]
fn test_file_matches_in_memory_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio.wav");

    let written = create_wave_file(&reference_params(), &path).unwrap();
    let in_memory = render(&reference_params()).unwrap();

    assert_eq!(written.pcm_hash, in_memory.pcm_hash);
    assert_eq!(std::fs::read(&path).unwrap(), in_memory.wav_data);
}

#[test]
fn test_invalid_duration_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio.wav");

    let err = create_wave_file(&ToneParams::new(1000.0, 0.0), &path).unwrap_err();

    assert!(matches!(err, ToneError::InvalidDuration { .. }));
    assert!(!path.exists());
}

#[test]
fn test_invalid_duration_does_not_truncate_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audio.wav");
    std::fs::write(&path, b"keep me").unwrap();

    create_wave_file(&ToneParams::new(1000.0, -2.5), &path).unwrap_err();

    assert_eq!(std::fs::read(&path).unwrap(), b"keep me");
}

#[test]
fn test_unwritable_destination_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("audio.wav");

    let err = create_wave_file(&reference_params(), &path).unwrap_err();
    assert!(matches!(err, ToneError::Io(_)));
}

#[test]
fn test_spec_driven_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beep.wav");

    let params = ToneParams::from_json(
        r#"{
            "frequency": 880.0,
            "duration_seconds": 0.25,
            "sample_rate": 44100,
            "bit_depth": 16,
            "amplitude": 12000
        }"#,
    )
    .unwrap();

    let rendered = create_wave_file(&params, &path).unwrap();

    assert_eq!(rendered.bit_depth, BitDepth::B16);
    // round(44100 × 0.25) = 11025 samples × 2 bytes
    assert_eq!(rendered.num_samples, 11_025);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 44 + 22_050);
}
