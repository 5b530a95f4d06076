//! Sink writer for header and packed sample data.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::header::{WaveHeader, HEADER_LEN};

/// Writes a complete WAVE stream to a writer.
///
/// The 44 header bytes are written first, then the packed data, as one
/// logical operation. A failure at any point is returned immediately.
///
/// # Arguments
/// * `writer` - Output writer
/// * `header` - Header built for exactly `pcm_data.len()` data bytes
/// * `pcm_data` - Packed PCM samples
pub fn write_wave<W: Write>(
    writer: &mut W,
    header: &WaveHeader,
    pcm_data: &[u8],
) -> io::Result<()> {
    writer.write_all(&header.to_bytes())?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAVE stream to a byte vector.
pub fn write_wave_to_vec(header: &WaveHeader, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wave(&mut buffer, header, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Writes a WAVE stream to a file, creating or truncating it.
///
/// The file handle is flushed and released on every exit path. A partially
/// written file is left in place when a write fails; the error reports the
/// failure and cleanup is the caller's decision.
pub fn write_wave_file(path: &Path, header: &WaveHeader, pcm_data: &[u8]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_wave(&mut writer, header, pcm_data)?;
    writer.flush()
}
