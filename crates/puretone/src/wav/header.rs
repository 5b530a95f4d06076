//! WAVE header construction and serialization.

use crate::error::{ToneError, ToneResult};

use super::format::WavFormat;

/// Size of the serialized header in bytes.
pub const HEADER_LEN: usize = 44;

/// Audio format tag for integer PCM.
const AUDIO_FORMAT_PCM: u16 = 1;

/// Size of the fmt chunk body for PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// The fixed 44-byte RIFF/WAVE header.
///
/// Derived entirely from the stream format and the total data byte count;
/// never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    /// Overall file size minus the 8-byte RIFF preamble.
    pub file_size: u32,
    /// Audio format tag (1 = PCM integer).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes consumed per second of audio.
    pub byte_rate: u32,
    /// Bytes per sample frame across all channels.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the data chunk in bytes.
    pub data_size: u32,
}

impl WaveHeader {
    /// Builds a header for the given format and total data byte count.
    ///
    /// # Errors
    /// Returns [`ToneError::Overflow`] when the data byte count (or the
    /// RIFF file size derived from it) does not fit the format's 32-bit
    /// size fields. The size fields never wrap or truncate.
    pub fn build(format: &WavFormat, data_byte_count: u64) -> ToneResult<WaveHeader> {
        if data_byte_count > (u32::MAX as u64) - (HEADER_LEN as u64 - 8) {
            return Err(ToneError::Overflow {
                data_bytes: data_byte_count,
            });
        }
        let data_size = data_byte_count as u32;

        Ok(WaveHeader {
            file_size: (HEADER_LEN as u32 - 8) + data_size,
            audio_format: AUDIO_FORMAT_PCM,
            channels: format.channels,
            sample_rate: format.sample_rate,
            byte_rate: format.byte_rate(),
            block_align: format.block_align(),
            bits_per_sample: format.bit_depth.bits(),
            data_size,
        })
    }

    /// Serializes the header into its 44-byte wire form.
    ///
    /// Each field is written individually, little-endian, at its canonical
    /// offset.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];

        // RIFF preamble
        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[4..8].copy_from_slice(&self.file_size.to_le_bytes());
        bytes[8..12].copy_from_slice(b"WAVE");

        // fmt chunk
        bytes[12..16].copy_from_slice(b"fmt ");
        bytes[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        bytes[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());

        // data chunk
        bytes[36..40].copy_from_slice(b"data");
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        bytes
    }
}
