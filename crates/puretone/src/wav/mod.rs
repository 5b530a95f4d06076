//! Byte-exact RIFF/WAVE container encoding.
//!
//! This module produces the canonical 44-byte PCM WAVE header and the packed
//! little-endian sample data, and writes both to a sink. Every field is
//! serialized individually at its fixed offset; nothing relies on in-memory
//! struct layout. Output carries no timestamps or variable metadata, so a
//! given input always yields byte-identical files.

mod format;
mod header;
mod pcm;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use header::{WaveHeader, HEADER_LEN};
pub use pcm::{pack_samples, unpack_samples};
pub use writer::{write_wave, write_wave_file, write_wave_to_vec};
