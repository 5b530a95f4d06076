//! PCM sample packing.

use crate::params::BitDepth;

/// Packs signed samples into little-endian PCM bytes.
///
/// Each sample occupies exactly `bit_depth.bytes()` bytes: the low-order
/// bytes of its two's-complement representation, least significant first
/// (24-bit emits low, mid, high). Values wider than the target width wrap
/// around rather than clip; no padding or dithering is applied.
pub fn pack_samples(samples: &[i32], bit_depth: BitDepth) -> Vec<u8> {
    let width = bit_depth.bytes() as usize;
    let mut pcm = Vec::with_capacity(samples.len() * width);

    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes()[..width]);
    }

    pcm
}

/// Unpacks little-endian PCM bytes back into sign-extended samples.
///
/// The inverse of [`pack_samples`] up to the truncation it performs: a
/// packed value is recovered as the sign-extension of its low
/// `bit_depth.bits()` bits. Trailing bytes that do not form a whole sample
/// are ignored.
pub fn unpack_samples(pcm: &[u8], bit_depth: BitDepth) -> Vec<i32> {
    let width = bit_depth.bytes() as usize;
    let shift = 32 - bit_depth.bits() as u32;
    let mut samples = Vec::with_capacity(pcm.len() / width);

    for chunk in pcm.chunks_exact(width) {
        let mut bytes = [0u8; 4];
        bytes[..width].copy_from_slice(chunk);
        samples.push(i32::from_le_bytes(bytes) << shift >> shift);
    }

    samples
}
