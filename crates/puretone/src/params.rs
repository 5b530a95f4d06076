//! Caller-supplied tone parameters.
//!
//! [`ToneParams`] is the immutable configuration for one render. It can be
//! built directly or deserialized from a JSON tone spec; optional fields
//! fall back to the defaults of the reference tool (48 kHz, 24-bit, mono).

use serde::{Deserialize, Serialize};

use crate::error::{ToneError, ToneResult};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Default sample width.
pub const DEFAULT_BIT_DEPTH: BitDepth = BitDepth::B24;

/// Default peak amplitude.
pub const DEFAULT_AMPLITUDE: u32 = 30_000_000;

/// Sample width of the packed PCM output.
///
/// Only byte-aligned widths are representable; anything else is rejected at
/// construction. Serializes as the numeric width in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum BitDepth {
    /// 8 bits per sample.
    B8,
    /// 16 bits per sample.
    B16,
    /// 24 bits per sample.
    B24,
    /// 32 bits per sample.
    B32,
}

impl BitDepth {
    /// Width in bits.
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::B8 => 8,
            BitDepth::B16 => 16,
            BitDepth::B24 => 24,
            BitDepth::B32 => 32,
        }
    }

    /// Width in bytes.
    pub const fn bytes(self) -> u16 {
        self.bits() / 8
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = ToneError;

    fn try_from(bits: u16) -> ToneResult<Self> {
        match bits {
            8 => Ok(BitDepth::B8),
            16 => Ok(BitDepth::B16),
            24 => Ok(BitDepth::B24),
            32 => Ok(BitDepth::B32),
            other => Err(ToneError::InvalidBitDepth { bits: other }),
        }
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> u16 {
        depth.bits()
    }
}

/// Parameters for one tone render.
///
/// The output is always mono PCM. Amplitude is deliberately not validated
/// against the sample width: callers that exceed the integer range of the
/// chosen width get two's-complement wraparound in the packed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneParams {
    /// Frequency of the tone in Hz (0 ≤ f ≤ sample_rate / 2).
    pub frequency: f64,
    /// Duration of the output in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Sample width of the packed output.
    #[serde(default = "default_bit_depth")]
    pub bit_depth: BitDepth,
    /// Peak amplitude as an integer magnitude.
    #[serde(default = "default_amplitude")]
    pub amplitude: u32,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_bit_depth() -> BitDepth {
    DEFAULT_BIT_DEPTH
}

fn default_amplitude() -> u32 {
    DEFAULT_AMPLITUDE
}

impl ToneParams {
    /// Creates parameters for a tone at the default sample rate, width, and
    /// amplitude.
    pub fn new(frequency: f64, duration_seconds: f64) -> Self {
        Self {
            frequency,
            duration_seconds,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Parses parameters from a JSON tone spec.
    pub fn from_json(json: &str) -> ToneResult<Self> {
        serde_json::from_str(json).map_err(|e| ToneError::spec(e.to_string()))
    }

    /// Highest representable frequency at the configured sample rate.
    pub fn nyquist_limit(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Number of samples the render will produce.
    ///
    /// N = round(sample_rate × duration_seconds).
    pub fn num_samples(&self) -> u64 {
        (self.duration_seconds * self.sample_rate as f64).round() as u64
    }

    /// Checks the preconditions for rendering.
    ///
    /// # Errors
    /// Returns the first violated precondition: non-positive or non-finite
    /// duration, zero sample rate, or a frequency outside [0, Nyquist].
    pub fn validate(&self) -> ToneResult<()> {
        if self.sample_rate == 0 {
            return Err(ToneError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ToneError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if !self.frequency.is_finite()
            || self.frequency < 0.0
            || self.frequency > self.nyquist_limit()
        {
            return Err(ToneError::InvalidFrequency {
                freq: self.frequency,
                nyquist: self.nyquist_limit(),
            });
        }
        Ok(())
    }
}
