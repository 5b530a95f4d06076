//! Error types for tone generation.

use thiserror::Error;

/// Result type for tone operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Errors that can occur while rendering a tone or writing its container.
#[derive(Debug, Error)]
pub enum ToneError {
    /// Invalid duration.
    #[error("invalid duration: {duration} seconds (must be greater than 0)")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Frequency outside the representable range for the sample rate.
    #[error("invalid frequency: {freq} Hz (must be between 0 and {nyquist} Hz)")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
        /// Nyquist limit for the configured sample rate.
        nyquist: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Unsupported sample width.
    #[error("invalid bits per sample: {bits} (expected 8, 16, 24, or 32)")]
    InvalidBitDepth {
        /// The rejected width in bits.
        bits: u16,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Computed data size does not fit the 32-bit WAVE size fields.
    #[error("data size {data_bytes} bytes exceeds the 32-bit WAVE format limit")]
    Overflow {
        /// The computed data byte count.
        data_bytes: u64,
    },

    /// Unparsable tone spec.
    #[error("invalid tone spec: {message}")]
    Spec {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToneError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a tone spec error.
    pub fn spec(message: impl Into<String>) -> Self {
        Self::Spec {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = ToneError::invalid_param("amplitude", "must be non-zero");
        assert!(err.to_string().contains("amplitude"));
        assert!(err.to_string().contains("must be non-zero"));
    }

    #[test]
    fn test_spec_helper() {
        let err = ToneError::spec("missing field `frequency`");
        assert!(err.to_string().contains("missing field `frequency`"));
    }

    #[test]
    fn test_overflow_message_carries_size() {
        let err = ToneError::Overflow {
            data_bytes: 4_294_967_296,
        };
        assert!(err.to_string().contains("4294967296"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = ToneError::from(io);
        assert!(matches!(err, ToneError::Io(_)));
        assert!(err.to_string().contains("no such directory"));
    }
}
