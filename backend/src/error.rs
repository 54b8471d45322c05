//! Error types for the layers around the generator kernel
//!
//! The kernel itself (diffusion, Weyl step, extraction) is total and never
//! fails. Errors only arise when parsing configuration, restoring
//! checkpoints, or writing a byte stream to a sink.

use thiserror::Error;

/// Errors produced outside the generator kernel
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Projection name not recognised
    #[error("Unknown projection '{0}' (expected high, high-reversed, low or low-reversed)")]
    UnknownProjection(String),

    /// Configuration could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Checkpoint (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Checkpoint contents do not match their recorded checksum
    #[error("Checkpoint checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// Output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_projection() {
        let err = GeneratorError::UnknownProjection("middle".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown projection 'middle' (expected high, high-reversed, low or low-reversed)"
        );
    }

    #[test]
    fn test_display_checksum_mismatch() {
        let err = GeneratorError::ChecksumMismatch {
            expected: "abc".to_string(),
            actual: "def".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Checkpoint checksum mismatch: expected abc, got def"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "sink full");
        let err: GeneratorError = io.into();
        assert!(matches!(err, GeneratorError::Io(_)));
    }
}
