//! Checkpoint - Save/Load Bit Source State
//!
//! Lets a long statistical run pause and resume without replaying the
//! stream from the start.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored source continues the exact same stream
//! - **Integrity**: a checkpoint whose fields were altered is rejected

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::source::BitSource;
use super::Projection;
use crate::error::GeneratorError;
use crate::rng::{Generator, Seed};

/// Serializable snapshot of a [`BitSource`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorCheckpoint {
    /// Last produced word
    pub state: u64,

    /// Weyl accumulator value
    pub weyl: u64,

    /// Projection the source was exposing
    pub projection: Projection,

    /// SHA256 of the compact JSON of the fields above
    pub checksum: String,
}

/// Checksummed part of a checkpoint
#[derive(Serialize)]
struct CheckpointBody {
    state: u64,
    weyl: u64,
    projection: Projection,
}

impl GeneratorCheckpoint {
    /// Serialize to a JSON string
    ///
    /// # Errors
    /// Returns [`GeneratorError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GeneratorError> {
        serde_json::to_string(self).map_err(|e| {
            GeneratorError::Serialization(format!("Checkpoint serialization failed: {}", e))
        })
    }

    /// Parse from a JSON string
    ///
    /// The checksum is not checked here; [`BitSource::restore`] does that.
    ///
    /// # Errors
    /// Returns [`GeneratorError::Serialization`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(json).map_err(|e| {
            GeneratorError::Serialization(format!("Checkpoint deserialization failed: {}", e))
        })
    }

    /// Recompute the checksum and compare it with the stored one
    ///
    /// # Errors
    /// Returns [`GeneratorError::ChecksumMismatch`] if they differ.
    pub fn verify(&self) -> Result<(), GeneratorError> {
        let actual = compute_state_hash(&CheckpointBody {
            state: self.state,
            weyl: self.weyl,
            projection: self.projection,
        })?;

        if actual != self.checksum {
            warn!(expected = %self.checksum, actual = %actual, "checkpoint checksum mismatch");
            return Err(GeneratorError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }

        Ok(())
    }
}

impl BitSource {
    /// Capture the current state
    ///
    /// # Errors
    /// Returns [`GeneratorError::Serialization`] if the checksum cannot be
    /// computed.
    ///
    /// # Example
    /// ```
    /// use weylmix_core_rs::{BitSource, Projection};
    ///
    /// let mut source = BitSource::new(Projection::Low);
    /// source.next_u32();
    ///
    /// let checkpoint = source.checkpoint().unwrap();
    /// let mut resumed = BitSource::restore(&checkpoint).unwrap();
    /// assert_eq!(source.next_u32(), resumed.next_u32());
    /// ```
    pub fn checkpoint(&self) -> Result<GeneratorCheckpoint, GeneratorError> {
        let seed = self.seed();
        let body = CheckpointBody {
            state: seed.state,
            weyl: seed.weyl,
            projection: self.projection(),
        };
        let checksum = compute_state_hash(&body)?;

        Ok(GeneratorCheckpoint {
            state: body.state,
            weyl: body.weyl,
            projection: body.projection,
            checksum,
        })
    }

    /// Rebuild a source from a checkpoint
    ///
    /// # Errors
    /// Returns [`GeneratorError::ChecksumMismatch`] if the checkpoint was
    /// altered after it was taken.
    pub fn restore(checkpoint: &GeneratorCheckpoint) -> Result<Self, GeneratorError> {
        checkpoint.verify()?;

        debug!(
            state = checkpoint.state,
            weyl = checkpoint.weyl,
            projection = %checkpoint.projection,
            "restored bit source from checkpoint"
        );

        Ok(BitSource::from_parts(
            Generator::with_seed(Seed::new(checkpoint.state, checkpoint.weyl)),
            checkpoint.projection,
        ))
    }
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a serializable value
///
/// Hashes the compact JSON encoding. Struct fields serialize in declaration
/// order, so the digest is stable for a given type.
pub fn compute_state_hash<T: Serialize>(value: &T) -> Result<String, GeneratorError> {
    let json = serde_json::to_vec(value).map_err(|e| {
        GeneratorError::Serialization(format!("State serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&json);

    Ok(format!("{:x}", hasher.finalize()))
}
