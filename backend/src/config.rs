//! Generator configuration
//!
//! Both fields default, so an empty JSON object describes the reference
//! setup: zero seed, low 32 bits in natural order.

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::output::Projection;
use crate::rng::Seed;

/// Configuration for a [`BitSource`](crate::output::source::BitSource)
///
/// # Example
/// ```
/// use weylmix_core_rs::{GeneratorConfig, Projection, Seed};
///
/// let config = GeneratorConfig::from_json(r#"{"projection": "high-reversed"}"#).unwrap();
/// assert_eq!(config.projection, Projection::HighReversed);
/// assert_eq!(config.seed, Seed::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Starting point (zero unless set)
    #[serde(default)]
    pub seed: Seed,

    /// 32-bit view exposed to the harness
    #[serde(default)]
    pub projection: Projection,
}

impl GeneratorConfig {
    pub fn new(seed: Seed, projection: Projection) -> Self {
        Self { seed, projection }
    }

    /// Parse a configuration from JSON
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidConfig`] if the text is not valid
    /// JSON, has unknown fields, or names an unknown projection.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(json).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))
    }

    /// True if this is the zero-seed reference configuration for its projection
    pub fn is_reference(&self) -> bool {
        self.seed == Seed::ZERO
    }
}
