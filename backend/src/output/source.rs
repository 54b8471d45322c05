//! Niladic 32-bit source handed to the statistical harness
//!
//! From the harness's point of view this is a black-box bitstream: one call,
//! no arguments, one `u32` back. The projection is fixed when the source is
//! built.

use tracing::debug;

use super::Projection;
use crate::config::GeneratorConfig;
use crate::rng::{Generator, Seed};

/// Generator paired with the projection that turns its words into `u32`s
///
/// Saved and restored only through [`BitSource::checkpoint`].
///
/// # Example
/// ```
/// use weylmix_core_rs::{BitSource, Projection};
///
/// let mut source = BitSource::new(Projection::Low);
/// assert_eq!(source.next_u32(), 0xda1c_e2a9);
/// assert_eq!(source.next_u32(), 0xe923_a86e);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSource {
    generator: Generator,
    projection: Projection,
}

impl BitSource {
    /// Create a zero-seeded source exposing `projection`
    pub fn new(projection: Projection) -> Self {
        Self::from_parts(Generator::new(), projection)
    }

    /// Create a source from an existing generator
    pub fn from_parts(generator: Generator, projection: Projection) -> Self {
        Self {
            generator,
            projection,
        }
    }

    /// Create a source from configuration
    ///
    /// # Example
    /// ```
    /// use weylmix_core_rs::{BitSource, GeneratorConfig, Projection, Seed};
    ///
    /// let config = GeneratorConfig::new(Seed::ZERO, Projection::High);
    /// let mut source = BitSource::from_config(&config);
    /// assert_eq!(source.next_u32(), 0xb5ad_4ece);
    /// ```
    pub fn from_config(config: &GeneratorConfig) -> Self {
        debug!(
            projection = %config.projection,
            seed_state = config.seed.state,
            seed_weyl = config.seed.weyl,
            reference = config.is_reference(),
            "building bit source"
        );
        Self::from_parts(Generator::with_seed(config.seed), config.projection)
    }

    /// Produce the next 32-bit word
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.projection.apply(self.generator.gen64())
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut Generator {
        &mut self.generator
    }

    /// Current starting point, for resuming the stream elsewhere
    pub fn seed(&self) -> Seed {
        self.generator.seed()
    }
}

impl Iterator for BitSource {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
