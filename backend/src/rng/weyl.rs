//! Weyl sequence accumulator
//!
//! Adds a fixed odd increment modulo 2^64 on every step. An odd increment is
//! coprime with 2^64, so the accumulator visits every 64-bit value exactly
//! once before returning to its start. This bounds the period of the whole
//! generator from below regardless of how well the diffusion mixes.

use serde::{Deserialize, Serialize};

/// Odd increment added to the accumulator on every step
pub const WEYL_INCREMENT: u64 = 0xb5ad_4ece_da1c_e2a9;

/// Full-period additive counter
///
/// # Example
/// ```
/// use weylmix_core_rs::rng::{WeylAccumulator, WEYL_INCREMENT};
///
/// let mut weyl = WeylAccumulator::default();
/// assert_eq!(weyl.next(), WEYL_INCREMENT);
/// assert_eq!(weyl.next(), WEYL_INCREMENT.wrapping_mul(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeylAccumulator(u64);

impl WeylAccumulator {
    /// Create an accumulator starting at `start`
    pub const fn new(start: u64) -> Self {
        Self(start)
    }

    /// Advance by [`WEYL_INCREMENT`] and return the new value
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(WEYL_INCREMENT);
        self.0
    }

    /// Current accumulator value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_is_odd() {
        assert_eq!(WEYL_INCREMENT % 2, 1);
    }

    #[test]
    fn test_next_wraps_instead_of_overflowing() {
        let mut weyl = WeylAccumulator::new(u64::MAX);
        assert_eq!(weyl.next(), WEYL_INCREMENT - 1);
        assert_eq!(weyl.value(), WEYL_INCREMENT - 1);
    }

    #[test]
    fn test_next_from_arbitrary_start() {
        let mut weyl = WeylAccumulator::new(42);
        assert_eq!(weyl.next(), 42u64.wrapping_add(WEYL_INCREMENT));
    }
}
