//! 32-bit views of the 64-bit stream
//!
//! Multiplicative mixers are usually weakest in their low bits, and many
//! statistical tests are more sensitive to the high bits of a word. Feeding
//! each half of the output, in both bit orders, to the battery lets a
//! weakness concentrated in particular bit positions show up on its own.

pub mod checkpoint;
pub mod source;
pub mod stream;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Top 32 bits of `x`
#[must_use]
#[inline]
pub const fn high32(x: u64) -> u32 {
    (x >> 32) as u32
}

/// Bottom 32 bits of `x`
#[must_use]
#[inline]
pub const fn low32(x: u64) -> u32 {
    x as u32
}

/// Rebuild a 64-bit word from its halves
///
/// `join64(high32(x), low32(x)) == x` for every `x`.
#[must_use]
#[inline]
pub const fn join64(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Reverse the bit order of a 32-bit word
///
/// Swaps adjacent bits, then bit pairs, nibbles, bytes and finally the two
/// 16-bit halves. Applying it twice gives back the input.
///
/// # Example
/// ```
/// use weylmix_core_rs::output::reverse32;
///
/// assert_eq!(reverse32(1), 0x8000_0000);
/// assert_eq!(reverse32(0x1234_5678), 0x1e6a_2c48);
/// ```
#[must_use]
#[inline]
pub const fn reverse32(v: u32) -> u32 {
    let v = ((v >> 1) & 0x5555_5555) | ((v & 0x5555_5555) << 1);
    let v = ((v >> 2) & 0x3333_3333) | ((v & 0x3333_3333) << 2);
    let v = ((v >> 4) & 0x0f0f_0f0f) | ((v & 0x0f0f_0f0f) << 4);
    let v = ((v >> 8) & 0x00ff_00ff) | ((v & 0x00ff_00ff) << 8);
    (v >> 16) | (v << 16)
}

/// Top 32 bits of `x`, bit-reversed
#[must_use]
#[inline]
pub const fn high32_reversed(x: u64) -> u32 {
    reverse32(high32(x))
}

/// Bottom 32 bits of `x`, bit-reversed
#[must_use]
#[inline]
pub const fn low32_reversed(x: u64) -> u32 {
    reverse32(low32(x))
}

/// Which 32-bit view of a generator word is handed to the harness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    High,
    HighReversed,
    /// Low bits in natural order (the harness default)
    #[default]
    Low,
    LowReversed,
}

impl Projection {
    /// Every projection, in declaration order
    pub const ALL: [Projection; 4] = [
        Projection::High,
        Projection::HighReversed,
        Projection::Low,
        Projection::LowReversed,
    ];

    /// Map a generator word to the selected 32-bit view
    ///
    /// # Example
    /// ```
    /// use weylmix_core_rs::output::Projection;
    ///
    /// let x = 0x0000_0001_8000_0000;
    /// assert_eq!(Projection::High.apply(x), 1);
    /// assert_eq!(Projection::HighReversed.apply(x), 0x8000_0000);
    /// assert_eq!(Projection::Low.apply(x), 0x8000_0000);
    /// assert_eq!(Projection::LowReversed.apply(x), 1);
    /// ```
    #[must_use]
    #[inline]
    pub const fn apply(self, x: u64) -> u32 {
        match self {
            Projection::High => high32(x),
            Projection::HighReversed => high32_reversed(x),
            Projection::Low => low32(x),
            Projection::LowReversed => low32_reversed(x),
        }
    }

    /// Stable lowercase name, also accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Projection::High => "high",
            Projection::HighReversed => "high-reversed",
            Projection::Low => "low",
            Projection::LowReversed => "low-reversed",
        }
    }

    pub const fn is_reversed(self) -> bool {
        matches!(self, Projection::HighReversed | Projection::LowReversed)
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Projection {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Projection::ALL
            .into_iter()
            .find(|projection| projection.name() == s)
            .ok_or_else(|| GeneratorError::UnknownProjection(s.to_string()))
    }
}
