//! Deterministic random number generation
//!
//! Weyl-sequence accumulator combined with a variable-shift multiplicative
//! diffusion. CRITICAL: any change that alters the output of `gen64` from
//! the zero state is a breaking change.

mod diffusion;
mod generator;
mod weyl;

pub use diffusion::{diffuse, undiffuse, DIFFUSE_MULTIPLIER, UNDIFFUSE_MULTIPLIER};
pub use generator::{Generator, Seed};
pub use weyl::{WeylAccumulator, WEYL_INCREMENT};
