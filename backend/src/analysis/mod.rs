//! Offline quality checks for the mixing function
//!
//! Not used by the generator itself.

mod avalanche;

pub use avalanche::{avalanche, AvalancheReport};
