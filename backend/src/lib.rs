//! weylmix Core - Rust Engine
//!
//! Deterministic Weyl-diffusion pseudorandom generator and the 32-bit views
//! of its stream that are fed to external statistical test batteries.
//!
//! # Architecture
//!
//! - **rng**: Diffusion function, Weyl accumulator and the 64-bit generator
//! - **output**: 32-bit projections, the niladic bit source, checkpoints and
//!   raw byte streams
//! - **analysis**: Avalanche measurement of the mixing function
//! - **config**: Serializable generator configuration
//!
//! # Critical Invariants
//!
//! 1. All arithmetic wraps; no operation in the kernel can fail
//! 2. The zero state reproduces the same stream on every run
//! 3. Generator state is owned per instance; nothing is global
//!
//! # Example
//! ```
//! use weylmix_core_rs::{BitSource, Projection};
//!
//! let mut source = BitSource::new(Projection::LowReversed);
//! let first: Vec<u32> = (0..4).map(|_| source.next_u32()).collect();
//! assert_eq!(first[0], 0x9547_385b);
//! ```

// Module declarations
pub mod analysis;
pub mod config;
pub mod error;
pub mod output;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use output::{
    checkpoint::GeneratorCheckpoint, high32, high32_reversed, join64, low32, low32_reversed,
    reverse32, source::BitSource, Projection,
};
pub use rng::{diffuse, undiffuse, Generator, Seed, WeylAccumulator, WEYL_INCREMENT};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn weylmix_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::source::PyBitSource>()?;
    m.add_function(wrap_pyfunction!(ffi::source::py_diffuse, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::source::py_undiffuse, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::source::py_reverse32, m)?)?;
    Ok(())
}
