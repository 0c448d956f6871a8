//! # projpair-core
//!
//! Pair-count histogram kernels for projected two-point correlation
//! functions.
//!
//! Given two spatially sorted particle batches (one grid cell each), the
//! kernels count point pairs into radial bins of projected separation `rp`,
//! keeping only pairs whose line-of-sight separation lies inside the `pimax`
//! window. This is the innermost O(N0·N1) loop of a `wp(rp)` estimator; grid
//! construction, periodic cell-pair enumeration and estimator normalization
//! live in the calling system.
//!
//! One algorithm, four instantiations: AVX-512F (8 × f64 lanes), AVX2
//! (4 × f64), NEON on aarch64 (2 × f64) and a width-1 scalar fallback, all
//! with bit-identical pair counts. The best tier is probed at runtime and
//! cached.
//!
//! ## Quick Start
//!
//! ```rust
//! use projpair_core::{count_pairs, PairHistogram, ParticleBatch, RadialBins, WrapOffsets};
//!
//! fn main() -> Result<(), projpair_core::PairCountError> {
//!     let bins = RadialBins::logarithmic(0.1, 25.0, 14)?;
//!     let mut hist = PairHistogram::new(&bins, true);
//!
//!     // One call per cell pair; z must be sorted ascending.
//!     let x = [0.0, 1.0, 2.5];
//!     let y = [0.0, 0.5, 1.0];
//!     let z = [0.0, 0.2, 0.9];
//!     let cell = ParticleBatch::new(&x, &y, &z);
//!     count_pairs(cell, cell, true, &bins, 40.0, WrapOffsets::ZERO, &mut hist)?;
//!
//!     let total = hist.total_pairs();
//!     # let _ = total;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod batch;
pub mod bins;
#[cfg(test)]
mod bins_tests;
pub mod error;
pub mod hist;
pub mod kernel;

pub use batch::{ParticleBatch, WrapOffsets};
pub use bins::RadialBins;
pub use error::PairCountError;
pub use hist::PairHistogram;
pub use kernel::{count_pairs, count_pairs_with_tier, KernelTier};
