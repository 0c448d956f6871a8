//! Scalar fallback tier.
//!
//! The width-1 instantiation of the generic algorithm: one pair at a time,
//! same sorted-z window, same descending bin search, same accumulation gate.
//! Always available, and the correctness baseline the vector tiers are
//! compared against.

use crate::batch::{ParticleBatch, WrapOffsets};
use crate::bins::RadialBins;
use crate::hist::LocalHistogram;

use super::generic;
use super::lanes::ScalarLane;

/// Counts pairs one at a time. Portable to every target.
pub(crate) fn count_pairs_scalar(
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    local: &mut LocalHistogram,
) {
    // SAFETY: the width-1 lane type uses no ISA extensions; the generic
    // algorithm's only unsafe surface is its lane operations.
    unsafe {
        generic::bin_pairs::<ScalarLane>(first, second, same_cell, bins, pimax, wrap, local);
    }
}
