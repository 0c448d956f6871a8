//! Narrow tier on aarch64: 2 × f64 lanes via NEON.
//!
//! NEON is always available on aarch64, so no runtime detection is needed.
//! Comparisons yield per-lane all-ones/all-zeros `u64` patterns; the lane
//! popcount reads the sign bits.

use std::arch::aarch64::*;

use crate::batch::{ParticleBatch, WrapOffsets};
use crate::bins::RadialBins;
use crate::hist::LocalHistogram;

use super::generic;
use super::lanes::PairLanes;

/// Two f64 lanes in one NEON register.
#[derive(Clone, Copy)]
pub(crate) struct F64x2(float64x2_t);

impl PairLanes for F64x2 {
    const WIDTH: usize = 2;

    type Mask = uint64x2_t;
    type Array = [f64; 2];

    #[inline(always)]
    unsafe fn splat(value: f64) -> Self {
        Self(vdupq_n_f64(value))
    }

    #[inline(always)]
    unsafe fn load(src: &[f64]) -> Self {
        debug_assert!(src.len() >= 2);
        Self(vld1q_f64(src.as_ptr()))
    }

    #[inline(always)]
    unsafe fn sub(self, other: Self) -> Self {
        Self(vsubq_f64(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn add(self, other: Self) -> Self {
        Self(vaddq_f64(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn mul(self, other: Self) -> Self {
        Self(vmulq_f64(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn sqrt(self) -> Self {
        Self(vsqrtq_f64(self.0))
    }

    #[inline(always)]
    unsafe fn lt(self, other: Self) -> uint64x2_t {
        vcltq_f64(self.0, other.0)
    }

    #[inline(always)]
    unsafe fn ge(self, other: Self) -> uint64x2_t {
        vcgeq_f64(self.0, other.0)
    }

    #[inline(always)]
    unsafe fn mask_and(a: uint64x2_t, b: uint64x2_t) -> uint64x2_t {
        vandq_u64(a, b)
    }

    #[inline(always)]
    unsafe fn mask_any(mask: uint64x2_t) -> bool {
        // No 64-bit horizontal max in NEON; OR the two lanes instead.
        (vgetq_lane_u64::<0>(mask) | vgetq_lane_u64::<1>(mask)) != 0
    }

    #[inline(always)]
    unsafe fn mask_count(mask: uint64x2_t) -> u64 {
        // Each set lane is all-ones; the sign bit is 1 exactly for set lanes.
        (vgetq_lane_u64::<0>(mask) >> 63) + (vgetq_lane_u64::<1>(mask) >> 63)
    }

    #[inline(always)]
    unsafe fn select(mask: uint64x2_t, if_set: Self, if_clear: Self) -> Self {
        Self(vbslq_f64(mask, if_set.0, if_clear.0))
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f64; 2] {
        [vgetq_lane_f64::<0>(self.0), vgetq_lane_f64::<1>(self.0)]
    }
}

/// NEON pair-binning kernel.
///
/// # Safety
///
/// NEON is guaranteed on aarch64; the unsafety is the lane operations
/// themselves.
pub(crate) unsafe fn count_pairs_neon(
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    local: &mut LocalHistogram,
) {
    // SAFETY: NEON intrinsics are always available on aarch64.
    generic::bin_pairs::<F64x2>(first, second, same_cell, bins, pimax, wrap, local);
}
