//! Wide-vector tier: 8 × f64 lanes via AVX-512F (x86_64 only).
//!
//! Implements the lane capability trait for `__m512d` and provides the
//! `#[target_feature]` entry wrapper. Requires runtime AVX-512F detection
//! before calling.

// AVX-512 f64 intrinsics postdate the workspace MSRV floor; the dispatch
// layer keeps them behind runtime detection.
#![allow(clippy::incompatible_msrv)]

use std::arch::x86_64::*;

use crate::batch::{ParticleBatch, WrapOffsets};
use crate::bins::RadialBins;
use crate::hist::LocalHistogram;

use super::generic;
use super::lanes::PairLanes;

/// Eight f64 lanes in one ZMM register.
#[derive(Clone, Copy)]
pub(crate) struct F64x8(__m512d);

impl PairLanes for F64x8 {
    const WIDTH: usize = 8;

    // AVX-512 comparisons produce k-register bitmasks directly, so the mask
    // type is the 8-bit mask rather than a vector.
    type Mask = __mmask8;
    type Array = [f64; 8];

    #[inline(always)]
    unsafe fn splat(value: f64) -> Self {
        Self(_mm512_set1_pd(value))
    }

    #[inline(always)]
    unsafe fn load(src: &[f64]) -> Self {
        debug_assert!(src.len() >= 8);
        Self(_mm512_loadu_pd(src.as_ptr()))
    }

    #[inline(always)]
    unsafe fn sub(self, other: Self) -> Self {
        Self(_mm512_sub_pd(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn add(self, other: Self) -> Self {
        Self(_mm512_add_pd(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn mul(self, other: Self) -> Self {
        Self(_mm512_mul_pd(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn sqrt(self) -> Self {
        Self(_mm512_sqrt_pd(self.0))
    }

    #[inline(always)]
    unsafe fn lt(self, other: Self) -> __mmask8 {
        _mm512_cmp_pd_mask::<_CMP_LT_OS>(self.0, other.0)
    }

    #[inline(always)]
    unsafe fn ge(self, other: Self) -> __mmask8 {
        _mm512_cmp_pd_mask::<_CMP_GE_OS>(self.0, other.0)
    }

    #[inline(always)]
    unsafe fn mask_and(a: __mmask8, b: __mmask8) -> __mmask8 {
        a & b
    }

    #[inline(always)]
    unsafe fn mask_any(mask: __mmask8) -> bool {
        mask != 0
    }

    #[inline(always)]
    unsafe fn mask_count(mask: __mmask8) -> u64 {
        u64::from(mask.count_ones())
    }

    #[inline(always)]
    unsafe fn select(mask: __mmask8, if_set: Self, if_clear: Self) -> Self {
        Self(_mm512_mask_blend_pd(mask, if_clear.0, if_set.0))
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f64; 8] {
        let mut out = [0.0; 8];
        _mm512_storeu_pd(out.as_mut_ptr(), self.0);
        out
    }
}

/// AVX-512F pair-binning kernel.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F (runtime detection in the
/// dispatch layer).
#[target_feature(enable = "avx512f")]
pub(crate) unsafe fn count_pairs_avx512(
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    local: &mut LocalHistogram,
) {
    // SAFETY: AVX-512F confirmed by the caller; the generic body inlines here
    // and compiles to 512-bit instructions.
    generic::bin_pairs::<F64x8>(first, second, same_cell, bins, pimax, wrap, local);
}
