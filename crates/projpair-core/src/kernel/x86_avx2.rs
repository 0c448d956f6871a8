//! Narrow-vector tier: 4 × f64 lanes via AVX2 (x86_64 only).
//!
//! Same algorithm as the wide tier at half the lane width. AVX2 comparisons
//! yield vector masks, so mask tests and popcounts go through
//! `_mm256_movemask_pd`.

// SAFETY: Numeric casts in this file are intentional and safe:
// - `movemask` results occupy the low 4 bits only, so sign is never set.
// - All lanes are validated against the scalar tier by equivalence tests.
#![allow(clippy::cast_sign_loss)]

use std::arch::x86_64::*;

use crate::batch::{ParticleBatch, WrapOffsets};
use crate::bins::RadialBins;
use crate::hist::LocalHistogram;

use super::generic;
use super::lanes::PairLanes;

/// Four f64 lanes in one YMM register.
#[derive(Clone, Copy)]
pub(crate) struct F64x4(__m256d);

impl PairLanes for F64x4 {
    const WIDTH: usize = 4;

    // Comparison results stay in vector registers; a mask is an all-ones or
    // all-zeros lane pattern, reduced to bits only when counted or tested.
    type Mask = __m256d;
    type Array = [f64; 4];

    #[inline(always)]
    unsafe fn splat(value: f64) -> Self {
        Self(_mm256_set1_pd(value))
    }

    #[inline(always)]
    unsafe fn load(src: &[f64]) -> Self {
        debug_assert!(src.len() >= 4);
        Self(_mm256_loadu_pd(src.as_ptr()))
    }

    #[inline(always)]
    unsafe fn sub(self, other: Self) -> Self {
        Self(_mm256_sub_pd(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn add(self, other: Self) -> Self {
        Self(_mm256_add_pd(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn mul(self, other: Self) -> Self {
        Self(_mm256_mul_pd(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn sqrt(self) -> Self {
        Self(_mm256_sqrt_pd(self.0))
    }

    #[inline(always)]
    unsafe fn lt(self, other: Self) -> __m256d {
        _mm256_cmp_pd::<_CMP_LT_OS>(self.0, other.0)
    }

    #[inline(always)]
    unsafe fn ge(self, other: Self) -> __m256d {
        _mm256_cmp_pd::<_CMP_GE_OS>(self.0, other.0)
    }

    #[inline(always)]
    unsafe fn mask_and(a: __m256d, b: __m256d) -> __m256d {
        _mm256_and_pd(a, b)
    }

    #[inline(always)]
    unsafe fn mask_any(mask: __m256d) -> bool {
        _mm256_movemask_pd(mask) != 0
    }

    #[inline(always)]
    unsafe fn mask_count(mask: __m256d) -> u64 {
        u64::from((_mm256_movemask_pd(mask) as u32).count_ones())
    }

    #[inline(always)]
    unsafe fn select(mask: __m256d, if_set: Self, if_clear: Self) -> Self {
        Self(_mm256_blendv_pd(if_clear.0, if_set.0, mask))
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f64; 4] {
        let mut out = [0.0; 4];
        _mm256_storeu_pd(out.as_mut_ptr(), self.0);
        out
    }
}

/// AVX2 pair-binning kernel.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2 (runtime detection in the
/// dispatch layer).
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn count_pairs_avx2(
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    local: &mut LocalHistogram,
) {
    // SAFETY: AVX2 confirmed by the caller; the generic body inlines here and
    // compiles to 256-bit instructions.
    generic::bin_pairs::<F64x4>(first, second, same_cell, bins, pimax, wrap, local);
}
