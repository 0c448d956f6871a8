//! Lane-width capability interface shared by every kernel tier.
//!
//! The pair-binning algorithm is written once, generic over [`PairLanes`].
//! Each ISA module implements the trait for its register type; the width-1
//! implementation below degenerates into the scalar fallback tier. This keeps
//! the three tiers from drifting apart: they differ only in how a lane group
//! is loaded, compared, blended and reduced.

/// Capability interface for one SIMD lane group of `f64` values.
///
/// # Safety
///
/// Every method may only be called when the implementing type's instruction
/// set is available on the running CPU (enforced by the `#[target_feature]`
/// entry wrappers in the ISA modules). The width-1 implementation has no such
/// requirement.
pub(crate) trait PairLanes: Copy {
    /// Number of `f64` values per lane group.
    const WIDTH: usize;

    /// Per-lane comparison result.
    type Mask: Copy;

    /// Fixed-size lane array used for extraction (`[f64; WIDTH]`).
    type Array: AsRef<[f64]>;

    /// Broadcasts a scalar into every lane.
    unsafe fn splat(value: f64) -> Self;

    /// Unaligned load of the first `WIDTH` values of `src`.
    ///
    /// `src.len() >= WIDTH` is the caller's responsibility (checked in debug
    /// builds by the implementations).
    unsafe fn load(src: &[f64]) -> Self;

    /// Lane-wise `self - other`.
    unsafe fn sub(self, other: Self) -> Self;

    /// Lane-wise `self + other`.
    unsafe fn add(self, other: Self) -> Self;

    /// Lane-wise `self * other`.
    unsafe fn mul(self, other: Self) -> Self;

    /// Lane-wise square root.
    unsafe fn sqrt(self) -> Self;

    /// Lane-wise `self < other`.
    unsafe fn lt(self, other: Self) -> Self::Mask;

    /// Lane-wise `self >= other`.
    unsafe fn ge(self, other: Self) -> Self::Mask;

    /// Conjunction of two masks.
    unsafe fn mask_and(a: Self::Mask, b: Self::Mask) -> Self::Mask;

    /// Whether any lane of the mask is set.
    unsafe fn mask_any(mask: Self::Mask) -> bool;

    /// Number of set lanes (horizontal population count).
    unsafe fn mask_count(mask: Self::Mask) -> u64;

    /// Lane-wise `if mask { if_set } else { if_clear }`.
    unsafe fn select(mask: Self::Mask, if_set: Self, if_clear: Self) -> Self;

    /// Pure lane extraction into an ordinary array. No aliasing tricks; this
    /// is the only way lane contents leave register space.
    unsafe fn to_array(self) -> Self::Array;
}

/// Width-1 lane group: the scalar fallback tier.
///
/// Always available; also serves as the reference the vector tiers are tested
/// against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScalarLane(f64);

impl PairLanes for ScalarLane {
    const WIDTH: usize = 1;

    type Mask = bool;
    type Array = [f64; 1];

    #[inline(always)]
    unsafe fn splat(value: f64) -> Self {
        Self(value)
    }

    #[inline(always)]
    unsafe fn load(src: &[f64]) -> Self {
        debug_assert!(!src.is_empty());
        Self(src[0])
    }

    #[inline(always)]
    unsafe fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    #[inline(always)]
    unsafe fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    #[inline(always)]
    unsafe fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    #[inline(always)]
    unsafe fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    #[inline(always)]
    unsafe fn lt(self, other: Self) -> bool {
        self.0 < other.0
    }

    #[inline(always)]
    unsafe fn ge(self, other: Self) -> bool {
        self.0 >= other.0
    }

    #[inline(always)]
    unsafe fn mask_and(a: bool, b: bool) -> bool {
        a && b
    }

    #[inline(always)]
    unsafe fn mask_any(mask: bool) -> bool {
        mask
    }

    #[inline(always)]
    unsafe fn mask_count(mask: bool) -> u64 {
        u64::from(mask)
    }

    #[inline(always)]
    unsafe fn select(mask: bool, if_set: Self, if_clear: Self) -> Self {
        if mask {
            if_set
        } else {
            if_clear
        }
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [f64; 1] {
        [self.0]
    }
}
