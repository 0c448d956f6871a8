//! Pair-binning kernels at three vector widths with identical semantics.
//!
//! # Module Structure
//!
//! - `lanes` — lane-width capability trait plus the width-1 scalar lanes
//! - `generic` — the pair-binning algorithm, written once over the trait
//! - `scalar` — scalar fallback tier (width-1 instantiation)
//! - `x86_avx512` — wide tier, 8 × f64 lanes (x86_64 only)
//! - `x86_avx2` — narrow tier, 4 × f64 lanes (x86_64 only)
//! - `neon` — narrow tier on aarch64, 2 × f64 lanes
//! - `dispatch` — runtime tier detection and entry points
//!
//! All tiers share one accumulation contract: counts go into a per-call local
//! histogram, which is merged additively into the caller's output at the end
//! of the call. The tiers are behaviorally interchangeable; the equivalence
//! tests hold every vector tier to the scalar tier's exact counts.

// =============================================================================
// Shared submodules
// =============================================================================

mod generic;
mod lanes;
mod scalar;

// =============================================================================
// Unsafe Invariants Reference
// =============================================================================
// SAFETY: Shared invariants for SIMD unsafe code in this module tree.
// - Condition 1: Lane loads read fixed-width sub-slices whose bounds are
//   established by the generic algorithm's loop conditions.
// - Condition 2: Target-featured entry wrappers are called only after runtime
//   feature checks, or on architectures where the feature is guaranteed.
// - Condition 3: All loads use unaligned-load intrinsics.
// Reason: Intrinsics are required for hot-path SIMD performance.

// =============================================================================
// ISA kernel submodules
// =============================================================================

#[cfg(target_arch = "x86_64")]
mod x86_avx512;

#[cfg(target_arch = "x86_64")]
mod x86_avx2;

#[cfg(target_arch = "aarch64")]
mod neon;

// =============================================================================
// Dispatch module (public API)
// =============================================================================

mod dispatch;

pub use dispatch::{count_pairs, count_pairs_with_tier, KernelTier};

// =============================================================================
// Tests (separate files per project rules)
// =============================================================================
