//! Runtime tier detection and kernel dispatch.
//!
//! Capability probe once, cached in a `OnceLock`, then route every call to
//! the best tier. Tests (and callers that need reproducible tier behavior)
//! can force a tier explicitly with [`count_pairs_with_tier`].

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::batch::{ParticleBatch, WrapOffsets};
use crate::bins::RadialBins;
use crate::error::PairCountError;
use crate::hist::{LocalHistogram, PairHistogram};

use super::scalar;

/// Kernel implementation tier, by vector width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KernelTier {
    /// Wide tier: 8 × f64 lanes, AVX-512F (x86_64 only).
    Avx512,
    /// Narrow tier: 4 × f64 lanes, AVX2 (x86_64 only).
    Avx2,
    /// Narrow tier on aarch64: 2 × f64 lanes, always available there.
    Neon,
    /// Scalar fallback, available everywhere.
    Scalar,
}

/// Cached tier - probed once at first use.
static KERNEL_TIER: OnceLock<KernelTier> = OnceLock::new();

fn probe_tier() -> KernelTier {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            return KernelTier::Avx512;
        }
        if is_x86_feature_detected!("avx2") {
            return KernelTier::Avx2;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        return KernelTier::Neon;
    }

    #[allow(unreachable_code)]
    KernelTier::Scalar
}

impl KernelTier {
    /// Best tier the running CPU supports. Probed once, then cached.
    #[inline]
    #[must_use]
    pub fn detect() -> Self {
        *KERNEL_TIER.get_or_init(|| {
            let tier = probe_tier();
            debug!(?tier, "selected pair-count kernel tier");
            tier
        })
    }

    /// Whether this tier can run on the current CPU.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::Avx512 => is_x86_feature_detected!("avx512f"),
            #[cfg(target_arch = "x86_64")]
            Self::Avx2 => is_x86_feature_detected!("avx2"),
            #[cfg(target_arch = "aarch64")]
            Self::Neon => true,
            Self::Scalar => true,
            _ => false,
        }
    }
}

/// Counts pairs between two batches into `out`, using the best tier the CPU
/// supports.
///
/// One call per cell pair. `out` is only ever added to, so the caller can
/// accumulate an arbitrary number of cell pairs into one histogram.
///
/// # Errors
///
/// [`PairCountError::BufferAlloc`] if the transient per-call histogram cannot
/// be allocated; nothing has been merged into `out` on that path.
pub fn count_pairs(
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    out: &mut PairHistogram,
) -> Result<(), PairCountError> {
    count_pairs_with_tier(KernelTier::detect(), first, second, same_cell, bins, pimax, wrap, out)
}

/// Counts pairs with an explicitly chosen tier.
///
/// # Errors
///
/// [`PairCountError::TierUnavailable`] if the CPU cannot run `tier`;
/// [`PairCountError::BufferAlloc`] as in [`count_pairs`].
#[allow(clippy::too_many_arguments)] // mirrors the conceptual kernel signature
pub fn count_pairs_with_tier(
    tier: KernelTier,
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    out: &mut PairHistogram,
) -> Result<(), PairCountError> {
    if !tier.is_available() {
        return Err(PairCountError::TierUnavailable(tier));
    }

    let mut local = LocalHistogram::try_new(bins.nbin(), out.tracks_rpavg())?;

    match tier {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: availability checked above.
        KernelTier::Avx512 => unsafe {
            super::x86_avx512::count_pairs_avx512(
                first, second, same_cell, bins, pimax, wrap, &mut local,
            );
        },
        #[cfg(target_arch = "x86_64")]
        // SAFETY: availability checked above.
        KernelTier::Avx2 => unsafe {
            super::x86_avx2::count_pairs_avx2(
                first, second, same_cell, bins, pimax, wrap, &mut local,
            );
        },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is guaranteed on aarch64.
        KernelTier::Neon => unsafe {
            super::neon::count_pairs_neon(first, second, same_cell, bins, pimax, wrap, &mut local);
        },
        _ => scalar::count_pairs_scalar(first, second, same_cell, bins, pimax, wrap, &mut local),
    }

    local.merge_into(out);
    Ok(())
}
