//! Pair-count histograms: caller-owned output and per-call local buffers.

use std::collections::TryReserveError;

use crate::bins::RadialBins;

/// Caller-owned output histogram, accumulated across many kernel calls.
///
/// Allocated and zeroed once per correlation-function run, then passed by
/// reference into every kernel call. Kernel calls only ever add into it;
/// nothing here is overwritten. When `track_rpavg` is on, a running sum of
/// `sqrt(r2)` per bin is kept alongside the counts so the mean projected
/// separation per bin can be read off at the end.
#[derive(Debug, Clone)]
pub struct PairHistogram {
    counts: Vec<u64>,
    rp_sums: Option<Vec<f64>>,
}

impl PairHistogram {
    /// Zero-initialized histogram sized for `bins`, optionally tracking the
    /// per-bin separation sums.
    #[must_use]
    pub fn new(bins: &RadialBins, track_rpavg: bool) -> Self {
        let nbin = bins.nbin();
        Self {
            counts: vec![0; nbin],
            rp_sums: track_rpavg.then(|| vec![0.0; nbin]),
        }
    }

    /// Pair counts per bin. Slot 0 is the sentinel lower bound and stays 0.
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Running separation sums per bin, if tracking was enabled.
    #[inline]
    #[must_use]
    pub fn rp_sums(&self) -> Option<&[f64]> {
        self.rp_sums.as_deref()
    }

    /// Whether this histogram tracks separation sums.
    #[inline]
    #[must_use]
    pub fn tracks_rpavg(&self) -> bool {
        self.rp_sums.is_some()
    }

    /// Mean projected separation in bin `k`, or `None` when tracking is off,
    /// `k` is out of range, or the bin is empty.
    #[must_use]
    pub fn mean_rp(&self, k: usize) -> Option<f64> {
        let sums = self.rp_sums.as_deref()?;
        let count = *self.counts.get(k)?;
        if count == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)] // pair counts stay far below 2^52
        let mean = sums[k] / count as f64;
        Some(mean)
    }

    /// Total pairs across all bins.
    #[must_use]
    pub fn total_pairs(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Resets counts (and sums) to zero, keeping the allocation.
    pub fn reset(&mut self) {
        self.counts.fill(0);
        if let Some(sums) = self.rp_sums.as_deref_mut() {
            sums.fill(0.0);
        }
    }
}

/// Transient per-call accumulator.
///
/// Each kernel call accumulates into a private buffer and merges it into the
/// caller's [`PairHistogram`] once at the end, keeping repeated writes to
/// shared memory out of the hot loop. Allocation is fallible: a failed
/// reserve is the kernel's single recoverable error, and on that path nothing
/// has been merged.
#[derive(Debug)]
pub(crate) struct LocalHistogram {
    pub(crate) counts: Vec<u64>,
    pub(crate) rp_sums: Option<Vec<f64>>,
}

impl LocalHistogram {
    pub(crate) fn try_new(nbin: usize, track_rpavg: bool) -> Result<Self, TryReserveError> {
        let mut counts = Vec::new();
        counts.try_reserve_exact(nbin)?;
        counts.resize(nbin, 0);

        let rp_sums = if track_rpavg {
            let mut sums = Vec::new();
            sums.try_reserve_exact(nbin)?;
            sums.resize(nbin, 0.0);
            Some(sums)
        } else {
            None
        };

        Ok(Self { counts, rp_sums })
    }

    /// Adds this call's contribution into the caller-owned output arrays.
    pub(crate) fn merge_into(&self, out: &mut PairHistogram) {
        for (dst, src) in out.counts.iter_mut().zip(&self.counts) {
            *dst += src;
        }
        if let (Some(dst), Some(src)) = (out.rp_sums.as_deref_mut(), self.rp_sums.as_deref()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d += s;
            }
        }
    }
}
