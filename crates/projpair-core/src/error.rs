//! Error types for pair-count kernel calls.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::kernel::KernelTier;

/// Errors produced by bin construction and kernel invocation.
///
/// The hot loop itself never validates its inputs (unsorted `z`, malformed
/// bin tables and friends are caller contract violations); the only runtime
/// failure a kernel call can report is exhaustion while allocating its
/// transient per-call histogram.
#[derive(Debug, Error)]
pub enum PairCountError {
    /// The per-call local histogram could not be allocated. No partial
    /// counts have been merged into the caller's output.
    #[error("failed to allocate local pair-count buffer: {0}")]
    BufferAlloc(#[from] TryReserveError),

    /// A kernel tier was requested explicitly but the host CPU cannot run it.
    #[error("kernel tier {0:?} is not available on this CPU")]
    TierUnavailable(KernelTier),

    /// Radial bin construction was given a malformed edge table.
    #[error("invalid radial bins: {0}")]
    InvalidBins(&'static str),
}
