//! Radial bin tables for the projected separation histogram.

use serde::{Deserialize, Serialize};

use crate::error::PairCountError;

/// Ascending projected-radius bin edges, kept in both linear and squared form.
///
/// Bin `k` (for `1 <= k <= nbin-1`) covers `[rupp_sqr[k-1], rupp_sqr[k])` in
/// squared-radius space: lower edge inclusive, upper edge exclusive. Bin 0 is
/// the sentinel lower bound and never receives counts — the kernels' bin
/// search descends from `nbin-1` and stops at 1.
///
/// The serde form is the bare edge list; deserialization goes back through
/// [`RadialBins::from_edges`], so its validation holds for serde-constructed
/// values and the squared table is always consistent with the edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct RadialBins {
    rupp: Vec<f64>,
    rupp_sqr: Vec<f64>,
}

impl TryFrom<Vec<f64>> for RadialBins {
    type Error = PairCountError;

    fn try_from(edges: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_edges(&edges)
    }
}

impl From<RadialBins> for Vec<f64> {
    fn from(bins: RadialBins) -> Self {
        bins.rupp
    }
}

impl RadialBins {
    /// Builds bins from explicit radius edges (not squared).
    ///
    /// # Errors
    ///
    /// Returns [`PairCountError::InvalidBins`] if fewer than two edges are
    /// given, any edge is negative or non-finite, or the edges are not
    /// strictly ascending.
    pub fn from_edges(edges: &[f64]) -> Result<Self, PairCountError> {
        if edges.len() < 2 {
            return Err(PairCountError::InvalidBins("need at least two edges"));
        }
        if edges.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(PairCountError::InvalidBins(
                "edges must be finite and non-negative",
            ));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PairCountError::InvalidBins(
                "edges must be strictly ascending",
            ));
        }
        let rupp = edges.to_vec();
        let rupp_sqr = rupp.iter().map(|r| r * r).collect();
        Ok(Self { rupp, rupp_sqr })
    }

    /// Logarithmically spaced edges from `rmin` to `rmax` with `nbin` bins,
    /// the usual spacing for correlation-function estimators.
    ///
    /// # Errors
    ///
    /// Returns [`PairCountError::InvalidBins`] if `rmin` is not positive,
    /// `rmax <= rmin` or `nbin == 0`.
    pub fn logarithmic(rmin: f64, rmax: f64, nbin: usize) -> Result<Self, PairCountError> {
        if rmin <= 0.0 {
            return Err(PairCountError::InvalidBins(
                "rmin must be positive for log spacing",
            ));
        }
        if nbin == 0 {
            return Err(PairCountError::InvalidBins("need at least one bin"));
        }
        let log_rmin = rmin.ln();
        let log_rmax = rmax.ln();
        let step = (log_rmax - log_rmin) / nbin as f64;
        let mut edges: Vec<f64> = (0..=nbin)
            .map(|i| (log_rmin + step * i as f64).exp())
            .collect();
        // Pin the end points so round-tripping through ln/exp cannot move them.
        edges[0] = rmin;
        edges[nbin] = rmax;
        Self::from_edges(&edges)
    }

    /// Linearly spaced edges from `rmin` to `rmax` with `nbin` bins.
    ///
    /// # Errors
    ///
    /// Returns [`PairCountError::InvalidBins`] if the range is empty or
    /// `nbin == 0`.
    pub fn linear(rmin: f64, rmax: f64, nbin: usize) -> Result<Self, PairCountError> {
        if nbin == 0 {
            return Err(PairCountError::InvalidBins("need at least one bin"));
        }
        let step = (rmax - rmin) / nbin as f64;
        let mut edges: Vec<f64> = (0..=nbin).map(|i| rmin + step * i as f64).collect();
        edges[0] = rmin;
        edges[nbin] = rmax;
        Self::from_edges(&edges)
    }

    /// Number of histogram slots (`edges.len()`, including the sentinel bin 0).
    #[inline]
    #[must_use]
    pub fn nbin(&self) -> usize {
        self.rupp.len()
    }

    /// Radius edges, ascending.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.rupp
    }

    /// Squared radius edges, ascending.
    #[inline]
    #[must_use]
    pub fn edges_sqr(&self) -> &[f64] {
        &self.rupp_sqr
    }

    /// Squared minimum radius (`rupp_sqr[0]`).
    #[inline]
    #[must_use]
    pub fn rpmin_sqr(&self) -> f64 {
        self.rupp_sqr[0]
    }

    /// Squared maximum radius (`rupp_sqr[nbin-1]`).
    #[inline]
    #[must_use]
    pub fn rpmax_sqr(&self) -> f64 {
        self.rupp_sqr[self.rupp_sqr.len() - 1]
    }
}
