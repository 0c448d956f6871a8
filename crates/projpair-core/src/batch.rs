//! Read-only particle batch views handed to the kernels.

use serde::{Deserialize, Serialize};

/// One spatial cell's points as three parallel coordinate slices.
///
/// The batch is a borrowed, read-only view; the kernels never mutate it.
/// `z` must be sorted ascending — the sliding-window early exit in the pair
/// scan depends on it. Sortedness is checked in debug builds only; in release
/// it is caller contract, like the rest of the hot-path preconditions.
#[derive(Debug, Clone, Copy)]
pub struct ParticleBatch<'a> {
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [f64],
}

impl<'a> ParticleBatch<'a> {
    /// Builds a batch view over three equal-length coordinate slices.
    ///
    /// # Panics
    ///
    /// Panics if the slice lengths differ.
    #[must_use]
    pub fn new(x: &'a [f64], y: &'a [f64], z: &'a [f64]) -> Self {
        assert_eq!(x.len(), y.len(), "coordinate slice lengths must match");
        assert_eq!(x.len(), z.len(), "coordinate slice lengths must match");
        debug_assert!(
            z.windows(2).all(|w| w[0] <= w[1]),
            "z coordinates must be sorted ascending"
        );
        Self { x, y, z }
    }

    /// Number of particles in the batch.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the batch holds no particles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X coordinates.
    #[inline]
    #[must_use]
    pub fn x(&self) -> &'a [f64] {
        self.x
    }

    /// Y coordinates.
    #[inline]
    #[must_use]
    pub fn y(&self) -> &'a [f64] {
        self.y
    }

    /// Z coordinates (ascending).
    #[inline]
    #[must_use]
    pub fn z(&self) -> &'a [f64] {
        self.z
    }
}

/// Periodic-image translation applied to every point of the first batch
/// before distances are computed. The second batch is used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapOffsets {
    /// Offset added to `x0`.
    pub x: f64,
    /// Offset added to `y0`.
    pub y: f64,
    /// Offset added to `z0`.
    pub z: f64,
}

impl WrapOffsets {
    /// No translation (non-periodic cell pair, or the primary image).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}

impl Default for WrapOffsets {
    fn default() -> Self {
        Self::ZERO
    }
}
