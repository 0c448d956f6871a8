//! The pair-binning algorithm, written once over the lane capability trait.
//!
//! Every tier runs this exact control flow; only the lane width and the
//! underlying instructions differ. The width-1 instantiation is the scalar
//! fallback.

#![allow(clippy::cast_precision_loss)] // bin indices and counts stay far below 2^52
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use smallvec::SmallVec;

use crate::batch::{ParticleBatch, WrapOffsets};
use crate::bins::RadialBins;
use crate::hist::LocalHistogram;

use super::lanes::PairLanes;

/// Inline capacity for the per-call splat tables; typical runs use well under
/// this many radial bins, so the tables stay off the heap.
const INLINE_BINS: usize = 32;

/// Counts qualifying pairs between two batches into `local`.
///
/// For each point of `first` (translated by `wrap`), scans `second` over the
/// sorted-z window `(-pimax, pimax)`, bins the perpendicular squared
/// separation by descending bin-edge search, and accumulates counts (and
/// `sqrt(r2)` sums when the local histogram tracks them). With
/// `same_cell == true` the scan starts at `j = i + 1`, counting each
/// unordered pair exactly once and never pairing a point with itself.
///
/// # Safety
///
/// The instruction set backing `L` must be available on the running CPU; the
/// `#[target_feature]` wrappers in the ISA modules guarantee this. Lane loads
/// index fixed-width sub-slices whose bounds are established by the loop
/// conditions below.
#[inline(always)]
pub(crate) unsafe fn bin_pairs<L: PairLanes>(
    first: ParticleBatch<'_>,
    second: ParticleBatch<'_>,
    same_cell: bool,
    bins: &RadialBins,
    pimax: f64,
    wrap: WrapOffsets,
    local: &mut LocalHistogram,
) {
    let nbin = bins.nbin();
    let rupp_sqr = bins.edges_sqr();
    let rpmin_sqr = bins.rpmin_sqr();
    let rpmax_sqr = bins.rpmax_sqr();
    let need_rpavg = local.rp_sums.is_some();

    let (x0, y0, z0) = (first.x(), first.y(), first.z());
    let (x1, y1, z1) = (second.x(), second.y(), second.z());
    let n1 = z1.len();

    // Splat tables for the descending bin search; bin labels are carried as
    // f64 lanes and truncated on extraction, so the blend machinery is the
    // same one the distance path uses.
    // SAFETY: closures do not inherit the enclosing unsafe-fn scope; the lane
    // ISA guarantee covering this call covers these splats too.
    let m_rupp_sqr: SmallVec<[L; INLINE_BINS]> = rupp_sqr
        .iter()
        .map(|&edge| unsafe { L::splat(edge) })
        .collect();
    let m_kbin: SmallVec<[L; INLINE_BINS]> = if need_rpavg {
        (0..nbin).map(|k| unsafe { L::splat(k as f64) }).collect()
    } else {
        SmallVec::new()
    };

    let m_pimax = L::splat(pimax);
    let m_sqr_rpmax = m_rupp_sqr[nbin - 1];
    let m_sqr_rpmin = m_rupp_sqr[0];

    for i in 0..x0.len() {
        let xpos = x0[i] + wrap.x;
        let ypos = y0[i] + wrap.y;
        let zpos = z0[i] + wrap.z;

        // Sorted-z window start: self-pairs resume past the diagonal, cross
        // pairs skip everything guaranteed below the -pimax bound.
        let mut j = if same_cell {
            i + 1
        } else {
            let mut j = 0;
            while j < n1 && z1[j] - zpos <= -pimax {
                j += 1;
            }
            j
        };

        let m_xpos = L::splat(xpos);
        let m_ypos = L::splat(ypos);
        let m_zpos = L::splat(zpos);

        while j + L::WIDTH <= n1 {
            let m_x1 = L::load(&x1[j..]);
            let m_y1 = L::load(&y1[j..]);
            let m_z1 = L::load(&z1[j..]);

            let m_zdiff = m_z1.sub(m_zpos);

            // z is ascending, so zdiff grows monotonically with j: if no lane
            // in this group is below pimax, no later group can be either, and
            // the whole scan for this i is done (remainder included).
            let m_pimax_mask = m_zdiff.lt(m_pimax);
            if !L::mask_any(m_pimax_mask) {
                j = n1;
                break;
            }

            let m_xdiff = m_xpos.sub(m_x1);
            let m_ydiff = m_ypos.sub(m_y1);
            let mut r2 = m_xdiff.mul(m_xdiff).add(m_ydiff.mul(m_ydiff));

            let m_rp_mask = L::mask_and(r2.lt(m_sqr_rpmax), r2.ge(m_sqr_rpmin));
            let mut m_mask_left = L::mask_and(m_pimax_mask, m_rp_mask);
            if !L::mask_any(m_mask_left) {
                j += L::WIDTH;
                continue;
            }

            // Park masked-out lanes at the top edge so every bin test below
            // rejects them without a separate mask.
            r2 = L::select(m_mask_left, r2, m_sqr_rpmax);

            let mut m_rpbin = L::splat(0.0);
            let m_dperp = if need_rpavg { r2.sqrt() } else { r2 };

            // Descending bin search: the largest edge at or below r2 wins.
            for kbin in (1..nbin).rev() {
                let m_ge_edge = r2.ge(m_rupp_sqr[kbin - 1]);
                let m_bin_mask = L::mask_and(m_ge_edge, m_mask_left);
                local.counts[kbin] += L::mask_count(m_bin_mask);
                if need_rpavg {
                    m_rpbin = L::select(m_bin_mask, m_kbin[kbin], m_rpbin);
                }
                m_mask_left = r2.lt(m_rupp_sqr[kbin - 1]);
                if !L::mask_any(m_mask_left) {
                    break;
                }
            }

            if let Some(rp_sums) = local.rp_sums.as_deref_mut() {
                let labels = m_rpbin.to_array();
                let dists = m_dperp.to_array();
                for (label, r) in labels.as_ref().iter().zip(dists.as_ref()) {
                    // Label 0 marks a lane that was parked, not binned.
                    let kbin = *label as usize;
                    if kbin > 0 {
                        rp_sums[kbin] += *r;
                    }
                }
            }

            j += L::WIDTH;
        }

        // Scalar remainder for the tail narrower than one lane group.
        while j < n1 {
            let dz = z1[j] - zpos;
            if dz >= pimax {
                break;
            }
            let dx = x1[j] - xpos;
            let dy = y1[j] - ypos;
            j += 1;

            let r2 = dx * dx + dy * dy;
            if r2 >= rpmax_sqr || r2 < rpmin_sqr {
                continue;
            }
            let r = if need_rpavg { r2.sqrt() } else { 0.0 };

            for kbin in (1..nbin).rev() {
                if r2 >= rupp_sqr[kbin - 1] {
                    local.counts[kbin] += 1;
                    if let Some(rp_sums) = local.rp_sums.as_deref_mut() {
                        rp_sums[kbin] += r;
                    }
                    break;
                }
            }
        }
    }
}
