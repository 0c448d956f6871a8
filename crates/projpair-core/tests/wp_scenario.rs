//! End-to-end scenario through the public API: a small wp(rp) numerator
//! accumulated over several cell pairs, cross-checked between automatic
//! dispatch and the forced scalar tier.

use projpair_core::{
    count_pairs, count_pairs_with_tier, KernelTier, PairHistogram, ParticleBatch, RadialBins,
    WrapOffsets,
};

fn cell(seed: u64, n: usize, origin: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    // Small deterministic LCG so the fixture needs no external input files.
    let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1_u64 << 53) as f64
    };
    let x: Vec<f64> = (0..n).map(|_| origin + next() * 10.0).collect();
    let y: Vec<f64> = (0..n).map(|_| next() * 10.0).collect();
    let mut z: Vec<f64> = (0..n).map(|_| next() * 10.0).collect();
    z.sort_by(f64::total_cmp);
    (x, y, z)
}

#[test]
fn accumulates_over_cell_pairs_and_matches_scalar() {
    let bins = RadialBins::logarithmic(0.2, 15.0, 12).unwrap();
    let pimax = 8.0;

    let a = cell(1, 90, 0.0);
    let b = cell(2, 110, 5.0);
    let batch_a = ParticleBatch::new(&a.0, &a.1, &a.2);
    let batch_b = ParticleBatch::new(&b.0, &b.1, &b.2);

    let mut auto = PairHistogram::new(&bins, true);
    count_pairs(batch_a, batch_a, true, &bins, pimax, WrapOffsets::ZERO, &mut auto).unwrap();
    count_pairs(batch_b, batch_b, true, &bins, pimax, WrapOffsets::ZERO, &mut auto).unwrap();
    count_pairs(batch_a, batch_b, false, &bins, pimax, WrapOffsets::ZERO, &mut auto).unwrap();

    let mut scalar = PairHistogram::new(&bins, true);
    for (first, second, same_cell) in [
        (batch_a, batch_a, true),
        (batch_b, batch_b, true),
        (batch_a, batch_b, false),
    ] {
        count_pairs_with_tier(
            KernelTier::Scalar,
            first,
            second,
            same_cell,
            &bins,
            pimax,
            WrapOffsets::ZERO,
            &mut scalar,
        )
        .unwrap();
    }

    assert!(auto.total_pairs() > 0);
    assert_eq!(auto.counts(), scalar.counts());
    assert_eq!(auto.counts()[0], 0, "sentinel bin receives no counts");

    let edges = bins.edges();
    for k in 1..bins.nbin() {
        if let Some(mean) = auto.mean_rp(k) {
            assert!(mean >= edges[k - 1] && mean < edges[k]);
        }
    }
}
