//! Criterion benchmarks for the pair-binning kernel tiers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use projpair_core::{
    count_pairs_with_tier, KernelTier, PairHistogram, ParticleBatch, RadialBins, WrapOffsets,
};

fn random_cell(rng: &mut StdRng, n: usize, box_size: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..box_size)).collect();
    let y: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..box_size)).collect();
    let mut z: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..box_size)).collect();
    z.sort_by(f64::total_cmp);
    (x, y, z)
}

fn bench_tiers(c: &mut Criterion) {
    let bins = RadialBins::logarithmic(0.1, 25.0, 20).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let n = 2048;
    let a = random_cell(&mut rng, n, 50.0);
    let b = random_cell(&mut rng, n, 50.0);
    let first = ParticleBatch::new(&a.0, &a.1, &a.2);
    let second = ParticleBatch::new(&b.0, &b.1, &b.2);

    let tiers = [
        KernelTier::Avx512,
        KernelTier::Avx2,
        KernelTier::Neon,
        KernelTier::Scalar,
    ];

    let mut group = c.benchmark_group("count_pairs");
    group.throughput(Throughput::Elements((n * n) as u64));
    for tier in tiers.into_iter().filter(|t| t.is_available()) {
        for track_rpavg in [false, true] {
            let label = if track_rpavg { "rpavg" } else { "counts" };
            group.bench_with_input(
                BenchmarkId::new(format!("{tier:?}"), label),
                &track_rpavg,
                |bench, &track_rpavg| {
                    let mut hist = PairHistogram::new(&bins, track_rpavg);
                    bench.iter(|| {
                        count_pairs_with_tier(
                            tier,
                            first,
                            second,
                            false,
                            &bins,
                            40.0,
                            WrapOffsets::ZERO,
                            &mut hist,
                        )
                        .unwrap();
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_tiers);
criterion_main!(benches);
