//! Benchmarks for blade canonicalization and multivector normalization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use clifra::prelude::*;

/// Generates a random raw index string over the signature's directions.
fn random_indices(rng: &mut ChaCha8Rng, dimension: usize, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'1' + rng.gen_range(0..dimension as u8)))
        .collect()
}

fn bench_blade_canonicalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("blade_new");
    let sig = Signature::new(4, 3, 2).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for len in [2, 5, 9, 16] {
        let raw = random_indices(&mut rng, sig.dimension(), len);

        group.bench_with_input(BenchmarkId::new("i64", len), &raw, |b, raw| {
            b.iter(|| black_box(Blade::new(raw, 1i64, sig)))
        });
    }

    let worst = "987654321";
    let coeff = rational(2, 3).unwrap();
    group.bench_function("reversed_9_rational", |b| {
        b.iter(|| black_box(Blade::new(worst, coeff.clone(), sig)))
    });

    group.finish();
}

fn bench_multivector_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("multivector_new");
    let sig = Signature::new(3, 1, 1).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for count in [16, 128, 1024] {
        let terms: Vec<(String, i64)> = (0..count)
            .map(|_| {
                let len = rng.gen_range(0..6);
                (random_indices(&mut rng, sig.dimension(), len), rng.gen_range(-10..10))
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("terms", count), &terms, |b, terms| {
            b.iter(|| black_box(Multivector::new(Source::Terms(terms.clone()), Some(sig))))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let sig = Signature::euclidean(5).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let requests: Vec<BuildRequest<i64>> = (0..512)
        .map(|_| {
            let terms = (0..8)
                .map(|_| (random_indices(&mut rng, sig.dimension(), 4), 1))
                .collect();
            (Source::Terms(terms), Some(sig))
        })
        .collect();

    c.bench_function("build_batch_512", |b| {
        b.iter(|| black_box(build_batch(requests.clone(), &BatchConfig::default())))
    });
}

criterion_group!(
    benches,
    bench_blade_canonicalization,
    bench_multivector_normalization,
    bench_batch
);
criterion_main!(benches);
