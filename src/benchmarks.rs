extern crate rand;
extern crate rand_chacha;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radixmul::addsub::add;
use radixmul::karatsuba::karatsuba_mul;
use radixmul::schoolbook_mul::schoolbook_mul;
use radixmul::{Base, Digit, KARATSUBA_THRESHOLD};
use rand::{Rng, SeedableRng};

fn random_digits(rng: &mut rand_chacha::ChaCha8Rng, size: usize, base: Base) -> Vec<Digit> {
    (0..size).map(|_| rng.gen_range(0..base.get())).collect()
}
fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 1000, Base::DECIMAL);
    let b = random_digits(&mut rng, 1000, Base::DECIMAL);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(black_box(&a), black_box(&b), Base::DECIMAL))
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 1000, Base::DECIMAL);
    let b = random_digits(&mut rng, 1000, Base::DECIMAL);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b), Base::DECIMAL, KARATSUBA_THRESHOLD))
    });
}
fn bench_karatsuba_mul_10k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let base = Base::new(1 << 32).unwrap();
    let a = random_digits(&mut rng, 10000, base);
    let b = random_digits(&mut rng, 10000, base);
    c.bench_function("karatsuba_mul_10k", |bench| {
        bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b), base, KARATSUBA_THRESHOLD))
    });
}
fn bench_karatsuba_thresholds(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 2000, Base::DECIMAL);
    let b = random_digits(&mut rng, 2000, Base::DECIMAL);
    let mut group = c.benchmark_group("karatsuba_threshold_2k");
    for &threshold in &[4, 16, 32, 64, 128] {
        group.bench_function(threshold.to_string(), |bench| {
            bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b), Base::DECIMAL, threshold))
        });
    }
    group.finish();
}
fn bench_add(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_digits(&mut rng, 1000, Base::DECIMAL);
    let b = random_digits(&mut rng, 1000, Base::DECIMAL);
    c.bench_function("add", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b), Base::DECIMAL))
    });
}

fn profiled() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = profiled();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul,
        bench_karatsuba_mul_10k,
        bench_karatsuba_thresholds,
        bench_add,
);
criterion_main!(benches);
