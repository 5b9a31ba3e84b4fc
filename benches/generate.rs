use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_isaac::isaac64::Isaac64Rng;

use seq_gen::generate::random_sequence;
use seq_gen::stats::Composition;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_sequence");
    for &len in &[1_000usize, 100_000] {
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            let mut rng = Isaac64Rng::seed_from_u64(0);
            b.iter(|| random_sequence(&mut rng, len).unwrap());
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    for &len in &[1_000usize, 100_000] {
        let mut rng = Isaac64Rng::seed_from_u64(1);
        let seq = random_sequence(&mut rng, len).unwrap();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| Composition::analyze(&seq).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_analyze);
criterion_main!(benches);
