use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use markov::{Chain, Config};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Synthetic corpus with a small vocabulary so prefixes repeat and chains fill up.
fn corpus(num_words: usize) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(0xc0ffee);
    (0..num_words)
        .map(|_| format!("w{}", rng.random_range(0..2_000u32)))
        .collect()
}

fn benchmark_chain_build(c: &mut Criterion, num_words: usize) {
    let words = corpus(num_words);

    let mut group = c.benchmark_group(format!("Chain_Build_{}", num_words));
    group.sample_size(40);
    group.bench_function("Build", |b| {
        b.iter(|| {
            black_box(Chain::build(words.iter().map(String::as_str)));
        });
    });
    group.bench_function("Build_single_bucket", |b| {
        let config = Config { buckets: 1, ..Config::default() };
        b.iter(|| {
            black_box(Chain::build_with(&config, words.iter().map(String::as_str)).unwrap());
        });
    });
    group.finish();
}

fn benchmark_chain_build_1_000(c: &mut Criterion) {
    benchmark_chain_build(c, 1_000);
}

fn benchmark_chain_build_100_000(c: &mut Criterion) {
    benchmark_chain_build(c, 100_000);
}

criterion_group!(benches, benchmark_chain_build_1_000, benchmark_chain_build_100_000);
criterion_main!(benches);
