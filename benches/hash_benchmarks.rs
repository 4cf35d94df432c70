//! Benchmarks for fingerprint construction and the distance metrics.
//!
//! Scenarios:
//! - Word length variations (short, medium, long)
//! - Character sets (ASCII, Unicode, noisy input)
//! - Each distance metric in isolation
//! - A batch candidate-ranking loop (the intended workload)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phonix::{Difference, Hash};

fn test_words() -> Vec<(&'static str, &'static str)> {
    vec![
        // (name, word)
        ("empty", ""),
        ("short", "rust"),
        ("medium", "phonetics"),
        ("long", "incomprehensibilities"),
        ("unicode", "ärgernisfrei"),
        ("noisy", "c-o.l o1r!"),
        ("letterless", "1234-5678"),
    ]
}

fn bench_hash_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash/new");

    for (name, word) in test_words() {
        group.throughput(Throughput::Bytes(word.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), word, |b, word| {
            b.iter(|| Hash::new(black_box(word)));
        });
    }

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("difference");

    let diff = Difference::new(Hash::new("misspelling"), Hash::new("mispeling"));

    group.bench_function("xor", |b| b.iter(|| black_box(diff).xor()));
    group.bench_function("hamming", |b| b.iter(|| black_box(diff).hamming()));
    group.bench_function("graduated", |b| b.iter(|| black_box(diff).graduated()));
    group.bench_function("similar", |b| b.iter(|| black_box(diff).similar()));

    group.finish();
}

fn bench_candidate_ranking(c: &mut Criterion) {
    // Rank a fixed candidate list against one query, hashes precomputed
    // the way a spell-checker would hold its dictionary.
    let candidates: Vec<Hash> = [
        "correct", "collect", "connect", "corrupt", "concert", "convert", "comfort", "banana",
        "orange", "purple", "silver", "copper", "carrot", "carpet", "cassette", "cascade",
    ]
    .iter()
    .map(|w| Hash::new(w))
    .collect();

    let query = Hash::new("korrect");

    c.bench_function("rank/16_candidates", |b| {
        b.iter(|| {
            candidates
                .iter()
                .map(|&h| (black_box(query) - h).graduated())
                .min()
        });
    });
}

criterion_group!(
    benches,
    bench_hash_construction,
    bench_metrics,
    bench_candidate_ranking
);
criterion_main!(benches);
