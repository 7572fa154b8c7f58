use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terapeek::extractor::{extract_share_id, ShareIdExtractor};

fn benchmark_extract_share_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("Share Id Extraction");

    group.bench_function("hosted link", |b| {
        b.iter(|| extract_share_id(black_box("https://www.terabox.com/s/1AbCdEfGhIjK?pwd=1234")))
    });

    group.bench_function("generic link", |b| {
        b.iter(|| extract_share_id(black_box("https://mirror.example/share/s/1AbCdEfGhIjK#top")))
    });

    group.bench_function("bare id", |b| {
        b.iter(|| extract_share_id(black_box("1AbCdEfGhIjK///")))
    });

    let long_input = "x".repeat(4096) + "/s/tail";
    group.bench_function("long input", |b| {
        b.iter(|| extract_share_id(black_box(&long_input)))
    });

    group.finish();
}

fn benchmark_extractor_construction(c: &mut Criterion) {
    c.bench_function("build matcher chain", |b| {
        b.iter(|| ShareIdExtractor::new().map(black_box))
    });
}

criterion_group!(
    benches,
    benchmark_extract_share_id,
    benchmark_extractor_construction
);
criterion_main!(benches);
