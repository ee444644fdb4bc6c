use criterion::{criterion_group, criterion_main, Criterion};
use layerdex_core::tokenizer::tokenize;
use layerdex_core::{build_index, Record};
use serde_json::json;

const TEXT: &str = "Iron Man (Tony Stark), Hero/Genius; armored-suit #42 -- Stark Industries, Malibu!";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_mixed_text", |b| b.iter(|| tokenize(TEXT)));
}

fn bench_build(c: &mut Criterion) {
    let records: Vec<Record> = (0..1_000)
        .map(|i| Record::new(json!({
            "name": format!("Layer {i} of the map"),
            "metadata": {"realName": format!("Real Name {}", i % 37), "categories": "Hero, Genius, Billionaire"}
        })))
        .collect();
    c.bench_function("build_index_1k", |b| b.iter(|| build_index(&records)));
}

criterion_group!(benches, bench_tokenize, bench_build);
criterion_main!(benches);
