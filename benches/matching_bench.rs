use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use typestrike::dictionary::Dictionary;
use typestrike::loader::load_dictionary;
use typestrike::matcher::{MatchEngine, NasalPolicy};
use typestrike::segmenter::{canonical_spelling, segment};

const PHRASE: &str = "としょかんでべんきょうする、ちょっとまって！こーひーをのみたい";

fn setup_dictionary() -> Dictionary {
    load_dictionary("data/dictionary.json").expect("Failed to load bundled dictionary")
}

fn criterion_benchmark(c: &mut Criterion) {
    let dict = setup_dictionary();
    let policy = Arc::new(NasalPolicy::default());
    let groups = segment(PHRASE, &dict, dict.max_key_len());
    let keys: Vec<char> = canonical_spelling(&groups).chars().collect();

    c.bench_function("segment (long phrase)", |b| {
        b.iter(|| segment(black_box(PHRASE), &dict, dict.max_key_len()))
    });

    c.bench_function("type canonical spelling", |b| {
        b.iter(|| {
            let mut engine = MatchEngine::new(groups.clone(), Arc::clone(&policy));
            for &k in &keys {
                black_box(engine.consume_key(k));
            }
            engine.is_complete()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
