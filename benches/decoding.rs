use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;
use serde_stc::{decode_with_options, from_value, DecodeOptions, Engine};

#[derive(Deserialize)]
#[allow(dead_code)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn engines() -> impl Iterator<Item = Engine> {
    [Engine::Primary, Engine::Fallback]
        .into_iter()
        .filter(|engine| engine.is_available())
}

fn best_options() -> DecodeOptions {
    let engine = engines().next().unwrap_or(Engine::Fallback);
    DecodeOptions::new().with_engine(engine)
}

fn products_document(size: u32) -> String {
    let mut lines = Vec::new();
    for i in 0..size {
        lines.push(format!("${i}.sku: ```\nSKU{i}\n```"));
        lines.push(format!("${i}.name: ```\nProduct {i}\n```"));
        lines.push(format!("${i}.price: {}", 9.99 + f64::from(i)));
        lines.push(format!("${i}.quantity: {i}"));
    }
    // Reverse so list items arrive out of order.
    lines.reverse();
    lines.join("\n")
}

fn nested_document(depth: usize) -> String {
    (0..depth)
        .map(|i| {
            let path: Vec<String> = (0..=i).map(|d| format!("n{}", d)).collect();
            format!("{}.v: {}", path.join("."), i)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn benchmark_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_products");

    for size in [10, 50, 100, 500].iter() {
        let doc = products_document(*size);
        for engine in engines() {
            let options = DecodeOptions::new().with_engine(engine);
            group.bench_with_input(BenchmarkId::new(engine.as_str(), size), &doc, |b, doc| {
                b.iter(|| decode_with_options(black_box(doc), &options))
            });
        }
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_nested");
    let doc = nested_document(64);

    for engine in engines() {
        let options = DecodeOptions::new().with_engine(engine);
        group.bench_function(engine.as_str(), |b| {
            b.iter(|| decode_with_options(black_box(&doc), &options))
        });
    }
    group.finish();
}

fn benchmark_string_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_blocks");

    let short = "s: ```\nshort\n```".to_string();
    let options = best_options();
    let long = format!("s: ````\n{}\n````", "line of text\n```\n".repeat(200));

    group.bench_function("short_string", |b| {
        b.iter(|| decode_with_options(black_box(&short), &options))
    });
    group.bench_function("long_string", |b| {
        b.iter(|| decode_with_options(black_box(&long), &options))
    });
    group.finish();
}

fn benchmark_typed(c: &mut Criterion) {
    let doc = products_document(100);
    let options = best_options();

    c.bench_function("typed_products", |b| {
        b.iter(|| {
            decode_with_options(black_box(&doc), &options).and_then(from_value::<Vec<Product>>)
        })
    });
}

criterion_group!(
    benches,
    benchmark_engines,
    benchmark_nested,
    benchmark_string_blocks,
    benchmark_typed
);
criterion_main!(benches);
