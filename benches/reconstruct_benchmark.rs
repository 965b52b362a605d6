//! Benchmarks for blocktree reconstruction and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic block streams shaped like a contract:
//! articles, sections, paragraphs with nested lists, and small tables.

use blocktree::{BlockRecord, Document, RenderOptions, RowRecord};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic block stream with the given number of articles.
fn create_test_records(article_count: usize) -> Vec<BlockRecord> {
    let mut records = Vec::new();

    for a in 0..article_count {
        records.push(BlockRecord::header(0, format!("Article {}", a + 1)));
        for s in 0..4 {
            records.push(BlockRecord::header(1, format!("Section {}.{}", a + 1, s + 1)));
            records.push(BlockRecord::paragraph(
                2,
                "The parties agree to the following terms and conditions:",
            ));
            for i in 0..3 {
                records.push(BlockRecord::list_item(2, format!("Term {}", i + 1)));
                records.push(BlockRecord::list_item(3, "Detail of the term above."));
            }
        }
        records.push(BlockRecord::table(
            1,
            vec![
                RowRecord::header(["Item", "Amount"]),
                RowRecord::data(["Fee", "100"]),
                RowRecord::full("Total 100"),
            ],
        ));
    }

    records
}

/// Benchmark JSON decoding plus reconstruction.
fn bench_parse_json(c: &mut Criterion) {
    let json = serde_json::to_string(&create_test_records(50)).unwrap();

    c.bench_function("parse_json_50_articles", |b| {
        b.iter(|| blocktree::parse_str(black_box(&json)).unwrap());
    });
}

/// Benchmark reconstruction at various sizes.
fn bench_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction");

    for article_count in [10, 100, 1000].iter() {
        let records = create_test_records(*article_count);
        let reader = blocktree::LayoutReader::new();

        group.bench_function(format!("{}_articles", article_count), |b| {
            b.iter(|| reader.read(black_box(&records)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark document export, sequential against parallel.
fn bench_rendering(c: &mut Criterion) {
    let doc = Document::new(create_test_records(500)).unwrap();
    let mut group = c.benchmark_group("rendering");

    for (name, options) in [
        ("sequential", RenderOptions::sequential()),
        ("parallel", RenderOptions::default()),
    ] {
        group.bench_function(format!("markdown_{}", name), |b| {
            b.iter(|| blocktree::render::to_markdown(black_box(&doc), &options));
        });
        group.bench_function(format!("html_{}", name), |b| {
            b.iter(|| blocktree::render::to_html(black_box(&doc), &options));
        });
    }

    group.finish();
}

/// Benchmark chunk collection with context text.
fn bench_chunks(c: &mut Criterion) {
    let doc = Document::new(create_test_records(500)).unwrap();

    c.bench_function("chunks_with_context", |b| {
        b.iter(|| {
            black_box(&doc)
                .chunks()
                .iter()
                .map(|chunk| chunk.to_context_text(true).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(
    benches,
    bench_parse_json,
    bench_reconstruction,
    bench_rendering,
    bench_chunks,
);
criterion_main!(benches);
