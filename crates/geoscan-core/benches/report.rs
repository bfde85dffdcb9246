//! Benchmarks for classification and report rendering.
//!
//! Run with: cargo bench -p geoscan-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geoscan_core::pipeline::ImageClassifier;
use geoscan_core::{Coordinates, CsvSink, HtmlSink, ImageRecord};

fn records(n: usize) -> Vec<ImageRecord> {
    (0..n)
        .map(|i| {
            ImageRecord::new(
                format!("/photos/{:04}/IMG_{i:05}.jpg", i / 100),
                Coordinates {
                    latitude: (i as f64 * 0.37) % 90.0,
                    longitude: -((i as f64 * 1.13) % 180.0),
                },
            )
        })
        .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let classifier = ImageClassifier::default();
    let names = ["IMG_0001.jpg", "notes.txt", "scan.jpeg", "video.mp4", "map.png"];

    c.bench_function("classify_names", |b| {
        b.iter(|| {
            for name in names {
                black_box(classifier.is_image(black_box(name)));
            }
        })
    });
}

fn benchmark_csv(c: &mut Criterion) {
    let rows = records(1000);

    c.bench_function("csv_1000_rows", |b| {
        b.iter(|| {
            let mut sink = CsvSink::new(Vec::with_capacity(64 * 1024), "bench.csv").unwrap();
            for record in &rows {
                sink.write(record).unwrap();
            }
            black_box(sink.finish().unwrap())
        })
    });
}

fn benchmark_html(c: &mut Criterion) {
    let rows = records(1000);

    c.bench_function("html_1000_rows", |b| {
        b.iter(|| black_box(HtmlSink::render(black_box(&rows))))
    });
}

criterion_group!(benches, benchmark_classify, benchmark_csv, benchmark_html);
criterion_main!(benches);
