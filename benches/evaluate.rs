use air_quality_checker::{evaluate, parse_reading, RawReading};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let raw = RawReading::from_pairs([("CO2", "70"), ("NO2", "55"), ("SO2", "abc"), ("Dust", "")]);

    c.bench_function("evaluate_submission", |b| {
        b.iter(|| evaluate(black_box(&raw)))
    });

    c.bench_function("parse_reading_prefix", |b| {
        b.iter(|| parse_reading(black_box(Some("  42.125e1 mg"))))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
