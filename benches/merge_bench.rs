use chart_data::core::{ChartCollection, ChartRecord, ChartType, merge_charts};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn records(prefix: &str, count: usize) -> Vec<ChartRecord> {
    (0..count)
        .map(|i| {
            ChartRecord::new(
                format!("{prefix}_{i}"),
                format!("Chart {i}"),
                ChartType::bar(),
                ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                vec![i as f64; 7],
            )
        })
        .collect()
}

fn bench_merge_10k_half_overlap(c: &mut Criterion) {
    let base = records("chart", 10_000);
    let mut overrides = records("chart", 5_000);
    overrides.extend(records("custom", 5_000));

    c.bench_function("merge_10k_half_overlap", |b| {
        b.iter(|| {
            let _ = merge_charts(black_box(base.clone()), black_box(overrides.clone()));
        })
    });
}

fn bench_collection_json_2k(c: &mut Criterion) {
    let collection =
        ChartCollection::new("2025-11-04T15:27:21.945Z", "bench", records("chart", 2_000));

    c.bench_function("collection_json_2k", |b| {
        b.iter(|| {
            let json = black_box(&collection).to_json().expect("serialize");
            let _ = ChartCollection::from_json_str(black_box(&json)).expect("parse");
        })
    });
}

criterion_group!(benches, bench_merge_10k_half_overlap, bench_collection_json_2k);
criterion_main!(benches);
