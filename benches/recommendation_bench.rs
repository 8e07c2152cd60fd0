// ABOUTME: Criterion benchmarks for the recommendation decision logic
// ABOUTME: Measures keyword extraction, result aggregation, and reply formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Criterion benchmarks for recommendation logic.
//!
//! Everything measured here is pure CPU work; provider calls are excluded.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealwise_server::intelligence::{
    select_search_names, FixedFollowUp, KeywordExtractor, ResponseFormatter, ResultAggregator,
};
use mealwise_server::models::{NutrientRecord, NutrientValue, RawFoodItem};

const FOODS: &[&str] = &[
    "chicken breast", "tofu", "salmon", "lentils", "brown rice", "egg", "greek yogurt",
    "almonds", "broccoli", "quinoa", "Protein", "Sugar",
];

#[allow(clippy::cast_precision_loss)]
fn generate_records(count: usize) -> Vec<NutrientRecord> {
    (0..count)
        .map(|index| {
            let name = FOODS[index % FOODS.len()];
            NutrientRecord {
                food_name: if index % 3 == 0 {
                    name.to_uppercase()
                } else {
                    name.to_owned()
                },
                calories: NutrientValue::Known(100.0 + (index * 13 % 400) as f64),
                protein: if index % 7 == 0 {
                    NutrientValue::Unknown
                } else {
                    NutrientValue::Known((index * 17 % 40) as f64 + 0.5)
                },
                carbs: NutrientValue::Known((index * 11 % 60) as f64),
                fat: NutrientValue::Known((index * 5 % 25) as f64 + 0.25),
            }
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let aggregator = ResultAggregator::default();

    for count in [5_usize, 50, 500] {
        let records = generate_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| black_box(aggregator.aggregate(black_box(records))));
        });
    }
    group.finish();
}

fn bench_search_name_selection(c: &mut Criterion) {
    let items: Vec<RawFoodItem> = generate_records(200)
        .into_iter()
        .map(|record| RawFoodItem::new(record.food_name))
        .collect();

    c.bench_function("select_search_names", |b| {
        b.iter(|| black_box(select_search_names(black_box(&items), 5)));
    });
}

fn bench_keyword_extraction(c: &mut Criterion) {
    let extractor = KeywordExtractor::new();
    let mut group = c.benchmark_group("keyword_extraction");

    for (label, text) in [
        ("short", "spicy chicken"),
        ("request", "Could you suggest some healthy gluten-free pasta for dinner tonight?"),
        ("weight_goal", "I really want to lose weight before summer, any ideas?"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), text, |b, text| {
            b.iter(|| black_box(extractor.extract(black_box(text))));
        });
    }
    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let candidates = ResultAggregator::default().aggregate(&generate_records(50));
    let formatter = ResponseFormatter::new(Arc::new(FixedFollowUp(0)));

    c.bench_function("format_reply", |b| {
        b.iter(|| black_box(formatter.format(black_box(&candidates), false)));
    });
}

criterion_group!(
    benches,
    bench_aggregation,
    bench_search_name_selection,
    bench_keyword_extraction,
    bench_formatting
);
criterion_main!(benches);
