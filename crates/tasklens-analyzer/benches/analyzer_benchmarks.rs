//! Benchmarks for task text analysis.
#![allow(
    missing_docs,
    clippy::min_ident_chars,
    clippy::missing_panics_doc,
    reason = "Benchmark code has different conventions"
)]

use std::hint::black_box;

use chrono::{DateTime, FixedOffset};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tasklens_analyzer::analyzer::{
    category::categorize, due_date::extract_due_date, duration::estimate_duration,
    keywords::extract_keywords, priority::detect_priority, sentiment::score_sentiment,
};
use tasklens_analyzer::{
    IntentClassifier, SuggestionBuilder, TaskText, TaskTextAnalyzer, TextAnalyzer as _,
};

const PASS_INPUT: &str = "Urgent: finish the quarterly project proposal for the client by Friday, \
                          it is really important and I would hate to miss the deadline again!!";

fn reference_now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-01-15T10:30:00+02:00")
        .unwrap_or_else(|err| panic!("invalid reference time: {err}"))
}

/// Benchmark the full analysis over inputs of increasing length
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let now = reference_now();

    let cases = [
        ("empty", ""),
        ("short", "Buy milk"),
        ("dentist", "Call the dentist tomorrow morning"),
        ("long", PASS_INPUT),
    ];

    for (name, text) in cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, &text| {
            b.iter(|| TaskTextAnalyzer.analyze(black_box(text), now));
        });
    }

    group.finish();
}

/// Benchmark each extraction pass on the same prepared text
fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("passes");
    let now = reference_now();
    let text = TaskText::new(PASS_INPUT);

    group.bench_function("due_date", |b| b.iter(|| extract_due_date(black_box(&text), now)));
    group.bench_function("priority", |b| b.iter(|| detect_priority(black_box(&text))));
    group.bench_function("category", |b| b.iter(|| categorize(black_box(&text))));
    group.bench_function("duration", |b| b.iter(|| estimate_duration(black_box(&text))));
    group.bench_function("keywords", |b| b.iter(|| extract_keywords(black_box(&text))));
    group.bench_function("sentiment", |b| b.iter(|| score_sentiment(black_box(&text))));

    group.finish();
}

/// Benchmark the assistant helpers
fn bench_assistant(c: &mut Criterion) {
    let now = reference_now();
    let builder = SuggestionBuilder::new(TaskTextAnalyzer);

    c.bench_function("classify_intent", |b| {
        b.iter(|| IntentClassifier.classify(black_box("Remember to renew my passport next month")));
    });
    c.bench_function("suggest", |b| {
        b.iter(|| builder.suggest(black_box("I need to book a flight in 2 weeks"), now));
    });
}

criterion_group!(benches, bench_analyze, bench_passes, bench_assistant);
criterion_main!(benches);
