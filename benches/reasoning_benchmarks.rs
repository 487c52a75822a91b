// SPDX-License-Identifier: PMPL-1.0-or-later
// Criterion-based benchmarks for the analysis pipelines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use philo::{ArgumentAnalyzer, ComparisonEngine};

fn bench_argument_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("argument_analysis");
    let analyzer = ArgumentAnalyzer::new();

    for count in [1usize, 2, 8, 64] {
        let premises: Vec<String> = (0..count)
            .map(|i| format!("Premise number {} says experts say everyone agrees", i))
            .collect();

        group.bench_with_input(BenchmarkId::new("analyze", count), &premises, |b, premises| {
            b.iter(|| analyzer.analyze(black_box(premises), black_box("Therefore it holds")))
        });
    }

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    let engine = ComparisonEngine::default();

    group.bench_function("two_same_period", |b| {
        b.iter(|| engine.compare(black_box(&["Plato", "Aristotle"]), black_box("ethics")))
    });

    group.bench_function("all_known", |b| {
        let names = engine.knowledge().names();
        b.iter(|| engine.compare(black_box(&names), black_box("epistemology")))
    });

    group.bench_function("unknown_topic", |b| {
        b.iter(|| engine.compare(black_box(&["Kant", "Hume"]), black_box("aesthetics")))
    });

    group.finish();
}

criterion_group!(benches, bench_argument_analysis, bench_comparison);
criterion_main!(benches);
