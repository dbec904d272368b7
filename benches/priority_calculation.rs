//! Benchmarks for scoring single tasks and ranking batches

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use taskscore::{PriorityCalculator, Task, TaskRanker};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn create_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| {
            let days = (i % 90) as i64 - 30;
            Task::new(
                format!("task-{i}"),
                reference_date() + Duration::days(days),
                (i % 12) as f64,
                (i % 11) as i32,
            )
            .with_dependencies((0..i % 4).map(|d| format!("dep-{d}")))
        })
        .collect()
}

fn bench_calculate(c: &mut Criterion) {
    let calc = PriorityCalculator::new();
    let task = Task::new("Fix login", reference_date() + Duration::days(1), 2.0, 8);

    c.bench_function("calculate_single_task", |b| {
        b.iter(|| black_box(calc.calculate(black_box(&task), reference_date())));
    });

    c.bench_function("calculate_breakdown", |b| {
        b.iter(|| black_box(calc.calculate_breakdown(black_box(&task), reference_date())));
    });
}

fn bench_rank(c: &mut Criterion) {
    let ranker = TaskRanker::default();
    let mut group = c.benchmark_group("rank");

    for size in &[10usize, 100, 1000] {
        let tasks = create_tasks(*size);
        group.bench_with_input(BenchmarkId::new("rank_tasks", size), size, |b, _| {
            b.iter(|| black_box(ranker.rank(tasks.clone(), reference_date())));
        });
    }

    group.finish();
}

fn bench_worst_case_ties(c: &mut Criterion) {
    // Identical scores exercise the stable tie path
    let tasks: Vec<Task> = (0..1000)
        .map(|i| Task::new(format!("tie-{i}"), reference_date() + Duration::days(45), 1.0, 5))
        .collect();
    let ranker = TaskRanker::default();

    c.bench_function("rank_1000_identical_scores", |b| {
        b.iter(|| black_box(ranker.rank(tasks.clone(), reference_date())));
    });
}

criterion_group!(benches, bench_calculate, bench_rank, bench_worst_case_ties);
criterion_main!(benches);
