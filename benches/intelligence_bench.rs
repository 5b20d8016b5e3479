// ABOUTME: Criterion benchmarks for the weight statistics engine
// ABOUTME: Measures trend, statistics, record list queries, month views, and projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the statistics engine.
//!
//! Inputs are synthetic daily histories of increasing length.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use whatkg::intelligence::{
    build_month_grid, GoalPlanner, MonthView, RecordQuery, RecordSort, TrendAnalyzer, WeekStart,
    WeightStatistics,
};
use whatkg::models::{MemberId, NewObservation, WeightObservation};

const HISTORY_SIZES: [usize; 3] = [30, 365, 3650];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 25).unwrap_or_default()
}

/// Daily history, oldest first, drifting down with a weekly wobble
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_history(count: usize) -> Vec<WeightObservation> {
    let created = DateTime::<Utc>::default();
    (0..count)
        .map(|index| {
            let days_back = (count - index) as i64;
            let weight = 80.0 - index as f64 * 0.01 + ((index * 37) % 7) as f64 * 0.1;
            WeightObservation::from_new(
                NewObservation {
                    member_id: MemberId::new("bench"),
                    date: base_date() - Duration::days(days_back),
                    weight,
                    memo: (index % 5 == 0).then(|| format!("note {index}")),
                },
                created,
                index as u64,
            )
        })
        .collect()
}

fn bench_trend_and_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for count in HISTORY_SIZES {
        let ascending = generate_history(count);
        let descending: Vec<_> = ascending.iter().rev().cloned().collect();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("analyze_trend", count),
            &descending,
            |b, records| b.iter(|| TrendAnalyzer::analyze_trend(black_box(records), 30)),
        );
        group.bench_with_input(
            BenchmarkId::new("weight_stats", count),
            &ascending,
            |b, records| b.iter(|| WeightStatistics::weight_stats(black_box(records), 30)),
        );
        group.bench_with_input(
            BenchmarkId::new("entry_changes", count),
            &descending,
            |b, records| b.iter(|| WeightStatistics::entry_changes(black_box(records))),
        );
        group.bench_with_input(
            BenchmarkId::new("chart_statistics", count),
            &ascending,
            |b, records| {
                b.iter(|| WeightStatistics::chart_statistics(black_box(records), Some(70.0)));
            },
        );
    }

    group.finish();
}

fn bench_record_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_query");
    let query = RecordQuery {
        search: Some("note".into()),
        sort: RecordSort::Highest,
        ..RecordQuery::default()
    };

    for count in HISTORY_SIZES {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("search_and_sort", count),
            &history,
            |b, records| b.iter(|| query.apply(black_box(records.clone()), base_date())),
        );
    }

    group.finish();
}

fn bench_calendar(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");
    let history = generate_history(365);

    group.bench_function("build_month_grid", |b| {
        b.iter(|| build_month_grid(black_box(2025), black_box(7), WeekStart::Monday));
    });

    if let Ok(grid) = build_month_grid(2025, 7, WeekStart::Sunday) {
        group.bench_function("month_view_365_records", |b| {
            b.iter(|| MonthView::project(&grid, base_date(), black_box(&history)));
        });
    }

    group.finish();
}

fn bench_goal_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_planner");
    let target_date = base_date() + Duration::days(120);

    group.bench_function("plan_with_projection", |b| {
        b.iter(|| {
            GoalPlanner::plan_goal(black_box(82.0), black_box(74.0), target_date, base_date())
                .map(|plan| plan.projection().count())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_trend_and_stats,
    bench_record_query,
    bench_calendar,
    bench_goal_planning,
);
criterion_main!(benches);
