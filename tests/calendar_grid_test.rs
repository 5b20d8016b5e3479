// ABOUTME: Integration tests for the calendar grid builder and month view
// ABOUTME: Checks the 42-cell invariant, contiguity, week start alignment, and projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Datelike, Duration};
use common::{day, observation};
use whatkg::errors::ValidationError;
use whatkg::intelligence::{build_month_grid, MonthView, WeekStart, YearMonth};

#[test]
fn test_every_month_has_42_contiguous_cells() {
    for year in [2023, 2024, 2025] {
        for month in 1..=12 {
            for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                let grid = build_month_grid(year, month, week_start).unwrap();
                let cells = grid.cells();
                assert_eq!(cells.len(), 42);
                assert_eq!(cells[0].weekday(), week_start.weekday());
                for pair in cells.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1));
                }
                let first_of_month = YearMonth::new(year, month).unwrap().first_day();
                assert!(cells.contains(&first_of_month));
            }
        }
    }
}

#[test]
fn test_february_leap_and_common_years() {
    let leap = build_month_grid(2024, 2, WeekStart::Sunday).unwrap();
    let in_month = leap.cells().iter().filter(|d| leap.is_in_month(**d)).count();
    assert_eq!(in_month, 29);

    let common = build_month_grid(2023, 2, WeekStart::Sunday).unwrap();
    let in_month = common.cells().iter().filter(|d| common.is_in_month(**d)).count();
    assert_eq!(in_month, 28);
}

#[test]
fn test_december_rolls_into_january() {
    let grid = build_month_grid(2025, 12, WeekStart::Sunday).unwrap();
    // 2025-12-01 is a Monday, so the grid opens on Sunday 2025-11-30
    assert_eq!(grid.cells()[0], day("2025-11-30"));
    assert_eq!(grid.cells()[41], day("2026-01-10"));
    assert_eq!(grid.rows().count(), 6);
}

#[test]
fn test_monday_start_when_month_begins_on_monday() {
    let grid = build_month_grid(2025, 12, WeekStart::Monday).unwrap();
    assert_eq!(grid.cells()[0], day("2025-12-01"));
}

#[test]
fn test_invalid_month_is_rejected() {
    assert!(matches!(
        build_month_grid(2025, 13, WeekStart::Sunday),
        Err(ValidationError::InvalidMonth { month: 13 })
    ));
    assert!(matches!(
        build_month_grid(2025, 0, WeekStart::Sunday),
        Err(ValidationError::InvalidMonth { month: 0 })
    ));
}

#[test]
fn test_year_month_parsing_and_navigation() {
    let month = YearMonth::parse("2024-12").unwrap();
    assert_eq!(month.to_string(), "2024-12");
    assert_eq!(month.last_day(), Some(day("2024-12-31")));
    assert_eq!(month.next().unwrap().to_string(), "2025-01");
    assert_eq!(month.previous().unwrap().to_string(), "2024-11");
    assert!(YearMonth::parse("2024/12").is_err());
    assert_eq!(YearMonth::from_date(day("2024-02-29")).to_string(), "2024-02");
}

#[test]
fn test_month_view_marks_today_and_latest_entry_per_day() {
    let grid = build_month_grid(2025, 7, WeekStart::Sunday).unwrap();
    let observations = [
        observation("2025-07-01", 60.2, 1),
        observation("2025-07-01", 60.0, 2),
        observation("2025-06-30", 60.5, 3),
        observation("2025-07-25", 58.5, 4),
    ];
    let view = MonthView::project(&grid, day("2025-07-25"), &observations);

    assert_eq!(view.month, "2025-07");
    assert_eq!(view.cells.len(), 42);
    assert_eq!(view.recorded_days(), 2);

    let first = view.observation_on(day("2025-07-01")).unwrap();
    assert!((first.weight - 60.0).abs() < f64::EPSILON);

    // Padding days keep their records but are not counted as recorded days
    assert!(view.observation_on(day("2025-06-30")).is_some());

    let today: Vec<_> = view.cells.iter().filter(|c| c.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date.day(), 25);
}
