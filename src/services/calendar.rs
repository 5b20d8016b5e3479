// ABOUTME: Calendar service projecting a member's observations onto a month grid
// ABOUTME: Loads the grid's full 42-day span and colours recorded days against the active goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::members::require_active_member;
use crate::errors::AppResult;
use crate::store::{GoalStore, MemberStore, RecordStore};
use chrono::NaiveDate;
use whatkg_core::models::MemberId;
use whatkg_intelligence::{build_month_grid, MonthView, WeekStart, YearMonth};

/// Month view for a member, with each recorded day's change and status
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members and a validation error when
/// the month's grid leaves the supported date range
pub async fn month_view<S>(
    store: &S,
    member: &MemberId,
    month: YearMonth,
    week_start: WeekStart,
    today: NaiveDate,
) -> AppResult<MonthView>
where
    S: RecordStore + GoalStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let grid = build_month_grid(month.year(), month.month(), week_start)?;
    let cells = grid.cells();
    let (first, last) = (cells[0], cells[cells.len() - 1]);
    let observations = store.range_ascending(member, first, last).await?;
    let previous = match first.pred_opt() {
        Some(before) => store
            .range_ascending(member, NaiveDate::MIN, before)
            .await?
            .pop(),
        None => None,
    };
    let goal = store.active_goal(member).await?;

    let mut view = MonthView::project(&grid, today, &observations);
    view.annotate(previous.as_ref(), goal.as_ref());
    Ok(view)
}
