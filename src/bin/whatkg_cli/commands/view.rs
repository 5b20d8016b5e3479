// ABOUTME: Read-only view commands for whatkg-cli
// ABOUTME: Dashboard, statistics, chart, and calendar output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{member_id, Session};
use crate::helpers::display::{display_chart, display_dashboard, display_month, display_stats};
use whatkg::errors::{AppError, AppResult};
use whatkg::intelligence::{ChartPeriod, WeekStart, YearMonth};
use whatkg::services::{calendar, charts, dashboard};

pub async fn dashboard(session: &Session, member: &str) -> AppResult<()> {
    let summary = dashboard::dashboard(
        &session.store,
        &member_id(member),
        session.config.trend_period_days,
        session.config.recent_records_limit,
        session.today,
    )
    .await?;
    display_dashboard(&summary, session.settings.unit);
    Ok(())
}

pub async fn stats(session: &Session, member: &str, days: Option<u32>) -> AppResult<()> {
    let days = days.unwrap_or(session.config.trend_period_days);
    if days == 0 {
        return Err(AppError::invalid_input("days must be greater than zero"));
    }
    let summary = dashboard::dashboard(
        &session.store,
        &member_id(member),
        days,
        session.config.recent_records_limit,
        session.today,
    )
    .await?;
    display_stats(&summary, session.settings.unit);
    Ok(())
}

pub async fn chart(session: &Session, member: &str, period: &str) -> AppResult<()> {
    let period = period
        .parse::<ChartPeriod>()
        .map_err(AppError::invalid_input)?;
    let view = charts::chart(&session.store, &member_id(member), period, session.today).await?;
    display_chart(&view, session.settings.unit);
    Ok(())
}

pub async fn calendar(
    session: &Session,
    member: &str,
    month: Option<&str>,
    week_start: Option<&str>,
) -> AppResult<()> {
    let month = match month {
        Some(input) => YearMonth::parse(input)?,
        None => YearMonth::from_date(session.today),
    };
    let week_start = match week_start {
        Some(input) => input.parse::<WeekStart>().map_err(AppError::invalid_input)?,
        None => session.config.week_start,
    };
    let view = calendar::month_view(
        &session.store,
        &member_id(member),
        month,
        week_start,
        session.today,
    )
    .await?;
    display_month(&view, session.settings.unit);
    Ok(())
}
