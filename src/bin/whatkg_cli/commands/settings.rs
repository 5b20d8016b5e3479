// ABOUTME: Settings commands for whatkg-cli
// ABOUTME: Shows and changes unit, theme, and reminder preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Session;
use crate::helpers::display::display_settings;
use chrono::Utc;
use whatkg::backup::data_summary;
use whatkg::config::Theme;
use whatkg::errors::{AppError, AppResult};
use whatkg::units::WeightUnit;

pub async fn show(session: &Session) -> AppResult<()> {
    let summary = data_summary(&session.store, &session.settings, Utc::now()).await?;
    display_settings(&session.settings, &summary);
    Ok(())
}

pub fn set_unit(session: &mut Session, unit: &str) -> AppResult<()> {
    let unit = WeightUnit::parse(unit)
        .ok_or_else(|| AppError::invalid_input(format!("unknown unit: {unit}")))?;
    session.settings.set_unit(unit, Utc::now());
    println!("Unit set to {unit}");
    Ok(())
}

pub fn set_theme(session: &mut Session, theme: &str) -> AppResult<()> {
    let theme = theme.parse::<Theme>().map_err(AppError::invalid_input)?;
    session.settings.set_theme(theme, Utc::now());
    println!("Theme set to {theme}");
    Ok(())
}

pub fn set_reminder(
    session: &mut Session,
    enabled: Option<bool>,
    time: Option<&str>,
    goal_alert: Option<bool>,
) -> AppResult<()> {
    let now = Utc::now();
    if let Some(time) = time {
        session.settings.set_reminder_time(time, now)?;
    }
    if let Some(enabled) = enabled {
        session.settings.set_daily_reminder(enabled, now);
    }
    if let Some(goal_alert) = goal_alert {
        session.settings.set_goal_achievement_alert(goal_alert, now);
    }
    let notifications = &session.settings.notifications;
    println!(
        "Daily reminder: {} at {}; goal alert: {}",
        on_off(notifications.daily_reminder),
        notifications.reminder_time.format("%H:%M"),
        on_off(notifications.goal_achievement_alert)
    );
    Ok(())
}

const fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
