// ABOUTME: Output formatting helpers for whatkg-cli
// ABOUTME: Renders members, records, goals, dashboards, charts, and calendars as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration};
use whatkg::backup::DataSummary;
use whatkg::config::AppSettings;
use whatkg::intelligence::{
    CellStatus, ChangeDirection, EntryChange, GoalPlan, GoalProgress, MonthView, PacePlan,
    TrendResult, WeightStats,
};
use whatkg::models::{FamilyMember, Goal, WeightObservation};
use whatkg::services::{ChartView, DashboardSummary, RecordListEntry};
use whatkg::units::WeightUnit;

fn signed(unit: WeightUnit, kg: f64) -> String {
    format!("{:+.1}{unit}", unit.from_kg(kg))
}

fn change_marker(change: Option<&EntryChange>, unit: WeightUnit) -> String {
    match change {
        None => String::new(),
        Some(change) => {
            let arrow = match change.direction {
                ChangeDirection::Increase => "up",
                ChangeDirection::Decrease => "down",
                ChangeDirection::Stable => "same",
            };
            format!("{arrow} {}", signed(unit, change.value))
        }
    }
}

pub fn display_member(member: &FamilyMember, unit: WeightUnit) {
    println!("   Id: {}", member.id);
    println!("   Name: {}", member.name);
    println!("   Relation: {}", member.relation);
    if let Some(birth_date) = member.birth_date {
        println!("   Born: {birth_date}");
    }
    if let Some(target) = member.target_weight {
        println!("   Target weight: {}", unit.format(target));
    }
}

pub fn display_members(members: &[FamilyMember], unit: WeightUnit) {
    if members.is_empty() {
        println!("No members yet. Add one with: whatkg-cli member add --name <name>");
        return;
    }
    println!("{:<24} {:<20} {:<8} {:>10}", "ID", "NAME", "RELATION", "TARGET");
    println!("{}", "-".repeat(65));
    for member in members {
        let target = member
            .target_weight
            .map_or_else(|| "-".to_owned(), |t| unit.format(t));
        println!(
            "{:<24} {:<20} {:<8} {:>10}",
            member.id.as_str(),
            member.name,
            member.relation.to_string(),
            target
        );
    }
}

pub fn display_observation(observation: &WeightObservation, unit: WeightUnit) {
    println!("   Id: {}", observation.id);
    println!("   Date: {}", observation.date);
    println!("   Weight: {}", unit.format(observation.weight));
    if !observation.memo_text().is_empty() {
        println!("   Memo: {}", observation.memo_text());
    }
}

pub fn display_record_list(entries: &[RecordListEntry], unit: WeightUnit) {
    if entries.is_empty() {
        println!("No records match.");
        return;
    }
    println!(
        "{:<10} {:>9} {:<14} {:<36} MEMO",
        "DATE", "WEIGHT", "CHANGE", "ID"
    );
    println!("{}", "-".repeat(80));
    for entry in entries {
        let observation = &entry.observation;
        println!(
            "{:<10} {:>9} {:<14} {:<36} {}",
            observation.date.to_string(),
            unit.format(observation.weight),
            change_marker(entry.change.as_ref(), unit),
            observation.id.to_string(),
            observation.memo_text()
        );
    }
    println!("{} records", entries.len());
}

pub fn display_goal(goal: &Goal, unit: WeightUnit) {
    println!("   Goal: {} to {}", goal.goal_type, unit.format(goal.target_weight));
    println!("   Started at: {}", unit.format(goal.start_weight));
    println!("   Target date: {}", goal.target_date);
    println!("   Weekly target: {}/week", unit.format(goal.weekly_target));
}

pub fn display_progress(progress: &GoalProgress, unit: WeightUnit) {
    println!(
        "   Progress: {:.1}% ({})",
        progress.progress_percentage,
        progress.tier().message()
    );
    println!("   Current: {}", unit.format(progress.current_weight));
    println!(
        "   Remaining: {} ({} to go)",
        signed(unit, progress.remaining_weight),
        unit.format(progress.remaining_abs())
    );
}

pub fn display_goal_plan(plan: &GoalPlan, unit: WeightUnit) {
    println!("\nPlan ({}):", plan.goal_type);
    println!(
        "   {} -> {} by {} ({} days)",
        unit.format(plan.current_weight),
        unit.format(plan.target_weight),
        plan.target_date,
        plan.estimated_days
    );
    println!("   Required change: {}", signed(unit, plan.required_change));
    println!("   Weekly target: {}/week", unit.format(plan.weekly_target));
    println!(
        "   Recommended: {}/week ({})",
        unit.format(plan.weekly_recommended),
        if plan.is_healthy_goal {
            "healthy pace"
        } else {
            "outside the healthy range"
        }
    );
    println!("   Projection:");
    for point in plan.projection() {
        println!(
            "     week {:>2}: {}",
            point.week,
            unit.format(point.projected_weight)
        );
    }
}

pub fn display_pace_plan(plan: &PacePlan, unit: WeightUnit) {
    println!("Pace plan ({}):", plan.goal_type);
    println!("   Required change: {}", signed(unit, plan.required_change));
    println!("   Pace: {}/week", unit.format(plan.weekly_pace));
    println!(
        "   Estimated: {} days, around {}",
        plan.estimated_days, plan.estimated_date
    );
    println!(
        "   Recommended: {}/week ({})",
        unit.format(plan.weekly_recommended),
        if plan.is_healthy_goal {
            "healthy pace"
        } else {
            "outside the healthy range"
        }
    );
}

pub fn display_goal_history(goals: &[Goal], unit: WeightUnit) {
    if goals.is_empty() {
        println!("No goals set.");
        return;
    }
    for goal in goals {
        println!(
            "{} {:<8} {} -> {} by {}{}",
            goal.created_at.format("%Y-%m-%d"),
            goal.goal_type.to_string(),
            unit.format(goal.start_weight),
            unit.format(goal.target_weight),
            goal.target_date,
            if goal.is_active { " (active)" } else { "" }
        );
    }
}

fn display_trend(trend: &TrendResult, unit: WeightUnit) {
    if trend.has_data() {
        println!(
            "Trend ({} days): {} {} over {} records",
            trend.period_days,
            trend.trend,
            signed(unit, trend.change),
            trend.record_count
        );
    } else {
        println!(
            "Trend ({} days): not enough records yet",
            trend.period_days
        );
    }
}

fn display_weight_stats(stats: Option<&WeightStats>, unit: WeightUnit) {
    let Some(stats) = stats else {
        println!("No records in this window.");
        return;
    };
    println!("Statistics ({} days, {} records):", stats.period_days, stats.record_count);
    println!("   Latest: {}", unit.format(stats.latest));
    println!("   Oldest: {}", unit.format(stats.oldest));
    println!("   Change: {}", signed(unit, stats.change));
    println!("   Average: {}", unit.format(stats.average));
    println!(
        "   Range: {} - {}",
        unit.format(stats.min),
        unit.format(stats.max)
    );
}

pub fn display_dashboard(summary: &DashboardSummary, unit: WeightUnit) {
    println!("{} ({})", summary.member.name, summary.member.relation);
    println!("{}", "=".repeat(50));
    match &summary.latest {
        Some(latest) => println!("Latest: {} on {}", unit.format(latest.weight), latest.date),
        None => println!("Latest: no records yet"),
    }
    display_trend(&summary.trend, unit);

    if let Some(goal) = &summary.goal {
        println!();
        display_goal(goal, unit);
        if let Some(progress) = &summary.goal_progress {
            display_progress(progress, unit);
        }
    }

    if !summary.recent.is_empty() {
        println!("\nRecent records:");
        for observation in &summary.recent {
            println!(
                "   {}  {:>9}  {}",
                observation.date,
                unit.format(observation.weight),
                observation.memo_text()
            );
        }
    }
}

pub fn display_stats(summary: &DashboardSummary, unit: WeightUnit) {
    display_trend(&summary.trend, unit);
    display_weight_stats(summary.stats.as_ref(), unit);
}

pub fn display_chart(view: &ChartView, unit: WeightUnit) {
    println!("Chart: {}", view.period);
    let Some(stats) = &view.statistics else {
        println!("No records in this period.");
        return;
    };
    for (index, point) in view.points.iter().enumerate() {
        match &view.trend_line {
            Some(line) => println!(
                "   {}  {}  (trend {})",
                point.date,
                unit.format(point.weight),
                unit.format(line.value_at(index))
            ),
            None => println!("   {}  {}", point.date, unit.format(point.weight)),
        }
    }
    println!();
    println!("   Start: {}", unit.format(stats.start_weight));
    println!("   Current: {}", unit.format(stats.current_weight));
    println!("   Total change: {}", signed(unit, stats.total_change));
    println!("   Weekly average: {}/week", signed(unit, stats.weekly_average));
    println!(
        "   Range: {} - {}",
        unit.format(stats.min_weight),
        unit.format(stats.max_weight)
    );
    println!("   Records: {}", stats.record_days);
    if let Some(goal) = stats.goal_weight {
        println!("   Goal: {}", unit.format(goal));
    }
    if let Some(line) = &view.trend_line {
        println!("   Trend: {}/record", signed(unit, line.slope));
    }
}

pub fn display_month(view: &MonthView, unit: WeightUnit) {
    println!("{}  ({} days recorded)", view.month, view.recorded_days());
    let Some(first) = view.cells.first() else {
        return;
    };
    let header: Vec<String> = (0..7)
        .map(|offset| {
            let day = first.date + Duration::days(offset);
            format!("{:^9}", day.weekday().to_string())
        })
        .collect();
    println!("{}", header.join(""));

    for row in view.cells.chunks(7) {
        let days: Vec<String> = row
            .iter()
            .map(|cell| {
                let marker = if cell.is_today { "*" } else { " " };
                if cell.in_month {
                    format!("{:>3}{marker}     ", cell.date.day())
                } else {
                    format!("{:>9}", "")
                }
            })
            .collect();
        println!("{}", days.join(""));

        let weights: Vec<String> = row
            .iter()
            .map(|cell| match (&cell.observation, cell.in_month) {
                (Some(observation), true) => format!(
                    "{:^9}",
                    format!(
                        "{:.1}{}",
                        unit.from_kg(observation.weight),
                        status_marker(cell.status)
                    )
                ),
                _ => format!("{:9}", ""),
            })
            .collect();
        println!("{}", weights.join(""));
    }
    println!("   ! goal reached   + up   - down   = stable");
}

fn status_marker(status: Option<CellStatus>) -> &'static str {
    match status {
        Some(CellStatus::GoalAchieved) => "!",
        Some(CellStatus::Up) => "+",
        Some(CellStatus::Down) => "-",
        Some(CellStatus::Stable) => "=",
        None => "",
    }
}

pub fn display_settings(settings: &AppSettings, summary: &DataSummary) {
    println!("Settings");
    println!("{}", "=".repeat(40));
    println!("   Unit: {}", settings.unit);
    println!("   Theme: {}", settings.theme);
    println!(
        "   Daily reminder: {} at {}",
        if settings.notifications.daily_reminder {
            "on"
        } else {
            "off"
        },
        settings.notifications.reminder_time.format("%H:%M")
    );
    println!(
        "   Goal achievement alert: {}",
        if settings.notifications.goal_achievement_alert {
            "on"
        } else {
            "off"
        }
    );
    if let Some(updated_at) = settings.updated_at {
        println!("   Updated: {}", updated_at.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("\nData");
    println!("   Members: {}", summary.members);
    println!("   Records: {}", summary.observations);
    println!("   Size: {} KB", summary.bytes.div_ceil(1024));
}
