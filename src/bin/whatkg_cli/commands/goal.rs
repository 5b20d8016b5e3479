// ABOUTME: Goal commands for whatkg-cli
// ABOUTME: Plans, sets, shows, clears, and lists weight goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{member_id, Session};
use crate::helpers::display::{
    display_goal, display_goal_history, display_goal_plan, display_pace_plan, display_progress,
};
use whatkg::errors::AppResult;
use whatkg::services::goals;
use whatkg::validation::{parse_date, parse_number};

pub async fn set(session: &Session, member: &str, target: &str, date: &str) -> AppResult<()> {
    let target = session.weight_input(target, "target_weight")?;
    let date = parse_date(date, "target_date")?;
    let (goal, plan) =
        goals::set_goal(&session.store, &member_id(member), target, date, session.today).await?;
    println!("Goal set:");
    display_goal(&goal, session.settings.unit);
    display_goal_plan(&plan, session.settings.unit);
    Ok(())
}

pub async fn show(session: &Session, member: &str) -> AppResult<()> {
    let status = goals::goal_status(&session.store, &member_id(member)).await?;
    match (&status.goal, &status.progress) {
        (None, _) => println!("No active goal."),
        (Some(goal), progress) => {
            display_goal(goal, session.settings.unit);
            match progress {
                Some(progress) => display_progress(progress, session.settings.unit),
                None => println!("No weight recorded yet."),
            }
        }
    }
    Ok(())
}

pub async fn clear(session: &Session, member: &str) -> AppResult<()> {
    let goal = goals::clear_goal(&session.store, &member_id(member)).await?;
    println!("Cleared goal {}", goal.id);
    Ok(())
}

pub async fn plan(session: &Session, member: &str, target: &str, date: &str) -> AppResult<()> {
    let target = session.weight_input(target, "target_weight")?;
    let date = parse_date(date, "target_date")?;
    let plan =
        goals::plan_goal(&session.store, &member_id(member), target, date, session.today).await?;
    display_goal_plan(&plan, session.settings.unit);
    Ok(())
}

pub async fn pace(session: &Session, member: &str, target: &str, pace: &str) -> AppResult<()> {
    let target = session.weight_input(target, "target_weight")?;
    let pace = parse_number(pace, "weekly_pace")?;
    let plan =
        goals::pace_plan(&session.store, &member_id(member), target, pace, session.today).await?;
    display_pace_plan(&plan, session.settings.unit);
    Ok(())
}

pub async fn history(session: &Session, member: &str) -> AppResult<()> {
    let history = goals::goal_history(&session.store, &member_id(member)).await?;
    display_goal_history(&history, session.settings.unit);
    Ok(())
}
