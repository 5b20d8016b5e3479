// ABOUTME: Record commands for whatkg-cli
// ABOUTME: Adds, lists, edits, and deletes weight observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{member_id, Session};
use crate::helpers::display::{display_observation, display_record_list};
use uuid::Uuid;
use whatkg::errors::{AppError, AppResult};
use whatkg::intelligence::{RecordFilter, RecordQuery, RecordSort};
use whatkg::models::{ObservationId, ObservationUpdate};
use whatkg::services::records;
use whatkg::validation::parse_date;

fn observation_id(input: &str) -> AppResult<ObservationId> {
    Uuid::parse_str(input.trim())
        .map_err(|_| AppError::invalid_input(format!("not a record identifier: {input}")))
}

pub async fn add(
    session: &Session,
    member: &str,
    weight: &str,
    date: Option<&str>,
    memo: Option<String>,
) -> AppResult<()> {
    let weight = session.weight_input(weight, "weight")?;
    let date = date.map(|d| parse_date(d, "date")).transpose()?;
    let observation = records::record_weight(
        &session.store,
        &member_id(member),
        weight,
        date,
        memo,
        session.today,
    )
    .await?;
    println!("Recorded:");
    display_observation(&observation, session.settings.unit);
    Ok(())
}

pub async fn list(
    session: &Session,
    member: &str,
    search: Option<String>,
    filter: &str,
    sort: &str,
    limit: Option<usize>,
) -> AppResult<()> {
    let query = RecordQuery {
        search,
        filter: filter.parse::<RecordFilter>().map_err(AppError::invalid_input)?,
        sort: sort.parse::<RecordSort>().map_err(AppError::invalid_input)?,
    };
    let entries = records::list_records(
        &session.store,
        &member_id(member),
        &query,
        limit.unwrap_or(session.config.list_limit),
        session.today,
    )
    .await?;
    display_record_list(&entries, session.settings.unit);
    Ok(())
}

pub async fn edit(
    session: &Session,
    id: &str,
    weight: Option<&str>,
    date: Option<&str>,
    memo: Option<String>,
) -> AppResult<()> {
    let update = ObservationUpdate {
        date: date.map(|d| parse_date(d, "date")).transpose()?,
        weight: weight
            .map(|w| session.weight_input(w, "weight"))
            .transpose()?,
        memo,
    };
    let observation = records::edit_record(&session.store, observation_id(id)?, update).await?;
    println!("Updated:");
    display_observation(&observation, session.settings.unit);
    Ok(())
}

pub async fn delete(session: &Session, ids: &[String]) -> AppResult<()> {
    let ids = ids
        .iter()
        .map(|id| observation_id(id))
        .collect::<AppResult<Vec<_>>>()?;
    if let [id] = ids.as_slice() {
        records::delete_record(&session.store, *id).await?;
        println!("Deleted record {id}");
    } else {
        let deleted = records::delete_records(&session.store, &ids).await?;
        println!("Deleted {deleted} of {} records", ids.len());
    }
    Ok(())
}
