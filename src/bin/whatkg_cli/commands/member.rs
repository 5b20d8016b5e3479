// ABOUTME: Member commands for whatkg-cli
// ABOUTME: Adds, edits, lists, and removes family members
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{member_id, Session};
use crate::helpers::display::{display_member, display_members};
use whatkg::errors::AppResult;
use whatkg::models::{MemberId, MemberUpdate, NewMember, Relation};
use whatkg::services::members;
use whatkg::validation::parse_date;

pub async fn add(
    session: &Session,
    name: String,
    relation: &str,
    id: Option<String>,
    birth_date: Option<String>,
    target_weight: Option<String>,
) -> AppResult<()> {
    let birth_date = birth_date
        .as_deref()
        .map(|d| parse_date(d, "birth_date"))
        .transpose()?;
    let target_weight = target_weight
        .as_deref()
        .map(|w| session.weight_input(w, "target_weight"))
        .transpose()?;

    let new = NewMember {
        id: id.as_deref().map(MemberId::new),
        name,
        relation: Relation::from_str_or_other(relation),
        birth_date,
        gender: None,
        target_weight,
    };
    let member = members::add_member(&session.store, new).await?;
    println!("Added member:");
    display_member(&member, session.settings.unit);
    Ok(())
}

pub async fn edit(
    session: &Session,
    member: &str,
    name: Option<String>,
    relation: Option<&str>,
    birth_date: Option<&str>,
    target_weight: Option<&str>,
) -> AppResult<()> {
    let update = MemberUpdate {
        name,
        relation: relation.map(Relation::from_str_or_other),
        birth_date: birth_date
            .map(|d| parse_date(d, "birth_date"))
            .transpose()?,
        gender: None,
        target_weight: target_weight
            .map(|w| session.weight_input(w, "target_weight"))
            .transpose()?,
    };
    let updated = members::update_member(&session.store, &member_id(member), update).await?;
    println!("Updated member:");
    display_member(&updated, session.settings.unit);
    Ok(())
}

pub async fn list(session: &Session) -> AppResult<()> {
    let all = members::list_members(&session.store).await?;
    display_members(&all, session.settings.unit);
    Ok(())
}

pub async fn remove(session: &Session, member: &str, delete_records: bool) -> AppResult<()> {
    let id = member_id(member);
    if delete_records {
        let deleted = members::purge_member(&session.store, &id).await?;
        println!("Removed member {id} and deleted {deleted} records.");
    } else {
        members::remove_member(&session.store, &id).await?;
        println!("Removed member {id}; records are kept.");
    }
    Ok(())
}
