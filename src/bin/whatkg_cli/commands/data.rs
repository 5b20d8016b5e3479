// ABOUTME: Export and import commands for whatkg-cli
// ABOUTME: Writes JSON backups or per-member CSV, and merges JSON backups into the data file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{member_id, Session};
use chrono::Utc;
use std::fs;
use std::path::Path;
use whatkg::backup::{self, load_document};
use whatkg::errors::AppResult;

fn emit(output: Option<&Path>, content: &str) -> AppResult<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

pub async fn export_json(session: &Session, output: Option<&Path>) -> AppResult<()> {
    let document = backup::export_document(&session.store, &session.settings, Utc::now()).await?;
    emit(output, &document.to_json()?)
}

pub async fn export_csv(session: &Session, member: &str, output: Option<&Path>) -> AppResult<()> {
    let csv = backup::export_csv(&session.store, &member_id(member)).await?;
    emit(output, csv.trim_end())
}

pub async fn import(session: &Session, file: &Path) -> AppResult<()> {
    let document = load_document(file)?;
    let imported = backup::import_document(&session.store, &document).await?;
    println!(
        "Imported {} members and {imported} records from {}",
        document.members.len(),
        file.display()
    );
    Ok(())
}
