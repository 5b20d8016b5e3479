// ABOUTME: Backup document export and import plus CSV export of weight records
// ABOUTME: The JSON backup is also the CLI's data file format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Backup and export.
//!
//! A [`BackupDocument`] holds user settings and, per member, the profile,
//! every observation, the active goal, and past goals. Removed members are
//! included so their records survive. Identifiers and timestamps are written
//! out and restored as-is, which is what lets the CLI data file keep record
//! ids stable between runs. Documents from elsewhere may omit them; missing
//! ids are generated and missing timestamps fall back to `exported_at`.
//!
//! Import validates every member and goal before writing anything.
//! Observations that fail validation are skipped with a warning so one bad
//! row does not block a restore.

use crate::config::AppSettings;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::store::{DataStore, StoreError};
use chrono::{DateTime, NaiveDate, Utc};
use csv::Writer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;
use whatkg_core::models::{
    FamilyMember, Goal, MemberId, NewObservation, ObservationId, WeightObservation,
};
use whatkg_core::validation::{validate_goal, validate_member, validate_new_observation};

/// A single observation as stored in a backup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupObservation {
    /// Observation identifier, generated on import when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObservationId>,
    /// Measurement date
    pub date: NaiveDate,
    /// Weight in kg
    pub weight: f64,
    /// Optional memo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<WeightObservation> for BackupObservation {
    fn from(observation: WeightObservation) -> Self {
        Self {
            id: Some(observation.id),
            date: observation.date,
            weight: observation.weight,
            memo: observation.memo,
            created_at: Some(observation.created_at),
            updated_at: Some(observation.updated_at),
        }
    }
}

impl BackupObservation {
    fn to_observation(&self, member_id: &MemberId, fallback: DateTime<Utc>) -> WeightObservation {
        let created_at = self.created_at.unwrap_or(fallback);
        let mut observation = WeightObservation::from_new(
            NewObservation {
                member_id: member_id.clone(),
                date: self.date,
                weight: self.weight,
                memo: self.memo.clone(),
            },
            created_at,
            0,
        );
        if let Some(id) = self.id {
            observation.id = id;
        }
        observation.updated_at = self.updated_at.unwrap_or(created_at);
        observation
    }
}

/// One member with their records and goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberBackup {
    /// Member profile
    pub member: FamilyMember,
    /// Observations, oldest first
    #[serde(default)]
    pub observations: Vec<BackupObservation>,
    /// Active goal, if any
    #[serde(default)]
    pub goal: Option<Goal>,
    /// Superseded or cleared goals, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past_goals: Vec<Goal>,
}

/// Complete backup of the application's data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Document format version
    pub version: u32,
    /// When the backup was produced
    pub exported_at: DateTime<Utc>,
    /// User preferences
    #[serde(default)]
    pub settings: AppSettings,
    /// Members with their data
    pub members: Vec<MemberBackup>,
}

impl BackupDocument {
    /// An empty document with default settings
    #[must_use]
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            version: defaults::BACKUP_VERSION,
            exported_at: now,
            settings: AppSettings::default(),
            members: Vec::new(),
        }
    }

    /// Total number of observations across members
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.members.iter().map(|m| m.observations.len()).sum()
    }

    /// Members still shown in the family list
    pub fn active_members(&self) -> impl Iterator<Item = &MemberBackup> {
        self.members.iter().filter(|m| m.member.is_active)
    }

    /// Parse a backup from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the text is not JSON or has no `members`
    /// array, and `SerializationError` when the structure does not match
    pub fn from_json(text: &str) -> AppResult<Self> {
        let raw: Value = serde_json::from_str(text).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("backup is not valid JSON: {e}"))
        })?;
        if !raw.get("members").is_some_and(Value::is_array) {
            return Err(AppError::new(
                ErrorCode::InvalidFormat,
                "backup has no members array",
            ));
        }
        Ok(serde_json::from_value(raw)?)
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every member profile and goal.
    ///
    /// Observations are not checked here; invalid ones are skipped on import.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, tagged with the member it belongs to
    pub fn validate(&self) -> AppResult<()> {
        for entry in &self.members {
            let tag = |error: AppError| error.with_member_id(entry.member.id.as_str());
            validate_member(&entry.member).map_err(|e| tag(e.into()))?;
            for goal in entry.past_goals.iter().chain(entry.goal.iter()) {
                validate_goal(goal).map_err(|e| tag(e.into()))?;
            }
        }
        Ok(())
    }
}

/// Size figures for the stored data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSummary {
    /// Active members
    pub members: usize,
    /// Observations across active members
    pub observations: usize,
    /// Size of the serialized backup in bytes
    pub bytes: usize,
}

/// Export every member with their observations and goals
///
/// # Errors
///
/// Returns a storage error if the store fails
pub async fn export_document<S>(
    store: &S,
    settings: &AppSettings,
    now: DateTime<Utc>,
) -> AppResult<BackupDocument>
where
    S: DataStore + ?Sized,
{
    let mut document = BackupDocument::empty(now);
    document.settings = settings.clone();

    for member in store.all_members().await? {
        let observations = store
            .range_ascending(&member.id, NaiveDate::MIN, NaiveDate::MAX)
            .await?
            .into_iter()
            .map(BackupObservation::from)
            .collect();
        let mut past_goals: Vec<Goal> = store
            .goal_history(&member.id)
            .await?
            .into_iter()
            .filter(|g| !g.is_active)
            .collect();
        past_goals.reverse();
        let goal = store.active_goal(&member.id).await?;
        document.members.push(MemberBackup {
            member,
            observations,
            goal,
            past_goals,
        });
    }

    AppLogger::log_backup_event(
        "export",
        document.members.len(),
        document.observation_count(),
    );
    Ok(document)
}

/// Restore the members, observations, and goals of a backup.
///
/// The whole document is validated first, so a bad member or goal leaves the
/// store untouched. Identifiers already taken in the store are replaced with
/// fresh ones. Returns the number of observations imported.
///
/// # Errors
///
/// Returns a validation error for invalid member profiles or goals, and a
/// storage error if the store fails
pub async fn import_document<S>(store: &S, document: &BackupDocument) -> AppResult<usize>
where
    S: DataStore + ?Sized,
{
    document.validate()?;

    let mut imported = 0;
    for entry in &document.members {
        let member_id = import_member(store, &entry.member).await?;

        for observation in &entry.observations {
            let new = NewObservation {
                member_id: member_id.clone(),
                date: observation.date,
                weight: observation.weight,
                memo: observation.memo.clone(),
            };
            if let Err(error) = validate_new_observation(&new) {
                warn!(
                    member.id = %member_id,
                    date = %observation.date,
                    error = %error,
                    "Skipping invalid observation in backup"
                );
                continue;
            }
            import_observation(store, observation.to_observation(&member_id, document.exported_at))
                .await?;
            imported += 1;
        }

        let goals = entry
            .past_goals
            .iter()
            .chain(entry.goal.iter().filter(|g| g.is_active));
        for goal in goals {
            import_goal(store, &member_id, goal.clone()).await?;
        }
    }

    AppLogger::log_backup_event("import", document.members.len(), imported);
    Ok(imported)
}

async fn import_member<S>(store: &S, member: &FamilyMember) -> AppResult<MemberId>
where
    S: DataStore + ?Sized,
{
    match store.restore_member(member.clone()).await {
        Ok(restored) => Ok(restored.id),
        Err(error) if error.is_conflict() => {
            let mut renamed = member.clone();
            renamed.id = MemberId::generate();
            let restored = store.restore_member(renamed).await?;
            info!(
                original.id = %member.id,
                member.id = %restored.id,
                "Member identifier taken, imported under a new identifier"
            );
            Ok(restored.id)
        }
        Err(other) => Err(other.into()),
    }
}

async fn import_observation<S>(store: &S, observation: WeightObservation) -> AppResult<()>
where
    S: DataStore + ?Sized,
{
    match store.restore_observation(observation.clone()).await {
        Ok(_) => Ok(()),
        Err(error) if error.is_conflict() => {
            let original = observation.id;
            let mut renamed = observation;
            renamed.id = Uuid::new_v4();
            debug!(original.id = %original, record.id = %renamed.id, "Observation identifier taken");
            store.restore_observation(renamed).await?;
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

async fn import_goal<S>(store: &S, member_id: &MemberId, mut goal: Goal) -> AppResult<()>
where
    S: DataStore + ?Sized,
{
    goal.member_id = member_id.clone();
    match store.restore_goal(goal.clone()).await {
        Ok(_) => Ok(()),
        Err(error) if error.is_conflict() => {
            goal.id = Uuid::new_v4();
            store.restore_goal(goal).await?;
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

/// Data size summary for the settings screen
///
/// # Errors
///
/// Returns a storage or serialization error
pub async fn data_summary<S>(store: &S, settings: &AppSettings, now: DateTime<Utc>) -> AppResult<DataSummary>
where
    S: DataStore + ?Sized,
{
    let document = export_document(store, settings, now).await?;
    Ok(DataSummary {
        members: document.active_members().count(),
        observations: document.active_members().map(|m| m.observations.len()).sum(),
        bytes: serde_json::to_vec(&document)?.len(),
    })
}

#[derive(Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    weight_kg: f64,
    memo: &'a str,
}

/// CSV of one member's observations, oldest first, with header `date,weight_kg,memo`
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members and `SerializationError`
/// if a row cannot be written
pub async fn export_csv<S>(store: &S, member: &MemberId) -> AppResult<String>
where
    S: DataStore + ?Sized,
{
    if store.get_member(member).await?.is_none() {
        return Err(StoreError::member_not_found(member).into());
    }
    let observations = store
        .range_ascending(member, NaiveDate::MIN, NaiveDate::MAX)
        .await?;

    let csv_error = |e: csv::Error| AppError::serialization(format!("CSV export failed: {e}"));
    let mut writer = Writer::from_writer(Vec::new());
    if observations.is_empty() {
        writer
            .write_record(["date", "weight_kg", "memo"])
            .map_err(csv_error)?;
    }
    for observation in &observations {
        writer
            .serialize(CsvRow {
                date: observation.date,
                weight_kg: observation.weight,
                memo: observation.memo_text(),
            })
            .map_err(csv_error)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::serialization(format!("CSV export failed: {e}")))?;
    debug!(member.id = %member, rows = observations.len(), "Exported CSV");
    String::from_utf8(bytes).map_err(|e| AppError::serialization(e.to_string()))
}

/// Read a backup document from disk
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and a format error if
/// it is not a backup document
pub fn load_document(path: &Path) -> AppResult<BackupDocument> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::storage(format!("cannot read {}", path.display())).with_source(e))?;
    BackupDocument::from_json(&text)
}

/// Read a backup document, or an empty one when the file does not exist yet
///
/// # Errors
///
/// Same as [`load_document`] for files that exist
pub fn load_or_empty(path: &Path, now: DateTime<Utc>) -> AppResult<BackupDocument> {
    if path.exists() {
        load_document(path)
    } else {
        debug!(path = %path.display(), "Data file missing, starting empty");
        Ok(BackupDocument::empty(now))
    }
}

/// Write a backup document to disk, creating the parent directory
///
/// # Errors
///
/// Returns a storage error if the directory or file cannot be written
pub fn save_document(path: &Path, document: &BackupDocument) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document.to_json()?)
        .map_err(|e| AppError::storage(format!("cannot write {}", path.display())).with_source(e))?;
    debug!(path = %path.display(), members = document.members.len(), "Saved data file");
    Ok(())
}
