// ABOUTME: Command modules for whatkg-cli plus the session holding the loaded data file
// ABOUTME: The session imports the data file into an in-memory store and writes it back on save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod data;
pub mod goal;
pub mod member;
pub mod record;
pub mod settings;
pub mod view;

use chrono::{NaiveDate, Utc};
use tracing::debug;
use whatkg::backup::{export_document, import_document, load_or_empty, save_document};
use whatkg::config::{AppConfig, AppSettings};
use whatkg::errors::AppResult;
use whatkg::models::MemberId;
use whatkg::store::InMemoryStore;
use whatkg::validation::parse_number;

/// Data loaded for one CLI invocation
pub struct Session {
    pub store: InMemoryStore,
    pub settings: AppSettings,
    pub config: AppConfig,
    pub today: NaiveDate,
}

impl Session {
    /// Load the data file into a fresh in-memory store
    pub async fn open(config: AppConfig, today: NaiveDate) -> AppResult<Self> {
        let document = load_or_empty(&config.data_file, Utc::now())?;
        let store = InMemoryStore::new();
        let observations = import_document(&store, &document).await?;
        debug!(
            members = document.members.len(),
            observations, "Loaded data file"
        );
        Ok(Self {
            store,
            settings: document.settings,
            config,
            today,
        })
    }

    /// Write the store and settings back to the data file
    pub async fn save(&self) -> AppResult<()> {
        let document = export_document(&self.store, &self.settings, Utc::now()).await?;
        save_document(&self.config.data_file, &document)
    }

    /// Parse a weight entered in the display unit into kilograms
    pub fn weight_input(&self, input: &str, field: &'static str) -> AppResult<f64> {
        Ok(self.settings.unit.to_kg(parse_number(input, field)?))
    }
}

pub fn member_id(input: &str) -> MemberId {
    MemberId::new(input.trim())
}
