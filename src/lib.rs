// ABOUTME: Main library entry point for the WhatKg family weight tracker
// ABOUTME: Wires configuration, logging, storage, services, and backup around the statistics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # WhatKg
//!
//! Family weight tracking: members record body-weight observations, follow
//! trends on a dashboard, chart, and calendar, and set weight goals.
//!
//! ## Architecture
//!
//! - **`whatkg-core`**: models, errors, validation, constants
//! - **`whatkg-intelligence`**: pure trend, progress, planning, calendar, and list computations
//! - **store**: async storage traits and the in-memory implementation
//! - **services**: free async functions composing stores with the engine
//! - **backup**: JSON backup document and CSV export
//! - **config** / **logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use whatkg::errors::AppResult;
//! use whatkg::services::{dashboard, records};
//! use whatkg::store::InMemoryStore;
//! use whatkg_core::models::NewMember;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = InMemoryStore::new();
//!     let today = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap_or_default();
//!     let member = whatkg::services::members::add_member(
//!         &store,
//!         NewMember { name: "Dad".into(), ..NewMember::default() },
//!     )
//!     .await?;
//!     records::record_weight(&store, &member.id, 72.4, None, None, today).await?;
//!     let summary = dashboard::dashboard(&store, &member.id, 30, 10, today).await?;
//!     println!("{:?}", summary.trend);
//!     Ok(())
//! }
//! ```

/// JSON backup document, import, and CSV export
pub mod backup;

/// Environment configuration and user settings
pub mod config;

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Services composing stores and the statistics engine
pub mod services;

/// Storage traits and the in-memory store
pub mod store;

pub use whatkg_core::constants;
pub use whatkg_core::{models, units, validation};
pub use whatkg_intelligence as intelligence;
