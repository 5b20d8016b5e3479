// ABOUTME: WhatKg CLI - command-line front end for the family weight tracker
// ABOUTME: Manages members, records, goals, views, settings, and backups in a JSON data file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Add a family member
//! whatkg-cli member add --name Dad --relation parent --id dad
//!
//! # Record today's weight
//! whatkg-cli record add --member dad 72.4 --memo "after run"
//!
//! # Plan and set a goal
//! whatkg-cli goal plan --member dad --target 70 --date 2025-10-01
//! whatkg-cli goal set --member dad --target 70 --date 2025-10-01
//!
//! # Dashboard, chart statistics, and calendar
//! whatkg-cli dashboard --member dad
//! whatkg-cli chart --member dad --period 3m
//! whatkg-cli calendar --member dad --month 2025-07 --week-start monday
//!
//! # Backups
//! whatkg-cli export json --output backup.json
//! whatkg-cli import backup.json
//! ```

mod commands;
mod helpers;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use whatkg::config::AppConfig;
use whatkg::errors::AppResult;
use whatkg::logging::LoggingConfig;
use whatkg::validation::parse_date;

use commands::Session;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "whatkg-cli",
    about = "WhatKg family weight tracker",
    long_about = "Record family members' weights, follow trends, and plan weight goals. Data lives in a JSON backup file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data file override (defaults to WHATKG_DATA_FILE or ./data/whatkg.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Family member management
    Member {
        #[command(subcommand)]
        action: MemberCommand,
    },

    /// Weight records
    Record {
        #[command(subcommand)]
        action: RecordCommand,
    },

    /// Weight goals
    Goal {
        #[command(subcommand)]
        action: GoalCommand,
    },

    /// Latest weight, trend, goal progress, and recent records
    Dashboard {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,
    },

    /// Weight statistics over a lookback window
    Stats {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Window in days (defaults to WHATKG_TREND_PERIOD_DAYS)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Chart points and summary for a period
    Chart {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// week, month, 3m, or all
        #[arg(long, default_value = "month")]
        period: String,
    },

    /// Month calendar with recorded days
    Calendar {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// sunday or monday (defaults to WHATKG_WEEK_START)
        #[arg(long)]
        week_start: Option<String>,
    },

    /// User preferences
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Export data
    Export {
        #[command(subcommand)]
        action: ExportCommand,
    },

    /// Import a JSON backup into the data file
    Import {
        /// Backup file to read
        file: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MemberCommand {
    /// Add a family member
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// self, spouse, child, parent, or other
        #[arg(long, default_value = "self")]
        relation: String,

        /// Identifier (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<String>,

        /// Profile target weight in the display unit
        #[arg(long)]
        target_weight: Option<String>,
    },

    /// Change a member's profile
    Edit {
        /// Member identifier
        member: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// self, spouse, child, parent, or other
        #[arg(long)]
        relation: Option<String>,

        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<String>,

        /// Profile target weight in the display unit
        #[arg(long)]
        target_weight: Option<String>,
    },

    /// List active members
    List,

    /// Remove a member (records are kept unless --delete-records is given)
    Remove {
        /// Member identifier
        member: String,

        /// Also delete every record of the member
        #[arg(long)]
        delete_records: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecordCommand {
    /// Record a weight
    Add {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Weight in the display unit
        weight: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Note, up to 100 characters
        #[arg(long)]
        memo: Option<String>,
    },

    /// List records with change versus the previous entry
    List {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Text to look for in memos and dates
        #[arg(long)]
        search: Option<String>,

        /// all, this-month, or last-month
        #[arg(long, default_value = "all")]
        filter: String,

        /// latest, oldest, highest, or lowest
        #[arg(long, default_value = "latest")]
        sort: String,

        /// Maximum records to load (defaults to WHATKG_LIST_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Change a record's weight, date, or memo
    Edit {
        /// Record identifier
        id: String,

        /// New weight in the display unit
        #[arg(long)]
        weight: Option<String>,

        /// New date as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,

        /// New memo; an empty string clears it
        #[arg(long)]
        memo: Option<String>,
    },

    /// Delete one or more records
    Delete {
        /// Record identifiers
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalCommand {
    /// Plan and save a goal, replacing the active one
    Set {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Target weight in the display unit
        #[arg(long)]
        target: String,

        /// Target date as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Show the active goal and progress
    Show {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,
    },

    /// Deactivate the active goal
    Clear {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,
    },

    /// Plan a goal by target date without saving it
    Plan {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Target weight in the display unit
        #[arg(long)]
        target: String,

        /// Target date as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Plan a goal by weekly pace without saving it
    Pace {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Target weight in the display unit
        #[arg(long)]
        target: String,

        /// Weekly pace in kg (0.1 to 1.0)
        #[arg(long)]
        pace: String,
    },

    /// Goals set for a member, newest first
    History {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SettingsCommand {
    /// Show preferences and stored data size
    Show,

    /// Set the display unit
    SetUnit {
        /// kg or lb
        unit: String,
    },

    /// Set the color theme
    SetTheme {
        /// light, dark, or system
        theme: String,
    },

    /// Configure the daily reminder and goal alert
    SetReminder {
        /// Turn the daily reminder on or off
        #[arg(long)]
        enabled: Option<bool>,

        /// Reminder time as HH:MM
        #[arg(long)]
        time: Option<String>,

        /// Alert when a goal is reached
        #[arg(long)]
        goal_alert: Option<bool>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExportCommand {
    /// Full JSON backup
    Json {
        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// One member's records as CSV
    Csv {
        /// Member identifier
        #[arg(long, short = 'm')]
        member: String,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(input) => Ok(parse_date(input, "today")?),
        None => Ok(Local::now().date_naive()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = AppConfig::from_env();
    if let Some(data_file) = cli.data_file {
        config = config.with_data_file(data_file);
    }
    config.validate()?;

    let today = resolve_today(cli.today.as_deref())?;
    info!(data_file = %config.data_file.display(), %today, "WhatKg CLI");

    let mut session = Session::open(config, today).await?;

    match cli.command {
        Command::Member { action } => match action {
            MemberCommand::Add {
                name,
                relation,
                id,
                birth_date,
                target_weight,
            } => {
                commands::member::add(&session, name, &relation, id, birth_date, target_weight)
                    .await?;
                session.save().await?;
            }
            MemberCommand::Edit {
                member,
                name,
                relation,
                birth_date,
                target_weight,
            } => {
                commands::member::edit(
                    &session,
                    &member,
                    name,
                    relation.as_deref(),
                    birth_date.as_deref(),
                    target_weight.as_deref(),
                )
                .await?;
                session.save().await?;
            }
            MemberCommand::List => commands::member::list(&session).await?,
            MemberCommand::Remove {
                member,
                delete_records,
            } => {
                commands::member::remove(&session, &member, delete_records).await?;
                session.save().await?;
            }
        },
        Command::Record { action } => match action {
            RecordCommand::Add {
                member,
                weight,
                date,
                memo,
            } => {
                commands::record::add(&session, &member, &weight, date.as_deref(), memo).await?;
                session.save().await?;
            }
            RecordCommand::List {
                member,
                search,
                filter,
                sort,
                limit,
            } => {
                commands::record::list(&session, &member, search, &filter, &sort, limit).await?;
            }
            RecordCommand::Edit {
                id,
                weight,
                date,
                memo,
            } => {
                commands::record::edit(&session, &id, weight.as_deref(), date.as_deref(), memo)
                    .await?;
                session.save().await?;
            }
            RecordCommand::Delete { ids } => {
                commands::record::delete(&session, &ids).await?;
                session.save().await?;
            }
        },
        Command::Goal { action } => match action {
            GoalCommand::Set {
                member,
                target,
                date,
            } => {
                commands::goal::set(&session, &member, &target, &date).await?;
                session.save().await?;
            }
            GoalCommand::Show { member } => commands::goal::show(&session, &member).await?,
            GoalCommand::Clear { member } => {
                commands::goal::clear(&session, &member).await?;
                session.save().await?;
            }
            GoalCommand::Plan {
                member,
                target,
                date,
            } => commands::goal::plan(&session, &member, &target, &date).await?,
            GoalCommand::Pace {
                member,
                target,
                pace,
            } => commands::goal::pace(&session, &member, &target, &pace).await?,
            GoalCommand::History { member } => commands::goal::history(&session, &member).await?,
        },
        Command::Dashboard { member } => commands::view::dashboard(&session, &member).await?,
        Command::Stats { member, days } => commands::view::stats(&session, &member, days).await?,
        Command::Chart { member, period } => {
            commands::view::chart(&session, &member, &period).await?;
        }
        Command::Calendar {
            member,
            month,
            week_start,
        } => {
            commands::view::calendar(&session, &member, month.as_deref(), week_start.as_deref())
                .await?;
        }
        Command::Settings { action } => match action {
            SettingsCommand::Show => commands::settings::show(&session).await?,
            SettingsCommand::SetUnit { unit } => {
                commands::settings::set_unit(&mut session, &unit)?;
                session.save().await?;
            }
            SettingsCommand::SetTheme { theme } => {
                commands::settings::set_theme(&mut session, &theme)?;
                session.save().await?;
            }
            SettingsCommand::SetReminder {
                enabled,
                time,
                goal_alert,
            } => {
                commands::settings::set_reminder(&mut session, enabled, time.as_deref(), goal_alert)?;
                session.save().await?;
            }
        },
        Command::Export { action } => match action {
            ExportCommand::Json { output } => {
                commands::data::export_json(&session, output.as_deref()).await?;
            }
            ExportCommand::Csv { member, output } => {
                commands::data::export_csv(&session, &member, output.as_deref()).await?;
            }
        },
        Command::Import { file } => {
            commands::data::import(&session, &file).await?;
            session.save().await?;
        }
    }

    Ok(())
}
