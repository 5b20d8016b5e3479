// ABOUTME: Record list query applying search, month filter, and sort order
// ABOUTME: Evaluated against an explicit today so filters are deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::YearMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use whatkg_core::models::{chronological_cmp, WeightObservation};

/// Month filter for the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordFilter {
    /// No date restriction
    #[default]
    All,
    /// On or after the first of today's month
    ThisMonth,
    /// Within the previous calendar month
    LastMonth,
}

impl FromStr for RecordFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(Self::All),
            "this_month" => Ok(Self::ThisMonth),
            "last_month" => Ok(Self::LastMonth),
            other => Err(format!("unknown record filter: {other}")),
        }
    }
}

/// Sort order for the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSort {
    /// Newest first
    #[default]
    Latest,
    /// Oldest first
    Oldest,
    /// Heaviest first
    Highest,
    /// Lightest first
    Lowest,
}

impl FromStr for RecordSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "oldest" => Ok(Self::Oldest),
            "highest" => Ok(Self::Highest),
            "lowest" => Ok(Self::Lowest),
            other => Err(format!("unknown record sort: {other}")),
        }
    }
}

/// Search, filter, and sort settings for the record list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Case-insensitive term matched against memo, weight, and date
    pub search: Option<String>,
    /// Month filter
    pub filter: RecordFilter,
    /// Sort order
    pub sort: RecordSort,
}

impl RecordQuery {
    /// Apply the query to a record list
    #[must_use]
    pub fn apply(&self, records: Vec<WeightObservation>, today: NaiveDate) -> Vec<WeightObservation> {
        let term = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let range = self.date_range(today);

        let mut matched: Vec<WeightObservation> = records
            .into_iter()
            .filter(|r| range.is_none_or(|(from, to)| r.date >= from && to.is_none_or(|to| r.date <= to)))
            .filter(|r| term.as_deref().is_none_or(|t| Self::matches(r, t)))
            .collect();

        match self.sort {
            RecordSort::Latest => matched.sort_by(|a, b| chronological_cmp(b, a)),
            RecordSort::Oldest => matched.sort_by(chronological_cmp),
            RecordSort::Highest => matched.sort_by(|a, b| b.weight.total_cmp(&a.weight)),
            RecordSort::Lowest => matched.sort_by(|a, b| a.weight.total_cmp(&b.weight)),
        }
        matched
    }

    fn date_range(&self, today: NaiveDate) -> Option<(NaiveDate, Option<NaiveDate>)> {
        let this_month = YearMonth::from_date(today);
        match self.filter {
            RecordFilter::All => None,
            RecordFilter::ThisMonth => Some((this_month.first_day(), None)),
            RecordFilter::LastMonth => {
                let last_month = this_month.previous()?;
                Some((last_month.first_day(), last_month.last_day()))
            }
        }
    }

    fn matches(record: &WeightObservation, term: &str) -> bool {
        record.memo_text().to_lowercase().contains(term)
            || record.weight.to_string().contains(term)
            || record.date.to_string().contains(term)
    }
}
