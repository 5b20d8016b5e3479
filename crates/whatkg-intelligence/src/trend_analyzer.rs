// ABOUTME: Trend analyzer classifying weight change over a lookback window
// ABOUTME: Returns an insufficient_data sentinel instead of an error for short histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use whatkg_core::constants::trend::{MIN_RECORDS_FOR_TREND, STABLE_BAND_KG};
use whatkg_core::models::WeightObservation;
use whatkg_core::units::{compare_to_band, round_one_decimal};

/// Direction of weight change over a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Weight went up by more than the stable band
    Increasing,
    /// Weight went down by more than the stable band
    Decreasing,
    /// Change stayed within the stable band
    Stable,
    /// Fewer than two records in the window
    InsufficientData,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Stable => write!(f, "stable"),
            Self::InsufficientData => write!(f, "insufficient_data"),
        }
    }
}

/// Result of a trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Classified direction
    pub trend: TrendDirection,
    /// Newest minus oldest weight, rounded to one decimal (kg)
    pub change: f64,
    /// Lookback window the records were selected for
    pub period_days: u32,
    /// Number of records analyzed
    pub record_count: usize,
}

impl TrendResult {
    /// Whether there was enough data to classify a direction
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.trend != TrendDirection::InsufficientData
    }
}

/// Trend analyzer over a newest-first record window
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Classify the change between the newest and oldest record.
    ///
    /// `records` must be newest first, as returned by
    /// `RecordStore::recent_descending`, and already limited to the window;
    /// no date filtering happens here.
    #[must_use]
    pub fn analyze_trend(records: &[WeightObservation], period_days: u32) -> TrendResult {
        let record_count = records.len();
        let (Some(newest), Some(oldest)) = (records.first(), records.last()) else {
            return Self::insufficient(period_days, record_count);
        };
        if record_count < MIN_RECORDS_FOR_TREND {
            return Self::insufficient(period_days, record_count);
        }

        let raw_change = newest.weight - oldest.weight;

        TrendResult {
            trend: Self::classify(raw_change),
            change: round_one_decimal(raw_change),
            period_days,
            record_count,
        }
    }

    /// Classify a change in kilograms; a change of exactly 0.5 kg is stable
    #[must_use]
    pub fn classify(change: f64) -> TrendDirection {
        match compare_to_band(change, STABLE_BAND_KG) {
            Ordering::Greater => TrendDirection::Increasing,
            Ordering::Less => TrendDirection::Decreasing,
            Ordering::Equal => TrendDirection::Stable,
        }
    }

    const fn insufficient(period_days: u32, record_count: usize) -> TrendResult {
        TrendResult {
            trend: TrendDirection::InsufficientData,
            change: 0.0,
            period_days,
            record_count,
        }
    }
}
