// ABOUTME: Weight statistics over a period, chart statistics, and per-entry changes
// ABOUTME: Backs the dashboard summary, the chart screen, and the record list deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use whatkg_core::constants::planner::DAYS_PER_WEEK;
use whatkg_core::constants::trend::ENTRY_CHANGE_THRESHOLD_KG;
use whatkg_core::models::{chronological_cmp, WeightObservation};
use whatkg_core::units::{compare_to_band, round_one_decimal};

/// Summary of a member's weights over a lookback window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightStats {
    /// Newest weight in the window (kg)
    pub latest: f64,
    /// Oldest weight in the window (kg)
    pub oldest: f64,
    /// `latest - oldest`, one decimal (kg)
    pub change: f64,
    /// Mean weight, one decimal (kg)
    pub average: f64,
    /// Lowest weight (kg)
    pub min: f64,
    /// Highest weight (kg)
    pub max: f64,
    /// Number of records in the window
    pub record_count: usize,
    /// Lookback window (days)
    pub period_days: u32,
}

/// Direction of one entry relative to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    /// Up by more than 0.1 kg
    Increase,
    /// Down by more than 0.1 kg
    Decrease,
    /// Within 0.1 kg
    Stable,
}

/// Change of one entry versus the next older entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryChange {
    /// Signed change, one decimal (kg)
    pub value: f64,
    /// Classified direction
    pub direction: ChangeDirection,
}

/// Time range shown on the chart screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPeriod {
    /// Last 7 days
    Week,
    /// Last calendar month
    #[default]
    Month,
    /// Last three calendar months
    ThreeMonths,
    /// Last two years
    All,
}

impl ChartPeriod {
    /// First date included for this period, or `None` if it would precede the supported range
    #[must_use]
    pub fn start_date(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Week => today.checked_sub_days(Days::new(7)),
            Self::Month => today.checked_sub_months(Months::new(1)),
            Self::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Self::All => today.checked_sub_months(Months::new(24)),
        }
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "1w" => Ok(Self::Week),
            "month" | "1m" => Ok(Self::Month),
            "three_months" | "three-months" | "3m" => Ok(Self::ThreeMonths),
            "all" => Ok(Self::All),
            other => Err(format!("unknown chart period: {other}")),
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::ThreeMonths => write!(f, "three_months"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Statistics shown under the weight chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStatistics {
    /// Earliest weight in range (kg)
    pub start_weight: f64,
    /// Latest weight in range (kg)
    pub current_weight: f64,
    /// `current - start`, one decimal (kg)
    pub total_change: f64,
    /// Average change per week over the span, one decimal (kg/week)
    pub weekly_average: f64,
    /// Highest weight (kg)
    pub max_weight: f64,
    /// Lowest weight (kg)
    pub min_weight: f64,
    /// Number of records in range
    pub record_days: usize,
    /// Active goal target, if any (kg)
    pub goal_weight: Option<f64>,
}

/// One plotted chart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Observation date
    pub date: NaiveDate,
    /// Observed weight (kg)
    pub weight: f64,
}

/// Least-squares line through chart points indexed `0, 1, 2, ...`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Change per plotted point (kg)
    pub slope: f64,
    /// Fitted value at the first point (kg)
    pub intercept: f64,
}

impl TrendLine {
    /// Fitted weight at a point index
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let x = index as f64;
        self.slope.mul_add(x, self.intercept)
    }
}

/// Weight statistics calculator
pub struct WeightStatistics;

impl WeightStatistics {
    /// Summarize an oldest-first window, `None` when it is empty
    #[must_use]
    pub fn weight_stats(records_ascending: &[WeightObservation], period_days: u32) -> Option<WeightStats> {
        let oldest = records_ascending.first()?.weight;
        let latest = records_ascending.last()?.weight;
        let (min, max) = min_max(records_ascending);
        let sum: f64 = records_ascending.iter().map(|r| r.weight).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = sum / records_ascending.len() as f64;

        Some(WeightStats {
            latest,
            oldest,
            change: round_one_decimal(latest - oldest),
            average: round_one_decimal(average),
            min,
            max,
            record_count: records_ascending.len(),
            period_days,
        })
    }

    /// Change of each entry versus the next older one; the oldest entry has none.
    ///
    /// `records` must be newest first.
    #[must_use]
    pub fn entry_changes(records: &[WeightObservation]) -> Vec<Option<EntryChange>> {
        let mut changes: Vec<Option<EntryChange>> = records
            .windows(2)
            .map(|pair| Some(Self::entry_change(pair[0].weight, pair[1].weight)))
            .collect();
        if !records.is_empty() {
            changes.push(None);
        }
        changes
    }

    /// Change from `previous` to `current`; exactly 0.1 kg either way is stable
    #[must_use]
    pub fn entry_change(current: f64, previous: f64) -> EntryChange {
        let change = current - previous;
        let direction = match compare_to_band(change, ENTRY_CHANGE_THRESHOLD_KG) {
            Ordering::Greater => ChangeDirection::Increase,
            Ordering::Less => ChangeDirection::Decrease,
            Ordering::Equal => ChangeDirection::Stable,
        };
        EntryChange {
            value: round_one_decimal(change),
            direction,
        }
    }

    /// Chart statistics for records in any order, `None` when empty
    #[must_use]
    pub fn chart_statistics(
        records: &[WeightObservation],
        goal_weight: Option<f64>,
    ) -> Option<ChartStatistics> {
        let mut sorted: Vec<&WeightObservation> = records.iter().collect();
        sorted.sort_by(|a, b| chronological_cmp(a, b));

        let first = *sorted.first()?;
        let last = *sorted.last()?;
        let total_change = last.weight - first.weight;
        #[allow(clippy::cast_precision_loss)]
        let span_days = ((last.date - first.date).num_days() as f64).max(1.0);
        let (min_weight, max_weight) = min_max(records);

        Some(ChartStatistics {
            start_weight: first.weight,
            current_weight: last.weight,
            total_change: round_one_decimal(total_change),
            weekly_average: round_one_decimal(total_change / span_days * DAYS_PER_WEEK),
            max_weight,
            min_weight,
            record_days: records.len(),
            goal_weight,
        })
    }

    /// Linear regression over oldest-first points, using the point index as x.
    ///
    /// `None` with fewer than two points, where no line is defined.
    #[must_use]
    pub fn trend_line(points: &[ChartPoint]) -> Option<TrendLine> {
        if points.len() < 2 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_xx) = (0_u32..).zip(points).fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sx, sy, sxy, sxx), (index, point)| {
                let x = f64::from(index);
                (sx + x, sy + point.weight, x.mul_add(point.weight, sxy), x.mul_add(x, sxx))
            },
        );

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;
        Some(TrendLine { slope, intercept })
    }

    /// Oldest-first chart points
    #[must_use]
    pub fn chart_points(records: &[WeightObservation]) -> Vec<ChartPoint> {
        let mut sorted: Vec<&WeightObservation> = records.iter().collect();
        sorted.sort_by(|a, b| chronological_cmp(a, b));
        sorted
            .into_iter()
            .map(|r| ChartPoint {
                date: r.date,
                weight: r.weight,
            })
            .collect()
    }
}

fn min_max(records: &[WeightObservation]) -> (f64, f64) {
    records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.weight), hi.max(r.weight))
    })
}
