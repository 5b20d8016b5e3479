// ABOUTME: Calendar grid builder producing a fixed 42-cell month grid
// ABOUTME: Month view projection tags cells with in-month, today, the day's observation, and its status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Month calendar.
//!
//! [`build_month_grid`] is a pure date computation and does not tag cells.
//! [`MonthView::project`] derives the per-cell view state a calendar screen
//! renders, against an explicit `today`. [`MonthView::annotate`] adds each
//! recorded day's change and [`CellStatus`] for colouring.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use crate::statistics::{ChangeDirection, EntryChange, WeightStatistics};
use whatkg_core::constants::calendar::{DAYS_PER_ROW, GRID_CELLS};
use whatkg_core::constants::planner::MAINTAIN_DEAD_ZONE_KG;
use whatkg_core::errors::ValidationError;
use whatkg_core::models::{chronological_cmp, Goal, GoalType, WeightObservation};
use whatkg_core::units::compare_to_band;

/// First day of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks start on Sunday
    #[default]
    Sunday,
    /// Weeks start on Monday
    Monday,
}

impl WeekStart {
    /// Days between `weekday` and the week start on or before it
    #[must_use]
    pub fn days_since_start(self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Weekday the week starts on
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(format!("unknown week start: {other}")),
        }
    }
}

/// A validated calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Month from a year and a month number in `1..=12`
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` for month numbers outside `1..=12` and
    /// `InvalidDate` for years outside the supported date range
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(ValidationError::InvalidDate { field: "year" })
    }

    /// Parse a `YYYY-MM` string
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` for malformed input and `InvalidMonth` for bad month numbers
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let malformed = ValidationError::InvalidDate { field: "month" };
        let (year, month) = input.trim().split_once('-').ok_or_else(|| malformed.clone())?;
        let year = year.parse::<i32>().map_err(|_| malformed.clone())?;
        let month = month.parse::<u32>().map_err(|_| malformed)?;
        Self::new(year, month)
    }

    /// Month containing `date`
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Calendar year
    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Month number in `1..=12`
    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// First day of the month
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Last day of the month
    #[must_use]
    pub fn last_day(self) -> Option<NaiveDate> {
        self.next()?.first.pred_opt()
    }

    /// Whether `date` falls in this month
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The month before, `None` at the start of the supported range
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// The month after, `None` at the end of the supported range
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// A 6x7 grid of dates covering a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year_month: YearMonth,
    week_start: WeekStart,
    cells: [NaiveDate; GRID_CELLS],
}

impl MonthGrid {
    /// Month the grid was built for
    #[must_use]
    pub const fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// Week start the grid was built with
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// All 42 dates, first cell first
    #[must_use]
    pub const fn cells(&self) -> &[NaiveDate; GRID_CELLS] {
        &self.cells
    }

    /// Six rows of seven dates
    pub fn rows(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.cells.chunks(DAYS_PER_ROW)
    }

    /// Whether a grid date belongs to the grid's month
    #[must_use]
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        self.year_month.contains(date)
    }
}

/// Build the 42-cell grid for a month.
///
/// The first cell is the `week_start` day on or before the 1st; every later
/// cell is one day after the previous one.
///
/// # Errors
///
/// Returns `InvalidMonth` for month numbers outside `1..=12`, and
/// `InvalidDate` when the grid would leave the supported date range
pub fn build_month_grid(
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Result<MonthGrid, ValidationError> {
    let year_month = YearMonth::new(year, month)?;
    let out_of_range = ValidationError::InvalidDate { field: "year" };

    let first = year_month.first_day();
    let lead = week_start.days_since_start(first.weekday());
    let grid_start = first
        .checked_sub_days(Days::new(u64::from(lead)))
        .ok_or_else(|| out_of_range.clone())?;

    let mut cells = [grid_start; GRID_CELLS];
    for (offset, cell) in (0_u64..).zip(cells.iter_mut()) {
        *cell = grid_start
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| out_of_range.clone())?;
    }

    Ok(MonthGrid {
        year_month,
        week_start,
        cells,
    })
}

/// Colour class of a recorded calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// The day's weight reached the active goal
    GoalAchieved,
    /// Within 0.1 kg of the previous recorded day, or the first record
    Stable,
    /// Up by more than 0.1 kg
    Up,
    /// Down by more than 0.1 kg
    Down,
}

impl CellStatus {
    /// Status of a recorded weight; goal achievement wins over the change
    #[must_use]
    pub fn classify(weight: f64, change: Option<EntryChange>, goal: Option<&Goal>) -> Self {
        if goal.is_some_and(|g| goal_reached(g, weight)) {
            return Self::GoalAchieved;
        }
        match change.map(|c| c.direction) {
            Some(ChangeDirection::Increase) => Self::Up,
            Some(ChangeDirection::Decrease) => Self::Down,
            Some(ChangeDirection::Stable) | None => Self::Stable,
        }
    }
}

fn goal_reached(goal: &Goal, weight: f64) -> bool {
    match goal.goal_type {
        GoalType::Lose => weight <= goal.target_weight,
        GoalType::Gain => weight >= goal.target_weight,
        GoalType::Maintain => {
            compare_to_band(weight - goal.target_weight, MAINTAIN_DEAD_ZONE_KG).is_eq()
        }
    }
}

/// One rendered calendar cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Date of the cell
    pub date: NaiveDate,
    /// Whether the date is in the displayed month
    pub in_month: bool,
    /// Whether the date is today
    pub is_today: bool,
    /// Newest observation recorded on this date, if any
    pub observation: Option<WeightObservation>,
    /// Change versus the previous recorded day, one decimal (kg)
    #[serde(default)]
    pub change: Option<f64>,
    /// Colour class, set by [`MonthView::annotate`] on recorded days
    #[serde(default)]
    pub status: Option<CellStatus>,
}

/// Calendar month with observations projected onto its cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthView {
    /// Displayed month as `YYYY-MM`
    pub month: String,
    /// Week start used for the grid
    pub week_start: WeekStart,
    /// 42 cells, first cell first
    pub cells: Vec<CalendarCell>,
}

impl MonthView {
    /// Tag each grid cell and attach the observation recorded that day.
    ///
    /// With several observations on one date the newest (later
    /// `created_at`, then later insertion) is shown.
    #[must_use]
    pub fn project(grid: &MonthGrid, today: NaiveDate, observations: &[WeightObservation]) -> Self {
        let mut by_date: HashMap<NaiveDate, &WeightObservation> = HashMap::new();
        for observation in observations {
            by_date
                .entry(observation.date)
                .and_modify(|current| {
                    if chronological_cmp(observation, current).is_gt() {
                        *current = observation;
                    }
                })
                .or_insert(observation);
        }

        let cells = grid
            .cells()
            .iter()
            .map(|&date| CalendarCell {
                date,
                in_month: grid.is_in_month(date),
                is_today: date == today,
                observation: by_date.get(&date).map(|o| (*o).clone()),
                change: None,
                status: None,
            })
            .collect();

        Self {
            month: grid.year_month().to_string(),
            week_start: grid.week_start(),
            cells,
        }
    }

    /// Fill in each recorded day's change and status.
    ///
    /// Days are compared with the previous recorded day in the grid; the
    /// first one is compared with `previous`, the newest observation before
    /// the grid, when there is one.
    pub fn annotate(&mut self, previous: Option<&WeightObservation>, goal: Option<&Goal>) {
        let mut last_weight = previous.map(|o| o.weight);
        for cell in &mut self.cells {
            let Some(observation) = &cell.observation else {
                continue;
            };
            let change = last_weight.map(|prev| WeightStatistics::entry_change(observation.weight, prev));
            cell.change = change.map(|c| c.value);
            cell.status = Some(CellStatus::classify(observation.weight, change, goal));
            last_weight = Some(observation.weight);
        }
    }

    /// Number of in-month days with an observation
    #[must_use]
    pub fn recorded_days(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.in_month && c.observation.is_some())
            .count()
    }

    /// Observation shown on `date`, if the date is in the grid
    #[must_use]
    pub fn observation_on(&self, date: NaiveDate) -> Option<&WeightObservation> {
        self.cells
            .iter()
            .find(|c| c.date == date)
            .and_then(|c| c.observation.as_ref())
    }
}
