// ABOUTME: Rounding and unit conversion helpers for weight values
// ABOUTME: One-decimal rounding used by every derived statistic, plus kg/lb conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Position of `change` relative to the symmetric band `[-band, band]`.
///
/// Both values are compared in whole hundredths of a kilogram, so a change
/// between one-decimal weights that is exactly on the band edge stays inside
/// it even when the float subtraction lands a hair outside.
#[must_use]
pub fn compare_to_band(change: f64, band: f64) -> Ordering {
    let hundredths = (change * 100.0).round();
    let limit = (band * 100.0).round();
    if hundredths > limit {
        Ordering::Greater
    } else if hundredths < -limit {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Unit a weight is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms (storage unit)
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Convert a stored kilogram value into this unit
    #[must_use]
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            Self::Kg => kg,
            Self::Lb => kg / KG_PER_LB,
        }
    }

    /// Convert a value entered in this unit into kilograms
    #[must_use]
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            Self::Kg => value,
            Self::Lb => value * KG_PER_LB,
        }
    }

    /// Format a stored kilogram value for display in this unit
    #[must_use]
    pub fn format(self, kg: f64) -> String {
        format!("{:.1}{self}", self.from_kg(kg))
    }

    /// Parse a unit name, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Some(Self::Kg),
            "lb" | "lbs" => Some(Self::Lb),
            _ => None,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kg => write!(f, "kg"),
            Self::Lb => write!(f, "lb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_are_inside() {
        assert_eq!(compare_to_band(64.4 - 63.9, 0.5), Ordering::Equal);
        assert_eq!(compare_to_band(30.1 - 30.0, 0.1), Ordering::Equal);
        assert_eq!(compare_to_band(0.51, 0.5), Ordering::Greater);
        assert_eq!(compare_to_band(-0.51, 0.5), Ordering::Less);
        assert_eq!(compare_to_band(-0.5, 0.5), Ordering::Equal);
    }

    #[test]
    fn test_round_one_decimal_half_away_from_zero() {
        assert!((round_one_decimal(1.25) - 1.3).abs() < f64::EPSILON);
        assert!((round_one_decimal(-1.25) - -1.3).abs() < f64::EPSILON);
        assert!((round_one_decimal(58.5 - 60.2) - -1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_conversion() {
        let lb = WeightUnit::Lb.from_kg(100.0);
        assert!((lb - 220.462).abs() < 0.001);
        assert!((WeightUnit::Lb.to_kg(lb) - 100.0).abs() < 1e-9);
        assert_eq!(WeightUnit::Kg.format(58.46), "58.5kg");
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!(WeightUnit::parse("KG"), Some(WeightUnit::Kg));
        assert_eq!(WeightUnit::parse(" lbs "), Some(WeightUnit::Lb));
        assert_eq!(WeightUnit::parse("stone"), None);
    }
}
