use std::{fmt::Display, str::FromStr};

use serde::Serialize;

pub const LBS_TO_KG: f64 = 0.453_592;
pub const KG_TO_LBS: f64 = 2.204_62;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Imperial,
    Metric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    ToMetric,
    ToImperial,
}

impl Unit {
    #[must_use]
    pub fn imperial() -> Unit {
        Unit::Imperial
    }

    #[must_use]
    pub fn metric() -> Unit {
        Unit::Metric
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Imperial => "lbs",
            Unit::Metric => "kg",
        }
    }

    /// Direction that converts a value into this unit.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            Unit::Imperial => Direction::ToImperial,
            Unit::Metric => Direction::ToMetric,
        }
    }

    /// Converts a pending input typed in the other unit into this one,
    /// rounded to a single decimal place.
    #[must_use]
    pub fn switch_input(&self, value: f64) -> f64 {
        (convert(value, self.direction()) * 10.0).round() / 10.0
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lbs" | "lb" | "imperial" | "i" => Ok(Unit::Imperial),
            "kg" | "kgs" | "metric" | "m" => Ok(Unit::Metric),
            _ => Err("Invalid unit.".to_string()),
        }
    }
}

#[must_use]
pub fn to_metric(weight_lbs: f64) -> f64 {
    weight_lbs * LBS_TO_KG
}

#[must_use]
pub fn to_imperial(weight_kg: f64) -> f64 {
    weight_kg * KG_TO_LBS
}

#[must_use]
pub fn convert(weight: f64, direction: Direction) -> f64 {
    match direction {
        Direction::ToMetric => to_metric(weight),
        Direction::ToImperial => to_imperial(weight),
    }
}

/// Renders `weight` with one decimal digit and the unit suffix, e.g. `145.0 lbs`.
#[must_use]
pub fn format_weight(weight: f64, unit: Unit) -> String {
    format!("{weight:.1} {unit}")
}
