use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::unit::Unit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftMode {
    #[default]
    Generic,
    BenchPress,
}

impl LiftMode {
    pub const BENCH_BAR_LBS: f64 = 45.0;
    pub const BENCH_BAR_KG: f64 = 20.4;

    #[must_use]
    pub fn generic() -> LiftMode {
        LiftMode::Generic
    }

    #[must_use]
    pub fn bench_press() -> LiftMode {
        LiftMode::BenchPress
    }

    /// Bar weight counted toward the total: none for generic lifts, 45 lbs or
    /// 20.4 kg for bench press.
    #[must_use]
    pub fn bar_weight(&self, unit: Unit) -> f64 {
        match (self, unit) {
            (LiftMode::Generic, _) => 0.0,
            (LiftMode::BenchPress, Unit::Imperial) => Self::BENCH_BAR_LBS,
            (LiftMode::BenchPress, Unit::Metric) => Self::BENCH_BAR_KG,
        }
    }
}

impl Display for LiftMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiftMode::Generic => write!(f, "Generic"),
            LiftMode::BenchPress => write!(f, "Bench Press"),
        }
    }
}

impl FromStr for LiftMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" | "generic" => Ok(LiftMode::Generic),
            "b" | "bench" | "bench-press" => Ok(LiftMode::BenchPress),
            _ => Err("Invalid lift mode.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_weight_only_counts_for_bench() {
        assert_eq!(LiftMode::Generic.bar_weight(Unit::Imperial), 0.0);
        assert_eq!(LiftMode::Generic.bar_weight(Unit::Metric), 0.0);
        assert_eq!(LiftMode::BenchPress.bar_weight(Unit::Imperial), 45.0);
        assert_eq!(LiftMode::BenchPress.bar_weight(Unit::Metric), 20.4);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("b".parse::<LiftMode>(), Ok(LiftMode::BenchPress));
        assert_eq!("Bench".parse::<LiftMode>(), Ok(LiftMode::BenchPress));
        assert_eq!("generic".parse::<LiftMode>(), Ok(LiftMode::Generic));
        assert!("squat".parse::<LiftMode>().is_err());
    }
}
