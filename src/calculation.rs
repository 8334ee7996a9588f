use std::fmt::Display;

use itertools::Itertools;
use serde::{Serialize, ser::SerializeStruct};

use crate::{
    lift_mode::LiftMode,
    plate::Plate,
    unit::{Unit, format_weight},
};

/// Outcome of a single forward or reverse calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub plates: Vec<Plate>,
    pub weight_per_side: f64,
    pub total_weight: f64,
    pub bar_weight: f64,
    pub mode: LiftMode,
    pub unit: Unit,
    /// Unit the plates themselves are labeled in. Summed loadouts keep
    /// their nominal pound plates even when the totals are shown in kg.
    pub plate_unit: Unit,
}

impl Calculation {
    #[must_use]
    pub fn plate_weights(&self) -> Vec<f64> {
        self.plates
            .iter()
            .map(|plate| plate.weight(self.plate_unit))
            .collect()
    }

    /// Runs of identical plates with their counts, heaviest first.
    #[must_use]
    pub fn grouped(&self) -> Vec<(Plate, usize)> {
        self.plates
            .iter()
            .copied()
            .dedup_with_count()
            .map(|(count, plate)| (plate, count))
            .collect()
    }

    #[must_use]
    pub fn weight_per_side(&self) -> f64 {
        self.weight_per_side
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    #[must_use]
    pub fn is_bench_press(&self) -> bool {
        self.mode == LiftMode::BenchPress
    }

    #[must_use]
    pub fn plate_summary(&self) -> String {
        if self.plates.is_empty() {
            return "No plates needed".to_string();
        }

        self.grouped()
            .into_iter()
            .map(|(plate, count)| match count {
                1 => plate.label(self.plate_unit),
                _ => format!("{} ({count})", plate.label(self.plate_unit)),
            })
            .join(", ")
    }
}

impl Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} per side [{}] = {} total",
            format_weight(self.weight_per_side, self.unit),
            self.plate_summary(),
            format_weight(self.total_weight, self.unit),
        )?;

        if self.is_bench_press() {
            write!(f, " (bar {})", format_weight(self.bar_weight, self.unit))?;
        }

        Ok(())
    }
}

impl Serialize for Calculation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Calculation", 7)?;
        state.serialize_field("plates", &self.plate_weights())?;
        state.serialize_field("plate_unit", self.plate_unit.label())?;
        state.serialize_field("weight_per_side", &self.weight_per_side)?;
        state.serialize_field("total_weight", &self.total_weight)?;
        state.serialize_field("bar_weight", &self.bar_weight)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("unit", self.unit.label())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculation(plates: Vec<Plate>, mode: LiftMode) -> Calculation {
        let weight_per_side = plates.iter().map(|p| p.weight(Unit::Imperial)).sum::<f64>();
        let bar_weight = mode.bar_weight(Unit::Imperial);
        Calculation {
            plates,
            weight_per_side,
            total_weight: weight_per_side * 2.0 + bar_weight,
            bar_weight,
            mode,
            unit: Unit::Imperial,
            plate_unit: Unit::Imperial,
        }
    }

    #[test]
    fn groups_consecutive_plates() {
        let calc = calculation(
            vec![Plate::FortyFive, Plate::FortyFive, Plate::Ten, Plate::TwoAndAHalf],
            LiftMode::Generic,
        );
        assert_eq!(
            calc.grouped(),
            vec![(Plate::FortyFive, 2), (Plate::Ten, 1), (Plate::TwoAndAHalf, 1)]
        );
        assert_eq!(calc.plate_summary(), "45 lbs (2), 10 lbs, 2.5 lbs");
    }

    #[test]
    fn displays_bar_only_for_bench() {
        let bench = calculation(vec![Plate::FortyFive, Plate::Ten], LiftMode::BenchPress);
        assert_eq!(
            bench.to_string(),
            "55.0 lbs per side [45 lbs, 10 lbs] = 155.0 lbs total (bar 45.0 lbs)"
        );

        let generic = calculation(vec![Plate::Five], LiftMode::Generic);
        assert_eq!(generic.to_string(), "5.0 lbs per side [5 lbs] = 10.0 lbs total");
    }

    #[test]
    fn empty_plates_render_placeholder() {
        let calc = calculation(vec![], LiftMode::BenchPress);
        assert_eq!(calc.plate_summary(), "No plates needed");
    }

    #[test]
    fn serializes_plate_weights_in_plate_unit() {
        let calc = calculation(vec![Plate::FortyFive, Plate::TwoAndAHalf], LiftMode::Generic);
        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["plates"], serde_json::json!([45.0, 2.5]));
        assert_eq!(json["plate_unit"], "lbs");
        assert_eq!(json["mode"], "generic");
        assert_eq!(json["total_weight"], 95.0);
    }
}
