use crate::{
    calculation::Calculation,
    lift_mode::LiftMode,
    loadout::{Loadout, MAX_PLATES_PER_SIDE},
    plate::Plate,
    plate_error::PlateError,
    unit::{Unit, to_metric},
};

/// Largest leftover per side still accepted as an exact match.
pub const TOLERANCE: f64 = 0.1;

// Absorbs residue from repeated float subtraction so an exact fit still fits.
const EPSILON: f64 = 1e-9;

///
/// Works out which plates go on each side of the bar to reach `target`,
/// which is the full weight including the bar in bench press mode.
///
/// # Errors
/// `InvalidWeight` for non-positive targets, `BelowBarWeight` when a bench
/// press target is lighter than the bar, and `Unrepresentable` when the
/// standard plates cannot reach half of the remaining weight. Targets that
/// would need more than `MAX_PLATES_PER_SIDE` plates give `TooManyPlates`.
///
pub fn decompose(target: f64, mode: LiftMode, unit: Unit) -> Result<Calculation, PlateError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(PlateError::InvalidWeight(target));
    }

    let bar_weight = mode.bar_weight(unit);
    let remaining = target - bar_weight;
    if remaining < 0.0 {
        return Err(PlateError::BelowBarWeight {
            weight: target,
            bar: bar_weight,
            unit,
        });
    }

    let per_side = remaining / 2.0;
    let (loadout, leftover) = greedy(per_side, unit)?;

    if leftover.abs() > TOLERANCE {
        return Err(PlateError::Unrepresentable {
            per_side,
            leftover,
            unit,
        });
    }

    Ok(Calculation {
        plates: loadout.plates(),
        weight_per_side: loaded_weight(&loadout, unit),
        total_weight: target,
        bar_weight,
        mode,
        unit,
        plate_unit: unit,
    })
}

///
/// Totals the plates on one side of the bar. Plates are always weighed by
/// their nominal pound value; in metric the resulting figures are converted
/// for display while the plates keep their pound labels.
///
/// # Errors
/// `EmptyLoadout` if no plate has a non-zero count, `TooManyPlates` if the
/// loadout holds more than `MAX_PLATES_PER_SIDE` plates.
///
pub fn summarize(loadout: &Loadout, mode: LiftMode, unit: Unit) -> Result<Calculation, PlateError> {
    if loadout.is_empty() {
        return Err(PlateError::EmptyLoadout);
    }

    let count = loadout.plate_count();
    if count > u64::from(MAX_PLATES_PER_SIDE) {
        return Err(PlateError::TooManyPlates {
            count,
            max: MAX_PLATES_PER_SIDE,
        });
    }

    let weight_per_side = loaded_weight(loadout, Unit::Imperial);
    let bar_weight = mode.bar_weight(Unit::Imperial);
    let total_weight = weight_per_side * 2.0 + bar_weight;

    let (weight_per_side, total_weight, bar_weight) = match unit {
        Unit::Imperial => (weight_per_side, total_weight, bar_weight),
        Unit::Metric => (
            to_metric(weight_per_side),
            to_metric(total_weight),
            to_metric(bar_weight),
        ),
    };

    Ok(Calculation {
        plates: loadout.plates(),
        weight_per_side,
        total_weight,
        bar_weight,
        mode,
        unit,
        plate_unit: Unit::Imperial,
    })
}

/// Heaviest-first decomposition of `per_side`, returning the plates and the
/// unloaded remainder.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn greedy(per_side: f64, unit: Unit) -> Result<(Loadout, f64), PlateError> {
    let mut loadout = Loadout::new();
    let mut balance = per_side;
    let mut placed = 0.0;

    for plate in Plate::ALL {
        let weight = plate.weight(unit);
        let count = ((balance + EPSILON) / weight).floor().max(0.0);

        placed += count;
        if placed > f64::from(MAX_PLATES_PER_SIDE) {
            return Err(PlateError::TooManyPlates {
                count: placed as u64,
                max: MAX_PLATES_PER_SIDE,
            });
        }

        loadout.set(plate, count as u32);
        balance -= count * weight;
    }

    Ok((loadout, balance))
}

// Folds from +0.0; `Sum` for f64 starts at -0.0.
fn loaded_weight(loadout: &Loadout, unit: Unit) -> f64 {
    loadout
        .iter()
        .fold(0.0, |acc, (plate, count)| acc + plate.weight(unit) * f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::format_weight;

    #[test]
    fn decomposes_generic_target() {
        let calc = decompose(145.0, LiftMode::Generic, Unit::Imperial).unwrap();
        assert_eq!(
            calc.plates,
            vec![Plate::FortyFive, Plate::TwentyFive, Plate::TwoAndAHalf]
        );
        assert_eq!(calc.weight_per_side, 72.5);
        assert_eq!(calc.total_weight, 145.0);
        assert_eq!(calc.bar_weight, 0.0);
    }

    #[test]
    fn bench_press_subtracts_bar() {
        let calc = decompose(135.0, LiftMode::BenchPress, Unit::Imperial).unwrap();
        assert_eq!(calc.plates, vec![Plate::FortyFive]);
        assert_eq!(calc.weight_per_side, 45.0);
        assert_eq!(calc.total_weight, 135.0);
        assert_eq!(calc.bar_weight, 45.0);
    }

    #[test]
    fn bench_press_below_bar_is_invalid() {
        let err = decompose(44.0, LiftMode::BenchPress, Unit::Imperial).unwrap_err();
        assert!(err.is_invalid_weight());
        assert_eq!(
            err,
            PlateError::BelowBarWeight {
                weight: 44.0,
                bar: 45.0,
                unit: Unit::Imperial
            }
        );
    }

    #[test]
    fn bench_press_at_bar_weight_needs_no_plates() {
        let calc = decompose(45.0, LiftMode::BenchPress, Unit::Imperial).unwrap();
        assert!(calc.plates.is_empty());
        assert!(calc.weight_per_side.is_sign_positive());
        assert_eq!(format_weight(calc.weight_per_side, Unit::Imperial), "0.0 lbs");
    }

    #[test]
    fn tiny_generic_target_is_positive_zero_per_side() {
        let calc = decompose(0.1, LiftMode::Generic, Unit::Metric).unwrap();
        assert!(calc.plates.is_empty());
        assert!(calc.weight_per_side.is_sign_positive());
        assert_eq!(format_weight(calc.weight_per_side, Unit::Metric), "0.0 kg");
    }

    #[test]
    fn huge_targets_are_rejected_without_looping() {
        for target in [1e10, 1e20, f64::MAX] {
            let err = decompose(target, LiftMode::Generic, Unit::Imperial).unwrap_err();
            assert!(matches!(err, PlateError::TooManyPlates { max: 1_000, .. }));
        }
    }

    #[test]
    fn plate_limit_is_inclusive() {
        // 1000 x 45 lbs per side.
        let calc = decompose(90_000.0, LiftMode::Generic, Unit::Imperial).unwrap();
        assert_eq!(calc.plates.len(), 1_000);
        assert_eq!(calc.weight_per_side, 45_000.0);

        let err = decompose(90_090.0, LiftMode::Generic, Unit::Imperial).unwrap_err();
        assert_eq!(
            err,
            PlateError::TooManyPlates {
                count: 1_001,
                max: 1_000
            }
        );
    }

    #[test]
    fn rejects_non_positive_targets() {
        for target in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = decompose(target, LiftMode::Generic, Unit::Imperial).unwrap_err();
            assert!(matches!(err, PlateError::InvalidWeight(_)));
        }
    }

    #[test]
    fn unreachable_half_is_unrepresentable() {
        let err = decompose(46.0, LiftMode::Generic, Unit::Imperial).unwrap_err();
        match err {
            PlateError::Unrepresentable {
                per_side, leftover, ..
            } => {
                assert_eq!(per_side, 23.0);
                assert!((leftover - 0.5).abs() < 1e-9);
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert!(decompose(2.6, LiftMode::Generic, Unit::Imperial).is_err());
    }

    #[test]
    fn small_leftover_within_tolerance_is_accepted() {
        // 25.05 per side leaves 0.05 after a 25 plate.
        let calc = decompose(50.1, LiftMode::Generic, Unit::Imperial).unwrap();
        assert_eq!(calc.plates, vec![Plate::TwentyFive]);
        assert_eq!(calc.weight_per_side, 25.0);
        assert_eq!(calc.total_weight, 50.1);
    }

    #[test]
    fn metric_uses_kilogram_plates() {
        let calc = decompose(61.2, LiftMode::BenchPress, Unit::Metric).unwrap();
        assert_eq!(calc.plates, vec![Plate::FortyFive]);
        assert!((calc.weight_per_side - 20.4).abs() < 1e-9);
        assert_eq!(calc.bar_weight, 20.4);
        assert_eq!(calc.plate_unit, Unit::Metric);

        let calc = decompose(2.2, LiftMode::Generic, Unit::Metric).unwrap();
        assert_eq!(calc.plates, vec![Plate::TwoAndAHalf]);
    }

    #[test]
    fn summarizes_bench_loadout() {
        let loadout = Loadout::new().with(Plate::FortyFive, 1).with(Plate::Ten, 1);
        let calc = summarize(&loadout, LiftMode::BenchPress, Unit::Imperial).unwrap();
        assert_eq!(calc.weight_per_side, 55.0);
        assert_eq!(calc.total_weight, 155.0);
        assert_eq!(calc.bar_weight, 45.0);
        assert_eq!(calc.plates, vec![Plate::FortyFive, Plate::Ten]);
    }

    #[test]
    fn summarize_converts_totals_but_not_plates() {
        let loadout = Loadout::new().with(Plate::FortyFive, 1).with(Plate::Ten, 1);
        let calc = summarize(&loadout, LiftMode::BenchPress, Unit::Metric).unwrap();
        assert!((calc.weight_per_side - 55.0 * 0.453_592).abs() < 1e-9);
        assert!((calc.total_weight - 155.0 * 0.453_592).abs() < 1e-9);
        assert!((calc.bar_weight - 45.0 * 0.453_592).abs() < 1e-9);
        assert_eq!(calc.plate_unit, Unit::Imperial);
        assert_eq!(calc.plate_weights(), vec![45.0, 10.0]);
    }

    #[test]
    fn summarize_generic_has_no_bar() {
        let loadout = Loadout::new().with(Plate::TwoAndAHalf, 2);
        let calc = summarize(&loadout, LiftMode::Generic, Unit::Imperial).unwrap();
        assert_eq!(calc.weight_per_side, 5.0);
        assert_eq!(calc.total_weight, 10.0);
        assert_eq!(calc.bar_weight, 0.0);
    }

    #[test]
    fn oversized_loadout_is_rejected_before_expanding() {
        let loadout = Loadout::new()
            .with(Plate::FortyFive, u32::MAX)
            .with(Plate::Ten, 1);
        assert_eq!(
            summarize(&loadout, LiftMode::Generic, Unit::Imperial),
            Err(PlateError::TooManyPlates {
                count: u64::from(u32::MAX) + 1,
                max: 1_000
            })
        );

        let loadout = Loadout::new().with(Plate::Five, 1_000);
        let calc = summarize(&loadout, LiftMode::Generic, Unit::Imperial).unwrap();
        assert_eq!(calc.weight_per_side, 5_000.0);
    }

    #[test]
    fn empty_loadout_is_rejected() {
        let loadout = Loadout::new().with(Plate::Ten, 0);
        assert_eq!(
            summarize(&loadout, LiftMode::Generic, Unit::Imperial),
            Err(PlateError::EmptyLoadout)
        );
    }
}
