use crate::calculation::Calculation;
use crate::lift_mode::LiftMode;
use crate::loadout::Loadout;
use crate::plate::Plate;
use crate::plate_error::PlateError;
use crate::resolver::{decompose, summarize};
use crate::unit::{Unit, format_weight, to_imperial, to_metric};

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Unit;
        type LiftMode;
        type Plate;
        type Loadout;
        type Calculation;
        type PlateError;

        fn decompose(target: f64, mode: LiftMode, unit: Unit) -> Result<Calculation, PlateError>;
        fn summarize(loadout: &Loadout, mode: LiftMode, unit: Unit) -> Result<Calculation, PlateError>;
        fn to_metric(weight_lbs: f64) -> f64;
        fn to_imperial(weight_kg: f64) -> f64;
        fn format_weight(weight: f64, unit: Unit) -> String;

        #[swift_bridge(associated_to = Unit)]
        fn imperial() -> Unit;
        #[swift_bridge(associated_to = Unit)]
        fn metric() -> Unit;
        fn switch_input(self: &Unit, value: f64) -> f64;

        #[swift_bridge(associated_to = LiftMode)]
        fn generic() -> LiftMode;
        #[swift_bridge(associated_to = LiftMode)]
        fn bench_press() -> LiftMode;

        #[swift_bridge(associated_to = Plate)]
        fn at(index: usize) -> Option<Plate>;
        fn label(self: &Plate, unit: Unit) -> String;

        #[swift_bridge(init)]
        fn new() -> Loadout;
        fn set(self: &mut Loadout, plate: Plate, count: u32);
        fn count(self: &Loadout, plate: Plate) -> u32;

        fn plate_weights(self: &Calculation) -> Vec<f64>;
        fn plate_summary(self: &Calculation) -> String;
        fn weight_per_side(self: &Calculation) -> f64;
        fn total_weight(self: &Calculation) -> f64;
        fn bar_weight(self: &Calculation) -> f64;
        fn is_bench_press(self: &Calculation) -> bool;

        fn message(self: &PlateError) -> String;
        fn is_invalid_weight(self: &PlateError) -> bool;
    }
}
