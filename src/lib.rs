#![warn(clippy::pedantic)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::ptr_as_ptr)]

pub mod bridge;
pub mod calculation;
pub mod lift_mode;
pub mod loadout;
pub mod plate;
pub mod plate_count;
pub mod plate_error;
pub mod resolver;
pub mod unit;

pub use calculation::Calculation;
pub use lift_mode::LiftMode;
pub use loadout::Loadout;
pub use plate::Plate;
pub use plate_error::PlateError;
pub use resolver::{decompose, summarize};
pub use unit::{Direction, Unit, convert, format_weight};
