use std::str::FromStr;

use crate::{loadout::MAX_PLATES_PER_SIDE, plate::Plate};

/// A plate and how many of it sit on one side of the bar, e.g. `45x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateCount {
    pub plate: Plate,
    pub count: u32,
}

impl PlateCount {
    #[must_use]
    pub fn new(plate: Plate, count: u32) -> Self {
        PlateCount { plate, count }
    }
}

impl FromStr for PlateCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (plate, count) = match s.to_lowercase().split_once(['x', '*']) {
            Some((plate, count)) => (
                plate.parse::<Plate>()?,
                count
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| "Invalid plate count".to_string())?,
            ),
            None => (s.parse::<Plate>()?, 1),
        };
        if count > MAX_PLATES_PER_SIDE {
            return Err(format!(
                "At most {MAX_PLATES_PER_SIDE} plates fit on one side."
            ));
        }
        Ok(PlateCount { plate, count })
    }
}
