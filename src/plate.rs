use std::{fmt::Display, str::FromStr};

use crate::unit::Unit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plate {
    FortyFive,
    ThirtyFive,
    TwentyFive,
    Ten,
    Five,
    TwoAndAHalf,
}

impl Plate {
    /// Every denomination, heaviest first.
    pub const ALL: [Plate; 6] = [
        Plate::FortyFive,
        Plate::ThirtyFive,
        Plate::TwentyFive,
        Plate::Ten,
        Plate::Five,
        Plate::TwoAndAHalf,
    ];

    const LBS: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

    // Rounded gym equivalents, not exact conversions of `LBS`.
    const KG: [f64; 6] = [20.4, 15.9, 11.3, 4.5, 2.3, 1.1];

    #[must_use]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub fn at(index: usize) -> Option<Plate> {
        Plate::ALL.get(index).copied()
    }

    #[must_use]
    pub fn weight(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Imperial => Self::LBS[self.index()],
            Unit::Metric => Self::KG[self.index()],
        }
    }

    #[must_use]
    pub fn label(&self, unit: Unit) -> String {
        format!("{} {unit}", self.weight(unit))
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Unit::Imperial))
    }
}

impl FromStr for Plate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weight = s
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid plate weight".to_string())?;

        Plate::ALL
            .into_iter()
            .find(|plate| (plate.weight(Unit::Imperial) - weight).abs() < f64::EPSILON)
            .ok_or_else(|| format!("No {weight} lbs plate."))
    }
}
