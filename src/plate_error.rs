use thiserror::Error;

use crate::unit::Unit;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlateError {
    #[error("Please enter a valid weight greater than 0 (got {0}).")]
    InvalidWeight(f64),
    #[error("Weight must be at least {bar:.1} {unit} for bench press (bar weight).")]
    BelowBarWeight { weight: f64, bar: f64, unit: Unit },
    #[error(
        "Unable to achieve this weight with standard plates: {per_side:.1} {unit} per side leaves {leftover:.1} {unit} unloaded."
    )]
    Unrepresentable {
        per_side: f64,
        leftover: f64,
        unit: Unit,
    },
    #[error("{count} plates per side is more than the {max} a bar can hold.")]
    TooManyPlates { count: u64, max: u32 },
    #[error("Please enter at least one plate.")]
    EmptyLoadout,
}

impl PlateError {
    /// True for both flavours of invalid target weight.
    #[must_use]
    pub fn is_invalid_weight(&self) -> bool {
        matches!(
            self,
            PlateError::InvalidWeight(_) | PlateError::BelowBarWeight { .. }
        )
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
