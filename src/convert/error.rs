use crate::catalog::{Category, Unit};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A unit was used with a category it does not belong to
    UnitNotInCategory { unit: Unit, category: Category },
    /// No rule exists for the pair and the fallback policy refuses to guess
    UnsupportedPair { from: Unit, to: Unit },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnitNotInCategory { unit, category } => {
                write!(f, "Unit '{}' is not a {} unit", unit, category)
            }
            ConvertError::UnsupportedPair { from, to } => write!(
                f,
                "Cannot convert {} ({}) to {} ({})",
                from,
                from.category(),
                to,
                to.category()
            ),
        }
    }
}

impl std::error::Error for ConvertError {}
