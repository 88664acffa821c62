use crate::catalog::CatalogError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    Empty,
    MissingUnit(String),
    InvalidNumber(String),
    Malformed(String),
    Catalog(CatalogError),
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::Empty => write!(f, "Quantity cannot be empty"),
            QuantityError::MissingUnit(s) => write!(f, "Missing unit after '{}'", s),
            QuantityError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            QuantityError::Malformed(s) => {
                write!(f, "Expected '<number> <unit>', got '{}'", s)
            }
            QuantityError::Catalog(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for QuantityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantityError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for QuantityError {
    fn from(e: CatalogError) -> Self {
        QuantityError::Catalog(e)
    }
}
