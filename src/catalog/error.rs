use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownCategory(String),
    UnknownUnit(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            CatalogError::UnknownUnit(name) => write!(f, "Unknown unit: {}", name),
        }
    }
}

impl std::error::Error for CatalogError {}
