use crate::catalog::{CatalogError, Category, Unit};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    UnitNotInCategory { unit: Unit, category: Category },
    Catalog(CatalogError),
    UnknownCommand(String),
    MissingArgument(&'static str),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnitNotInCategory { unit, category } => write!(
                f,
                "Unit '{}' is not available for {} (choose one of: {})",
                unit,
                category,
                category
                    .units()
                    .iter()
                    .map(|u| u.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            FormError::Catalog(e) => write!(f, "{}", e),
            FormError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
            FormError::MissingArgument(what) => write!(f, "Missing argument: {}", what),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for FormError {
    fn from(e: CatalogError) -> Self {
        FormError::Catalog(e)
    }
}
