use crate::catalog::{CatalogError, Category, Unit};
use crate::config::{precision_in_range, Config, MAX_PRECISION};
use crate::convert::error::ConvertError;
use crate::convert::table::ConversionTable;
use crate::form::format_value;
use crate::quantity::{parse_quantity, parse_value, Quantity, QuantityError};
use serde::Serialize;
use std::fmt;

/// A one-shot conversion as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    /// A bare number when `from` is set, otherwise a quantity such as "12 ft"
    pub value: String,
    pub from: Option<String>,
    pub to: String,
    /// Defaults to the source unit's category
    pub category: Option<String>,
    /// Defaults to the configured precision
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertOutcome {
    pub category: Category,
    pub from: Quantity,
    pub to: Quantity,
    pub formatted: String,
}

impl fmt::Display for ConvertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted, self.to.unit.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    InvalidNumber(String),
    PrecisionOutOfRange(usize),
    Catalog(CatalogError),
    Quantity(QuantityError),
    Convert(ConvertError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            RequestError::PrecisionOutOfRange(p) => {
                write!(f, "Precision must be at most {}, got {}", MAX_PRECISION, p)
            }
            RequestError::Catalog(e) => write!(f, "{}", e),
            RequestError::Quantity(e) => write!(f, "{}", e),
            RequestError::Convert(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Catalog(e) => Some(e),
            RequestError::Quantity(e) => Some(e),
            RequestError::Convert(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for RequestError {
    fn from(e: CatalogError) -> Self {
        RequestError::Catalog(e)
    }
}

impl From<QuantityError> for RequestError {
    fn from(e: QuantityError) -> Self {
        RequestError::Quantity(e)
    }
}

impl From<ConvertError> for RequestError {
    fn from(e: ConvertError) -> Self {
        RequestError::Convert(e)
    }
}

impl ConvertRequest {
    pub fn execute(&self, config: &Config) -> Result<ConvertOutcome, RequestError> {
        let precision = self.precision.unwrap_or(config.display.precision);
        if !precision_in_range(precision) {
            return Err(RequestError::PrecisionOutOfRange(precision));
        }

        let source = match &self.from {
            Some(unit) => {
                let amount = parse_value(&self.value)
                    .ok_or_else(|| RequestError::InvalidNumber(self.value.clone()))?;
                Quantity::new(amount, unit.parse::<Unit>()?)
            }
            None => parse_quantity(&self.value)?,
        };
        let target: Unit = self.to.parse()?;
        let category = match &self.category {
            Some(name) => name.parse::<Category>()?,
            None => source.unit.category(),
        };

        let table = ConversionTable::new(config.conversion.fallback);
        let result = table.convert(category, source.unit, target, source.value)?;

        Ok(ConvertOutcome {
            category,
            from: source,
            to: Quantity::new(result, target),
            formatted: format_value(result, precision),
        })
    }
}
