use crate::catalog::Unit;
use crate::convert::{ConversionTable, ConvertError};
use crate::quantity::detector::QUANTITY_PATTERN;
use crate::quantity::error::QuantityError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    static ref GROUPED_NUMBER: Regex =
        Regex::new(r"^[+-]?\d{1,3}(?:,\d{3})+(?:\.\d*)?(?:[eE][+-]?\d+)?$").unwrap();
}

/// A numeric value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn convert_to(&self, to: Unit, table: &ConversionTable) -> Result<Quantity, ConvertError> {
        let value = table.convert_units(self.unit, to, self.value)?;
        Ok(Quantity::new(value, to))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Parse a user-typed number. Accepts "1,234.5" style grouping; rejects
/// anything that is not a finite number.
pub fn parse_value(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if GROUPED_NUMBER.is_match(trimmed) {
        trimmed.replace(',', "").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };

    parsed.ok().filter(|v| v.is_finite())
}

/// Parse "<number> <unit>" into a [`Quantity`]
pub fn parse_quantity(s: &str) -> Result<Quantity, QuantityError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }
    if parse_value(trimmed).is_some() {
        return Err(QuantityError::MissingUnit(trimmed.to_string()));
    }

    let captures = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| QuantityError::Malformed(trimmed.to_string()))?;

    let raw_value = &captures["value"];
    let value = parse_value(raw_value)
        .ok_or_else(|| QuantityError::InvalidNumber(raw_value.to_string()))?;
    let unit = captures["unit"].parse::<Unit>()?;

    Ok(Quantity::new(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), Some(42.0));
        assert_eq!(parse_value(" -3.5 "), Some(-3.5));
        assert_eq!(parse_value("1,234.5"), Some(1234.5));
        assert_eq!(parse_value("1,234e2"), Some(123400.0));
        assert_eq!(parse_value("1e3"), Some(1000.0));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("12,34"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
    }

    #[test]
    fn test_parse_quantity() {
        let q = parse_quantity("12.5 Meter").unwrap();
        assert_eq!(q, Quantity::new(12.5, Unit::Meter));

        let q = parse_quantity("3 cubic foot").unwrap();
        assert_eq!(q.unit, Unit::CubicFoot);

        let q = parse_quantity("-40°F").unwrap();
        assert_eq!(q, Quantity::new(-40.0, Unit::Fahrenheit));

        let q = parse_quantity("1,234 ft").unwrap();
        assert_eq!(q, Quantity::new(1234.0, Unit::Foot));

        let q = parse_quantity("2e5ft").unwrap();
        assert_eq!(q, Quantity::new(200000.0, Unit::Foot));
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert_eq!(parse_quantity("  "), Err(QuantityError::Empty));
        assert_eq!(
            parse_quantity("2e5"),
            Err(QuantityError::MissingUnit("2e5".to_string()))
        );
        assert_eq!(
            parse_quantity("2e5").unwrap_err().to_string(),
            "Missing unit after '2e5'"
        );
        assert!(matches!(
            parse_quantity("Meter"),
            Err(QuantityError::Malformed(_))
        ));
        assert_eq!(
            parse_quantity("5 furlongs"),
            Err(QuantityError::Catalog(CatalogError::UnknownUnit(
                "furlongs".to_string()
            )))
        );
    }

    #[test]
    fn test_quantity_convert_to() {
        let table = ConversionTable::standard();
        let q = Quantity::new(2.0, Unit::Foot);
        let inches = q.convert_to(Unit::Inch, &table).unwrap();
        assert_eq!(inches, Quantity::new(24.0, Unit::Inch));
        assert_eq!(inches.to_string(), "24 Inch");

        assert!(q.convert_to(Unit::Kelvin, &table).is_err());
    }
}
