use crate::catalog::category::Category;
use crate::catalog::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    Meter,
    Foot,
    Inch,
    Kilogram,
    Pound,
    Ounce,
    Liter,
    Gallon,
    #[serde(rename = "Cubic Foot")]
    CubicFoot,
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 12] = [
        Unit::Meter,
        Unit::Foot,
        Unit::Inch,
        Unit::Kilogram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Liter,
        Unit::Gallon,
        Unit::CubicFoot,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    pub fn category(self) -> Category {
        match self {
            Unit::Meter | Unit::Foot | Unit::Inch => Category::Length,
            Unit::Kilogram | Unit::Pound | Unit::Ounce => Category::Weight,
            Unit::Liter | Unit::Gallon | Unit::CubicFoot => Category::Volume,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
        }
    }

    /// Display name, as listed in the unit pickers
    pub fn name(self) -> &'static str {
        match self {
            Unit::Meter => "Meter",
            Unit::Foot => "Foot",
            Unit::Inch => "Inch",
            Unit::Kilogram => "Kilogram",
            Unit::Pound => "Pound",
            Unit::Ounce => "Ounce",
            Unit::Liter => "Liter",
            Unit::Gallon => "Gallon",
            Unit::CubicFoot => "Cubic Foot",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Foot => "ft",
            Unit::Inch => "in",
            Unit::Kilogram => "kg",
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
            Unit::Liter => "L",
            Unit::Gallon => "gal",
            Unit::CubicFoot => "ft³",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = CatalogError;

    /// Accepts display names (with or without the space), symbols and common
    /// plural/ASCII spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        let unit = match key.as_str() {
            "meter" | "meters" | "metre" | "metres" | "m" => Unit::Meter,
            "foot" | "feet" | "ft" => Unit::Foot,
            "inch" | "inches" | "in" => Unit::Inch,
            "kilogram" | "kilograms" | "kg" => Unit::Kilogram,
            "pound" | "pounds" | "lb" | "lbs" => Unit::Pound,
            "ounce" | "ounces" | "oz" => Unit::Ounce,
            "liter" | "liters" | "litre" | "litres" | "l" => Unit::Liter,
            "gallon" | "gallons" | "gal" => Unit::Gallon,
            "cubicfoot" | "cubicfeet" | "cuft" | "ft3" | "ft³" => Unit::CubicFoot,
            "celsius" | "c" | "°c" | "degc" => Unit::Celsius,
            "fahrenheit" | "f" | "°f" | "degf" => Unit::Fahrenheit,
            "kelvin" | "k" => Unit::Kelvin,
            _ => return Err(CatalogError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>().unwrap(), unit);
            assert_eq!(unit.symbol().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("feet".parse::<Unit>().unwrap(), Unit::Foot);
        assert_eq!("cu ft".parse::<Unit>().unwrap(), Unit::CubicFoot);
        assert_eq!("CubicFoot".parse::<Unit>().unwrap(), Unit::CubicFoot);
        assert_eq!("cubic-foot".parse::<Unit>().unwrap(), Unit::CubicFoot);
        assert_eq!("degC".parse::<Unit>().unwrap(), Unit::Celsius);
        assert_eq!("LBS".parse::<Unit>().unwrap(), Unit::Pound);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "parsec".parse::<Unit>().unwrap_err();
        assert_eq!(err, CatalogError::UnknownUnit("parsec".to_string()));
        assert_eq!(err.to_string(), "Unknown unit: parsec");
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Unit::CubicFoot).unwrap();
        assert_eq!(json, "\"Cubic Foot\"");
        let unit: Unit = serde_json::from_str("\"Kelvin\"").unwrap();
        assert_eq!(unit, Unit::Kelvin);
        let unit: Unit = serde_json::from_str("\"cu ft\"").unwrap();
        assert_eq!(unit, Unit::CubicFoot);
    }
}
