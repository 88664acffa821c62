use crate::catalog::error::CatalogError;
use crate::catalog::unit::Unit;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit domain. Conversions only exist between units of the same category.
/// Serialized as the picker label; deserialized with the same rules as `FromStr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Length,
    Weight,
    Volume,
    #[serde(rename = "temp")]
    Temperature,
}

const LENGTH_UNITS: [Unit; 3] = [Unit::Meter, Unit::Foot, Unit::Inch];
const WEIGHT_UNITS: [Unit; 3] = [Unit::Kilogram, Unit::Pound, Unit::Ounce];
const VOLUME_UNITS: [Unit; 3] = [Unit::Liter, Unit::Gallon, Unit::CubicFoot];
const TEMPERATURE_UNITS: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

impl Category {
    /// Categories in picker order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Temperature,
    ];

    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Ordered member units. The first entry is what the form falls back to
    /// whenever the category changes.
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Length => &LENGTH_UNITS,
            Category::Weight => &WEIGHT_UNITS,
            Category::Volume => &VOLUME_UNITS,
            Category::Temperature => &TEMPERATURE_UNITS,
        }
    }

    pub fn first_unit(self) -> Unit {
        self.units()[0]
    }

    pub fn contains(self, unit: Unit) -> bool {
        self.units().contains(&unit)
    }

    /// Short label shown on the category picker
    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Temperature => "temp",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "volume" => Ok(Category::Volume),
            "temp" | "temperature" => Ok(Category::Temperature),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
