use crate::catalog::{Category, Unit};
use crate::convert::error::ConvertError;
use crate::convert::rule::{Rule, Transform};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every explicit conversion rule, grouped by category in picker order.
/// Factors are the rounded published constants, so a round trip through two
/// rules does not return the original value.
static RULES: [Rule; 24] = [
    // Length
    Rule::new(Unit::Meter, Unit::Foot, Transform::scale(3.281)),
    Rule::new(Unit::Meter, Unit::Inch, Transform::scale(39.370)),
    Rule::new(Unit::Foot, Unit::Meter, Transform::scale(0.304)),
    Rule::new(Unit::Foot, Unit::Inch, Transform::scale(12.0)),
    Rule::new(Unit::Inch, Unit::Foot, Transform::scale(0.083)),
    Rule::new(Unit::Inch, Unit::Meter, Transform::scale(0.025)),
    // Weight
    Rule::new(Unit::Kilogram, Unit::Pound, Transform::scale(2.205)),
    Rule::new(Unit::Kilogram, Unit::Ounce, Transform::scale(35.274)),
    Rule::new(Unit::Pound, Unit::Kilogram, Transform::scale(0.453)),
    Rule::new(Unit::Pound, Unit::Ounce, Transform::scale(16.0)),
    Rule::new(Unit::Ounce, Unit::Kilogram, Transform::scale(0.028)),
    Rule::new(Unit::Ounce, Unit::Pound, Transform::scale(0.062)),
    // Volume
    Rule::new(Unit::Liter, Unit::Gallon, Transform::scale(0.264)),
    Rule::new(Unit::Liter, Unit::CubicFoot, Transform::scale(0.035)),
    Rule::new(Unit::Gallon, Unit::Liter, Transform::scale(3.785)),
    Rule::new(Unit::Gallon, Unit::CubicFoot, Transform::scale(0.133)),
    Rule::new(Unit::CubicFoot, Unit::Liter, Transform::scale(28.316)),
    Rule::new(Unit::CubicFoot, Unit::Gallon, Transform::scale(7.480)),
    // Temperature
    Rule::new(
        Unit::Celsius,
        Unit::Fahrenheit,
        Transform::affine(0.0, 9.0, 5.0, 32.0),
    ),
    Rule::new(
        Unit::Celsius,
        Unit::Kelvin,
        Transform::affine(0.0, 1.0, 1.0, 273.15),
    ),
    Rule::new(
        Unit::Fahrenheit,
        Unit::Celsius,
        Transform::affine(-32.0, 5.0, 9.0, 0.0),
    ),
    Rule::new(
        Unit::Fahrenheit,
        Unit::Kelvin,
        Transform::affine(-32.0, 5.0, 9.0, 273.15),
    ),
    Rule::new(
        Unit::Kelvin,
        Unit::Celsius,
        Transform::affine(-273.15, 1.0, 1.0, 0.0),
    ),
    Rule::new(
        Unit::Kelvin,
        Unit::Fahrenheit,
        Transform::affine(-273.15, 9.0, 5.0, 32.0),
    ),
];

lazy_static! {
    static ref RULE_INDEX: HashMap<(Unit, Unit), &'static Rule> =
        RULES.iter().map(|rule| ((rule.from, rule.to), rule)).collect();
}

/// What to do with a pair that has no rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Report the pair as unsupported
    #[default]
    Error,
    /// Return the input unchanged
    Passthrough,
}

/// Read-only view over the static rule set plus the policy for missing pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionTable {
    fallback: FallbackPolicy,
}

impl ConversionTable {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self { fallback }
    }

    /// The built-in table with the default (strict) fallback policy
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    pub fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &'static Rule> {
        RULES
            .iter()
            .filter(move |rule| rule.from.category() == category)
    }

    pub fn lookup(&self, from: Unit, to: Unit) -> Option<&'static Rule> {
        RULE_INDEX.get(&(from, to)).copied()
    }

    /// Convert between two units without a category context
    pub fn convert_units(&self, from: Unit, to: Unit, value: f64) -> Result<f64, ConvertError> {
        if from == to {
            return Ok(value);
        }

        if let Some(rule) = self.lookup(from, to) {
            return Ok(rule.apply(value));
        }

        match self.fallback {
            FallbackPolicy::Error => Err(ConvertError::UnsupportedPair { from, to }),
            FallbackPolicy::Passthrough => {
                log::warn!(
                    "No conversion rule for {} -> {}, passing value through unchanged",
                    from,
                    to
                );
                Ok(value)
            }
        }
    }

    /// Convert `value` from `from` to `to`, both of which must belong to `category`
    pub fn convert(
        &self,
        category: Category,
        from: Unit,
        to: Unit,
        value: f64,
    ) -> Result<f64, ConvertError> {
        for unit in [from, to] {
            if !category.contains(unit) {
                match self.fallback {
                    FallbackPolicy::Error => {
                        return Err(ConvertError::UnitNotInCategory { unit, category })
                    }
                    FallbackPolicy::Passthrough => log::warn!(
                        "Unit {} is not part of category {}, converting anyway",
                        unit,
                        category
                    ),
                }
            }
        }

        self.convert_units(from, to, value)
    }
}

/// Convert with the standard table
pub fn convert(category: Category, from: Unit, to: Unit, value: f64) -> Result<f64, ConvertError> {
    ConversionTable::standard().convert(category, from, to, value)
}
