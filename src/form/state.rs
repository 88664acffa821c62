use crate::catalog::{Category, Unit};
use crate::config::{precision_in_range, Config, MAX_PRECISION};
use crate::convert::{ConversionTable, ConvertError};
use crate::form::error::FormError;
use crate::form::event::FormEvent;
use crate::quantity::parse_value;
use serde::Serialize;

/// Selected category, source/target units and raw input of the converter form.
///
/// Source and target are always members of the selected category: changing
/// the category resets both to its first unit, and the setters reject units
/// from other categories.
#[derive(Debug, Clone)]
pub struct ConverterState {
    category: Category,
    source: Unit,
    target: Unit,
    input: String,
    value: Option<f64>,
    precision: usize,
    table: ConversionTable,
}

/// Serializable view of the form, including the computed result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub category: Category,
    pub units: Vec<Unit>,
    pub source: Unit,
    pub target: Unit,
    pub input: String,
    pub value: f64,
    pub result: Option<f64>,
    pub formatted: Option<String>,
    pub error: Option<String>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

impl ConverterState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            source: category.first_unit(),
            target: category.first_unit(),
            input: String::new(),
            value: None,
            precision: 2,
            table: ConversionTable::standard(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.defaults.category)
            .with_precision(config.display.precision)
            .with_table(ConversionTable::new(config.conversion.fallback))
    }

    /// Precision above `MAX_PRECISION` is clamped
    pub fn with_precision(mut self, precision: usize) -> Self {
        if !precision_in_range(precision) {
            log::warn!(
                "Precision {} is out of range, using {}",
                precision,
                MAX_PRECISION
            );
        }
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn with_table(mut self, table: ConversionTable) -> Self {
        self.table = table;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn source(&self) -> Unit {
        self.source
    }

    pub fn target(&self) -> Unit {
        self.target
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Picker contents for the current category
    pub fn available_units(&self) -> &'static [Unit] {
        self.category.units()
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.source = category.first_unit();
        self.target = category.first_unit();
        log::debug!(
            "Category set to {}, units reset to {}",
            category,
            self.source
        );
    }

    pub fn set_source(&mut self, unit: Unit) -> Result<(), FormError> {
        self.check_member(unit)?;
        self.source = unit;
        Ok(())
    }

    pub fn set_target(&mut self, unit: Unit) -> Result<(), FormError> {
        self.check_member(unit)?;
        self.target = unit;
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Store the raw text. Text that is not a number counts as 0.
    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_string();
        self.value = parse_value(raw);
        if self.value.is_none() && !raw.trim().is_empty() {
            log::debug!("Input '{}' is not a number, using 0", raw);
        }
    }

    pub fn set_value(&mut self, value: f64) {
        self.input = value.to_string();
        self.value = Some(value);
    }

    /// Parsed input, 0.0 when empty or invalid
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Recomputed from the table on every call
    pub fn result(&self) -> Result<f64, ConvertError> {
        self.table
            .convert(self.category, self.source, self.target, self.value())
    }

    pub fn formatted_result(&self) -> Result<String, ConvertError> {
        self.result()
            .map(|value| format_value(value, self.precision))
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::SelectCategory(category) => self.select_category(category),
            FormEvent::SetSource(unit) => self.set_source(unit)?,
            FormEvent::SetTarget(unit) => self.set_target(unit)?,
            FormEvent::SetInput(raw) => self.set_input(&raw),
            FormEvent::Swap => self.swap_units(),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let result = self.result();
        StateSnapshot {
            category: self.category,
            units: self.available_units().to_vec(),
            source: self.source,
            target: self.target,
            input: self.input.clone(),
            value: self.value(),
            result: result.as_ref().ok().copied(),
            formatted: result
                .as_ref()
                .ok()
                .map(|v| format_value(*v, self.precision)),
            error: result.err().map(|e| e.to_string()),
        }
    }

    fn check_member(&self, unit: Unit) -> Result<(), FormError> {
        if self.category.contains(unit) {
            Ok(())
        } else {
            Err(FormError::UnitNotInCategory {
                unit,
                category: self.category,
            })
        }
    }
}

/// Fixed-point rendering used for results. Precision is capped at `MAX_PRECISION`.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision.min(MAX_PRECISION), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::FallbackPolicy;

    #[test]
    fn test_new_state_uses_first_unit() {
        let state = ConverterState::default();
        assert_eq!(state.category(), Category::Length);
        assert_eq!(state.source(), Unit::Meter);
        assert_eq!(state.target(), Unit::Meter);
        assert_eq!(state.available_units(), Category::Length.units());
    }

    #[test]
    fn test_select_category_resets_units() {
        let mut state = ConverterState::default();
        state.set_source(Unit::Foot).unwrap();
        state.set_target(Unit::Inch).unwrap();

        state.select_category(Category::Volume);
        assert_eq!(state.source(), Unit::Liter);
        assert_eq!(state.target(), Unit::Liter);

        state.select_category(Category::Temperature);
        assert_eq!(state.source(), Unit::Celsius);
        assert_eq!(state.target(), Unit::Celsius);
    }

    #[test]
    fn test_setters_reject_foreign_units() {
        let mut state = ConverterState::new(Category::Weight);
        let err = state.set_source(Unit::Meter).unwrap_err();
        assert_eq!(
            err,
            FormError::UnitNotInCategory {
                unit: Unit::Meter,
                category: Category::Weight,
            }
        );
        assert_eq!(
            err.to_string(),
            "Unit 'Meter' is not available for weight (choose one of: Kilogram, Pound, Ounce)"
        );
        assert_eq!(state.source(), Unit::Kilogram);
        assert!(state.set_target(Unit::Kelvin).is_err());
    }

    #[test]
    fn test_result_tracks_every_change() {
        let mut state = ConverterState::default();
        state.set_input("10");
        assert_eq!(state.result().unwrap(), 10.0);

        state.set_target(Unit::Foot).unwrap();
        assert_eq!(state.result().unwrap(), 10.0 * 3.281);
        assert_eq!(state.formatted_result().unwrap(), "32.81");

        state.set_input("2");
        assert_eq!(state.formatted_result().unwrap(), "6.56");

        state.swap_units();
        assert_eq!(state.source(), Unit::Foot);
        assert_eq!(state.target(), Unit::Meter);
        assert_eq!(state.formatted_result().unwrap(), "0.61");
    }

    #[test]
    fn test_invalid_input_is_zero() {
        let mut state = ConverterState::new(Category::Temperature);
        state.set_target(Unit::Fahrenheit).unwrap();

        state.set_input("");
        assert!(!state.has_value());
        assert_eq!(state.value(), 0.0);
        assert_eq!(state.result().unwrap(), 32.0);

        state.set_input("twelve");
        assert_eq!(state.input(), "twelve");
        assert_eq!(state.value(), 0.0);
        assert_eq!(state.formatted_result().unwrap(), "32.00");
    }

    #[test]
    fn test_apply_events() {
        let mut state = ConverterState::default();
        state
            .apply(FormEvent::SelectCategory(Category::Weight))
            .unwrap();
        state.apply(FormEvent::SetSource(Unit::Pound)).unwrap();
        state.apply(FormEvent::SetTarget(Unit::Ounce)).unwrap();
        state.apply(FormEvent::SetInput("3".to_string())).unwrap();
        assert_eq!(state.result().unwrap(), 48.0);

        assert!(state.apply(FormEvent::SetTarget(Unit::Liter)).is_err());
        assert_eq!(state.target(), Unit::Ounce);
    }

    #[test]
    fn test_from_config() {
        let config = Config::load_from_str(
            "[defaults]\ncategory = \"volume\"\n[display]\nprecision = 3\n",
        )
        .unwrap();
        let mut state = ConverterState::from_config(&config);
        assert_eq!(state.category(), Category::Volume);
        assert_eq!(state.precision(), 3);

        state.set_target(Unit::Gallon).unwrap();
        state.set_value(1.0);
        assert_eq!(state.formatted_result().unwrap(), "0.264");
    }

    #[test]
    fn test_snapshot() {
        let mut state = ConverterState::default().with_table(ConversionTable::new(
            FallbackPolicy::Error,
        ));
        state.set_target(Unit::Inch).unwrap();
        state.set_input("1");

        let snapshot = state.snapshot();
        assert_eq!(snapshot.units, vec![Unit::Meter, Unit::Foot, Unit::Inch]);
        assert_eq!(snapshot.result, Some(39.37));
        assert_eq!(snapshot.formatted.as_deref(), Some("39.37"));
        assert!(snapshot.error.is_none());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["category"], "length");
        assert_eq!(json["target"], "Inch");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_value(2.4, 0), "2");
        assert_eq!(format_value(-40.0, 1), "-40.0");
    }

    #[test]
    fn test_precision_is_capped() {
        assert_eq!(format_value(1.0, 70_000), format_value(1.0, MAX_PRECISION));
        assert_eq!(format_value(1.0, 70_000), "1.000000000000000");

        let mut state = ConverterState::default().with_precision(70_000);
        assert_eq!(state.precision(), MAX_PRECISION);
        state.set_input("1");
        assert_eq!(state.formatted_result().unwrap(), "1.000000000000000");
    }
}
