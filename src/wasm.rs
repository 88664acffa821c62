// WebAssembly bindings for a browser rendition of the converter form
use crate::catalog::{Category, Unit};
use crate::config::Config;
use crate::convert;
use crate::form::ConverterState;
use js_sys::Array;
use wasm_bindgen::prelude::*;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_category(name: &str) -> Result<Category, JsValue> {
    name.parse::<Category>().map_err(js_err)
}

fn parse_unit(name: &str) -> Result<Unit, JsValue> {
    name.parse::<Unit>().map_err(js_err)
}

/// Convert a value between two units of a category
#[wasm_bindgen]
pub fn convert(category: &str, from: &str, to: &str, value: f64) -> Result<f64, JsValue> {
    convert::convert(
        parse_category(category)?,
        parse_unit(from)?,
        parse_unit(to)?,
        value,
    )
    .map_err(js_err)
}

#[wasm_bindgen]
pub struct ConverterWasm {
    state: ConverterState,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: ConverterState::default(),
        }
    }

    /// Build the form from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            state: ConverterState::from_config(&config),
        })
    }

    /// Category labels in picker order
    #[wasm_bindgen]
    pub fn categories(&self) -> Array {
        Category::all()
            .iter()
            .map(|c| JsValue::from_str(c.label()))
            .collect()
    }

    /// Unit names of a category, in picker order
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<Array, JsValue> {
        let category = parse_category(category)?;
        Ok(category
            .units()
            .iter()
            .map(|u| JsValue::from_str(u.name()))
            .collect())
    }

    #[wasm_bindgen]
    pub fn select_category(&mut self, category: &str) -> Result<(), JsValue> {
        let category = parse_category(category)?;
        self.state.select_category(category);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_source(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.state.set_source(unit).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn set_target(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.state.set_target(unit).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn swap_units(&mut self) {
        self.state.swap_units();
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, raw: &str) {
        self.state.set_input(raw);
    }

    #[wasm_bindgen]
    pub fn result(&self) -> Result<f64, JsValue> {
        self.state.result().map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn formatted_result(&self) -> Result<String, JsValue> {
        self.state.formatted_result().map_err(js_err)
    }

    /// Whole form state as a JSON string
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }
}
