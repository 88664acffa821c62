pub mod catalog;
pub mod config;
pub mod convert;
pub mod form;
pub mod quantity;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use catalog::{Category, Unit};
pub use convert::{convert, ConversionTable, ConvertError, FallbackPolicy};
pub use form::ConverterState;
