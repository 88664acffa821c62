// Free-text quantities such as "12.5 Meter" or "-40 °F"

pub mod detector;
pub mod error;
pub mod parser;

pub use detector::looks_like_quantity;
pub use error::QuantityError;
pub use parser::{parse_quantity, parse_value, Quantity};
