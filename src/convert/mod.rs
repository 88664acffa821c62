// Fixed conversion table between units of the same category

pub mod error;
pub mod request;
pub mod rule;
pub mod table;


pub use error::ConvertError;
pub use request::{ConvertOutcome, ConvertRequest, RequestError};
pub use rule::{Rule, Transform};
pub use table::{convert, ConversionTable, FallbackPolicy};
