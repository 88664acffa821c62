// Static catalog of unit categories and their member units

pub mod category;
pub mod error;
pub mod unit;

pub use category::Category;
pub use error::CatalogError;
pub use unit::Unit;
