// Explicit state holder for the single-screen converter form

pub mod error;
pub mod event;
pub mod state;

pub use error::FormError;
pub use event::FormEvent;
pub use state::{format_value, ConverterState, StateSnapshot};
