#![deny(missing_docs)]
#![doc = "Core error types and the dynamic value model shared by the affirm crates."]

pub mod errors;
pub mod value;

pub use errors::{AffirmError, ErrorInfo};
pub use value::{Instance, Value};
