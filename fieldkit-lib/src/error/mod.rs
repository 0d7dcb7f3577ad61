//! Error types

mod config;
mod fieldkit;
mod property;
mod transform;
mod validation;

pub use config::*;
pub use fieldkit::*;
pub use property::*;
pub use transform::*;
pub use validation::*;
