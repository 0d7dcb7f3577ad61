//! Model-derived validation
//!
//! Derives field schemas from datastore model metadata and writes validated
//! values back onto model instances.

mod metadata;
mod record;
mod registry;
mod schema;
mod validator;

pub use metadata::*;
pub use record::*;
pub use registry::*;
pub use schema::*;
pub use validator::*;
