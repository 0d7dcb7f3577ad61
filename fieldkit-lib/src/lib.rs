//! Declarative field validation
//!
//! Maps attribute definitions ("fields") onto raw input and datastore model
//! records, producing human-readable error messages and normalized values.
//!
//! # Example
//!
//! ```
//! use fieldkit_lib::{Schema, Validator, Value};
//! use fieldkit_lib::field::{Field, IntegerField};
//!
//! let schema = Schema::builder()
//!     .field("name", Field::string().required())
//!     .field("age", Field::new(IntegerField::new().lower(0)))
//!     .build()
//!     .unwrap()
//!     .into_shared();
//!
//! let validator = Validator::new(&schema, [("name", ""), ("age", "-1")]).unwrap();
//! let errors = validator.validate();
//! assert_eq!(errors.get("name"), Some("name is required"));
//! assert_eq!(errors.get("age"), Some("age must be greater than 0"));
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod model;

mod schema;
mod validator;
mod value;

pub use error::Error;
pub use schema::*;
pub use validator::*;
pub use value::*;
