//! # conform-core
//!
//! Compile-once, validate-many JSON Schema object validation.
//!
//! Schema text is compiled once, through `jsonschema`, into an immutable
//! [`Validator`]. Each call to [`Validator::validate`] checks every constraint
//! against the candidate object and reports all failures at once:
//! - one line per violated constraint, `<field path>: <message>`
//! - lines in schema declaration order
//! - no error at all when the object conforms
//!
//! ## Key Guarantees
//!
//! 1. **Aggregated**: Validation never stops at the first failure
//! 2. **Pure**: Validating never mutates the object or the validator
//! 3. **Deterministic**: Same schema and object always yield the same report
//! 4. **Thread-safe**: A `Validator` is `Send + Sync` and holds no per-call state
//!
//! ## Example
//!
//! ```rust
//! use conform_core::compile;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     email: String,
//!     age: u32,
//! }
//!
//! let validator = compile(r#"{
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string", "minLength": 10 },
//!         "email": { "type": "string", "maxLength": 10 }
//!     }
//! }"#)?;
//!
//! let person = Person {
//!     name: "lessName".into(),
//!     email: "too long name greater than 10".into(),
//!     age: 12,
//! };
//!
//! let err = validator.validate(&person).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "name: String length must be greater than or equal to 10\n\
//!      email: String length must be less than or equal to 10"
//! );
//! # Ok::<(), conform_core::SchemaError>(())
//! ```

pub mod compiler;
pub mod config;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use compiler::{
    compile, compile_value, compile_with, compile_yaml, compile_yaml_with, Schema, SchemaError,
};
pub use config::{CompileOptions, FieldOrder, SchemaDraft};
pub use types::{FieldPath, JsonType};
pub use validator::{
    ConstraintKind, Inspect, ValidationError, ValidationReport, Validator, Violation,
};

use thiserror::Error;

/// Errors surfaced by compiling or validating.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Displays as the bare newline-joined violation messages.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to project object into a JSON value: {0}")]
    Projection(#[from] serde_json::Error),
}

impl Error {
    /// The aggregate validation error, if that is what this is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
