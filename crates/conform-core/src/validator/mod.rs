//! Object validation against a compiled schema.
//!
//! A [`Validator`] runs the compiled `jsonschema` validator against a
//! candidate value, translating every error into a [`Violation`] of a fresh
//! [`ValidationReport`]. Nothing is shared between calls, so one validator
//! can serve many threads.

mod inspect;
mod messages;
mod report;

pub use inspect::Inspect;
pub use report::{ConstraintKind, ValidationError, ValidationReport, Violation};

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::compiler::Schema;
use crate::types::FieldPath;
use crate::Result;

/// A compiled, immutable validator.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
    compiled: Arc<jsonschema::Validator>,
}

impl Validator {
    pub(crate) fn new(schema: Schema, compiled: jsonschema::Validator) -> Self {
        Self {
            schema,
            compiled: Arc::new(compiled),
        }
    }

    /// The compiled schema this validator applies.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate any serializable object.
    ///
    /// Field names are the object's serialized names, so `#[serde(rename)]`
    /// controls how fields line up with schema properties.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Every constraint holds
    /// * `Err(Error::Validation)` - One line per violated constraint
    /// * `Err(Error::Projection)` - The object could not be serialized
    pub fn validate<T: Serialize + ?Sized>(&self, object: &T) -> Result<()> {
        let value = serde_json::to_value(object)?;
        self.validate_value(&value)?;
        Ok(())
    }

    /// Validate an already-projected JSON value.
    pub fn validate_value(&self, value: &Value) -> std::result::Result<(), ValidationError> {
        self.report_value(value).into_result()
    }

    /// Validate an object through its explicit field accessors.
    pub fn validate_fields<I: Inspect + ?Sized>(
        &self,
        object: &I,
    ) -> std::result::Result<(), ValidationError> {
        self.validate_value(&object.project())
    }

    /// Collect the violations for a serializable object without turning
    /// them into an error.
    pub fn report<T: Serialize + ?Sized>(&self, object: &T) -> Result<ValidationReport> {
        let value = serde_json::to_value(object)?;
        Ok(self.report_value(&value))
    }

    /// Collect the violations for a JSON value.
    ///
    /// Violations are ordered by the position of their field in the schema
    /// (or alphabetically, when compiled that way). Violations on the same
    /// field keep the order `jsonschema` reports them in.
    pub fn report_value(&self, value: &Value) -> ValidationReport {
        let mut keyed: Vec<(Vec<(usize, String)>, Violation)> = Vec::new();
        for error in self.compiled.iter_errors(value) {
            let key = self
                .schema
                .order_key(&FieldPath::from_pointer(error.instance_path.as_str()));
            for violation in messages::violations(&error, &self.schema) {
                keyed.push((key.clone(), violation));
            }
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        let mut report = ValidationReport::new();
        for (_, violation) in keyed {
            report.push(violation);
        }
        tracing::debug!(violations = report.len(), "validated object");
        report
    }

    /// Whether the object satisfies every constraint. Objects that cannot be
    /// serialized are not valid.
    pub fn is_valid<T: Serialize + ?Sized>(&self, object: &T) -> bool {
        match serde_json::to_value(object) {
            Ok(value) => self.compiled.is_valid(&value),
            Err(_) => false,
        }
    }
}
