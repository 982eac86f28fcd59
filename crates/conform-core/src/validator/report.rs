//! Violations, the per-call report, and the aggregate error.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FieldPath;

/// The kind of constraint a violation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Required,
    Type,
    MinLength,
    MaxLength,
    Pattern,
    Minimum,
    ExclusiveMinimum,
    Maximum,
    ExclusiveMaximum,
    MultipleOf,
    Enum,
    Const,
    MinItems,
    MaxItems,
    UniqueItems,
    MinProperties,
    MaxProperties,
    AdditionalProperty,
    FalseSchema,
    AnyOf,
    OneOf,
    Not,
    Format,
    /// Any other keyword; the description is `jsonschema`'s own message.
    Other,
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path of the offending field (e.g. "address.city")
    pub path: String,

    /// Which constraint failed
    pub kind: ConstraintKind,

    /// Description without the path prefix
    pub description: String,
}

impl Violation {
    pub fn new(path: &FieldPath, kind: ConstraintKind, description: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            kind,
            description: description.into(),
        }
    }

    /// The rendered line, `<path>: <description>`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.description)
    }
}

/// All violations produced by one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        tracing::trace!(path = %violation.path, kind = ?violation.kind, "constraint violated");
        self.violations.push(violation);
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Rendered lines, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    /// Rendered lines as a set, for order-independent comparison.
    pub fn message_set(&self) -> BTreeSet<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    /// Turn the report into a call result: `Ok` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { report: self })
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Aggregate error for a failed validation call.
///
/// Displays as the newline-joined messages of every violation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{report}")]
pub struct ValidationError {
    report: ValidationReport,
}

impl ValidationError {
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn violations(&self) -> &[Violation] {
        self.report.violations()
    }

    pub fn into_report(self) -> ValidationReport {
        self.report
    }
}
