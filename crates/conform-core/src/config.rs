//! Compile-time configuration.

use serde::{Deserialize, Serialize};

/// Order in which violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrder {
    /// By the position of the offending field in the schema document.
    #[default]
    Declaration,
    /// By field name at every level.
    Alphabetical,
}

/// JSON Schema draft used to interpret a document without `$schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaDraft {
    Draft4,
    Draft6,
    Draft7,
    Draft201909,
    Draft202012,
}

impl SchemaDraft {
    pub(crate) fn to_jsonschema(self) -> jsonschema::Draft {
        match self {
            SchemaDraft::Draft4 => jsonschema::Draft::Draft4,
            SchemaDraft::Draft6 => jsonschema::Draft::Draft6,
            SchemaDraft::Draft7 => jsonschema::Draft::Draft7,
            SchemaDraft::Draft201909 => jsonschema::Draft::Draft201909,
            SchemaDraft::Draft202012 => jsonschema::Draft::Draft202012,
        }
    }
}

/// Options controlling how schema text is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Report order for violations
    pub field_order: FieldOrder,

    /// Enforce `format` (email, date-time, ...) instead of treating it as
    /// an annotation.
    pub validate_formats: bool,

    /// Force a draft; `None` follows `$schema`, falling back to 2020-12.
    pub draft: Option<SchemaDraft>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            field_order: FieldOrder::Declaration,
            validate_formats: true,
            draft: None,
        }
    }
}

impl CompileOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the violation report order.
    pub fn field_order(mut self, order: FieldOrder) -> Self {
        self.field_order = order;
        self
    }

    /// Set whether `format` is enforced.
    pub fn validate_formats(mut self, validate: bool) -> Self {
        self.validate_formats = validate;
        self
    }

    /// Force a specific draft.
    pub fn draft(mut self, draft: SchemaDraft) -> Self {
        self.draft = Some(draft);
        self
    }
}
