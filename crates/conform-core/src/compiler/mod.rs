//! Schema compilation.
//!
//! Schema text is parsed into a JSON document and handed to `jsonschema`,
//! which checks it against its draft's meta-schema and builds the keyword
//! validators once. The declared field layout is recorded next to it so
//! reports can be ordered by field.

mod schema;

pub use schema::Schema;

use serde_json::Value;
use thiserror::Error;

use crate::config::CompileOptions;
use crate::validator::Validator;

/// Errors raised while compiling schema text.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to parse schema JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to parse schema YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Rejected by `jsonschema`: a meta-schema violation, an invalid regex,
    /// or a reference it cannot resolve.
    #[error("Invalid schema at {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Compile JSON schema text with the default options.
pub fn compile(schema_text: &str) -> Result<Validator, SchemaError> {
    compile_with(schema_text, &CompileOptions::default())
}

/// Compile JSON schema text.
pub fn compile_with(
    schema_text: &str,
    options: &CompileOptions,
) -> Result<Validator, SchemaError> {
    let document: Value = serde_json::from_str(schema_text)?;
    compile_value(&document, options)
}

/// Compile a schema written in YAML with the default options.
pub fn compile_yaml(schema_text: &str) -> Result<Validator, SchemaError> {
    compile_yaml_with(schema_text, &CompileOptions::default())
}

/// Compile a schema written in YAML.
pub fn compile_yaml_with(
    schema_text: &str,
    options: &CompileOptions,
) -> Result<Validator, SchemaError> {
    let document: Value = serde_yaml::from_str(schema_text)?;
    compile_value(&document, options)
}

/// Compile an already-parsed schema document.
pub fn compile_value(
    document: &Value,
    options: &CompileOptions,
) -> Result<Validator, SchemaError> {
    let mut opts = jsonschema::options();
    if let Some(draft) = options.draft {
        opts.with_draft(draft.to_jsonschema());
    }
    opts.should_validate_formats(options.validate_formats);

    let compiled = opts.build(document).map_err(|e| SchemaError::Invalid {
        path: format!("#{}", e.instance_path),
        reason: e.to_string(),
    })?;

    let schema = Schema::new(document.clone(), options.field_order);
    tracing::debug!(
        fields = schema.field_paths().len(),
        order = ?options.field_order,
        "compiled schema"
    );

    Ok(Validator::new(schema, compiled))
}
