//! Maps `jsonschema` errors onto the violation catalogue.
//!
//! Every message reads `<path>: <description>`. Descriptions never repeat the
//! offending value, only the constraint it failed.

use jsonschema::error::{TypeKind, ValidationErrorKind};
use serde_json::Value;

use super::report::{ConstraintKind, Violation};
use crate::compiler::Schema;
use crate::types::{FieldPath, JsonType};

/// Translate one `jsonschema` error. Most errors give one violation;
/// `additionalProperties` gives one per unexpected key.
pub(crate) fn violations(
    error: &jsonschema::ValidationError<'_>,
    schema: &Schema,
) -> Vec<Violation> {
    let path = FieldPath::from_pointer(error.instance_path.as_str());
    let one = |kind, description: String| vec![Violation::new(&path, kind, description)];

    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = property.as_str().map_or_else(|| property.to_string(), str::to_string);
            one(ConstraintKind::Required, format!("{name} is required"))
        }
        ValidationErrorKind::Type { kind } => {
            let expected = expected_types(schema, error.schema_path.as_str(), kind);
            one(
                ConstraintKind::Type,
                format!(
                    "Invalid type. Expected: {}, given: {}",
                    expected.join(" or "),
                    JsonType::of(&error.instance)
                ),
            )
        }
        ValidationErrorKind::MinLength { limit } => one(
            ConstraintKind::MinLength,
            format!("String length must be greater than or equal to {limit}"),
        ),
        ValidationErrorKind::MaxLength { limit } => one(
            ConstraintKind::MaxLength,
            format!("String length must be less than or equal to {limit}"),
        ),
        ValidationErrorKind::Pattern { pattern } => one(
            ConstraintKind::Pattern,
            format!("Does not match pattern '{pattern}'"),
        ),
        ValidationErrorKind::Minimum { limit } => one(
            ConstraintKind::Minimum,
            format!("Must be greater than or equal to {limit}"),
        ),
        ValidationErrorKind::ExclusiveMinimum { limit } => one(
            ConstraintKind::ExclusiveMinimum,
            format!("Must be greater than {limit}"),
        ),
        ValidationErrorKind::Maximum { limit } => one(
            ConstraintKind::Maximum,
            format!("Must be less than or equal to {limit}"),
        ),
        ValidationErrorKind::ExclusiveMaximum { limit } => one(
            ConstraintKind::ExclusiveMaximum,
            format!("Must be less than {limit}"),
        ),
        ValidationErrorKind::MultipleOf { multiple_of } => one(
            ConstraintKind::MultipleOf,
            format!("Must be a multiple of {multiple_of}"),
        ),
        ValidationErrorKind::Enum { options } => one(
            ConstraintKind::Enum,
            format!("{} must be one of the following: {}", path.leaf(), listed(options)),
        ),
        ValidationErrorKind::Constant { expected_value } => one(
            ConstraintKind::Const,
            format!("{} does not match: {expected_value}", path.leaf()),
        ),
        ValidationErrorKind::MinItems { limit } => one(
            ConstraintKind::MinItems,
            format!("Array must have at least {limit} items"),
        ),
        ValidationErrorKind::MaxItems { limit } => one(
            ConstraintKind::MaxItems,
            format!("Array must have at most {limit} items"),
        ),
        ValidationErrorKind::UniqueItems => one(
            ConstraintKind::UniqueItems,
            "Array items must be unique".to_string(),
        ),
        ValidationErrorKind::MinProperties { limit } => one(
            ConstraintKind::MinProperties,
            format!("Must have at least {limit} properties"),
        ),
        ValidationErrorKind::MaxProperties { limit } => one(
            ConstraintKind::MaxProperties,
            format!("Must have at most {limit} properties"),
        ),
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
            .iter()
            .map(|key| {
                Violation::new(
                    &path,
                    ConstraintKind::AdditionalProperty,
                    format!("Additional property {key} is not allowed"),
                )
            })
            .collect(),
        ValidationErrorKind::FalseSchema => one(
            ConstraintKind::FalseSchema,
            "False always fails validation".to_string(),
        ),
        ValidationErrorKind::AnyOf => one(
            ConstraintKind::AnyOf,
            "Must validate at least one schema (anyOf)".to_string(),
        ),
        ValidationErrorKind::OneOfNotValid | ValidationErrorKind::OneOfMultipleValid => one(
            ConstraintKind::OneOf,
            "Must validate one and only one schema (oneOf)".to_string(),
        ),
        ValidationErrorKind::Not { .. } => one(
            ConstraintKind::Not,
            "Must not validate the schema (not)".to_string(),
        ),
        ValidationErrorKind::Format { format } => one(
            ConstraintKind::Format,
            format!("Does not match format '{format}'"),
        ),
        _ => one(ConstraintKind::Other, error.to_string()),
    }
}

/// Expected type names, in the order the schema declares them. Falls back to
/// the order `jsonschema` reports when the keyword cannot be found, as happens
/// behind a `$ref`.
fn expected_types(schema: &Schema, schema_path: &str, kind: &TypeKind) -> Vec<String> {
    if let Some(declared) = schema.types_at(schema_path).filter(|t| !t.is_empty()) {
        return declared.iter().map(|t| t.as_str().to_string()).collect();
    }
    match kind {
        TypeKind::Single(single) => vec![single.to_string()],
        TypeKind::Multiple(types) => (*types).into_iter().map(|t| t.to_string()).collect(),
    }
}

fn listed(options: &Value) -> String {
    match options {
        Value::Array(options) => options
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
