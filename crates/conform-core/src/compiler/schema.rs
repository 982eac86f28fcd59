//! Field layout of a compiled schema.
//!
//! Constraint evaluation belongs to `jsonschema`; this tree only records which
//! properties the document declares, and in which order, so violations can
//! be reported field by field.

use serde_json::Value;

use crate::config::FieldOrder;
use crate::types::{FieldPath, JsonType};

/// Declared properties of one (sub)schema.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldNode {
    properties: Vec<(String, FieldNode)>,
    items: Option<Box<FieldNode>>,
}

impl FieldNode {
    fn from_document(document: &Value, order: FieldOrder) -> Self {
        let mut node = FieldNode::default();

        if let Some(Value::Object(properties)) = document.get("properties") {
            for (name, schema) in properties {
                node.properties
                    .push((name.clone(), FieldNode::from_document(schema, order)));
            }
            if order == FieldOrder::Alphabetical {
                node.properties.sort_by(|a, b| a.0.cmp(&b.0));
            }
        }

        if let Some(items @ (Value::Object(_) | Value::Bool(_))) = document.get("items") {
            node.items = Some(Box::new(FieldNode::from_document(items, order)));
        }

        node
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (name, child) in &self.properties {
            let path = join(prefix, name);
            out.push(path.clone());
            child.collect_paths(&path, out);
        }
        if let Some(items) = &self.items {
            items.collect_paths(&join(prefix, "*"), out);
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// A compiled schema: the source document and its declared field layout.
#[derive(Debug, Clone)]
pub struct Schema {
    document: Value,
    fields: FieldNode,
}

impl Schema {
    pub(crate) fn new(document: Value, order: FieldOrder) -> Self {
        let fields = FieldNode::from_document(&document, order);
        Self { document, fields }
    }

    /// The schema document as compiled.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Dotted paths of every declared property, in report order. Array
    /// elements appear as `*`.
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.fields.collect_paths("", &mut paths);
        paths
    }

    /// Types accepted at the root; empty when unconstrained.
    pub fn root_types(&self) -> Vec<JsonType> {
        self.document
            .get("type")
            .map(declared_types)
            .unwrap_or_default()
    }

    /// The `type` keyword found at a schema location, such as
    /// `/properties/name/type`.
    pub(crate) fn types_at(&self, schema_path: &str) -> Option<Vec<JsonType>> {
        self.document.pointer(schema_path).map(declared_types)
    }

    /// Sort key placing a field by its declared position at each level.
    /// Undeclared fields sort after declared ones, by name.
    pub(crate) fn order_key(&self, path: &FieldPath) -> Vec<(usize, String)> {
        let mut key = Vec::with_capacity(path.segments().len());
        let mut node = Some(&self.fields);

        for segment in path.segments() {
            let Some(current) = node else {
                key.push((usize::MAX, segment.clone()));
                continue;
            };
            let position = current
                .properties
                .iter()
                .position(|(name, _)| name == segment);
            if let Some(position) = position {
                key.push((position, String::new()));
                node = Some(&current.properties[position].1);
            } else if let (Ok(index), Some(items)) = (segment.parse::<usize>(), &current.items) {
                key.push((index, String::new()));
                node = Some(items);
            } else {
                key.push((usize::MAX, segment.clone()));
                node = None;
            }
        }
        key
    }
}

fn declared_types(value: &Value) -> Vec<JsonType> {
    match value {
        Value::String(name) => JsonType::from_name(name).into_iter().collect(),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .filter_map(JsonType::from_name)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "address": {
                    "properties": { "zip": {}, "city": {} }
                },
                "tags": { "items": { "properties": { "label": {} } } }
            }
        })
    }

    #[test]
    fn test_declaration_field_paths() {
        let schema = Schema::new(person(), FieldOrder::Declaration);
        assert_eq!(
            schema.field_paths(),
            vec!["name", "address", "address.zip", "address.city", "tags", "tags.*.label"]
        );
        assert_eq!(schema.root_types(), vec![JsonType::Object]);
    }

    fn positions(key: Vec<(usize, String)>) -> Vec<usize> {
        key.into_iter().map(|(position, _)| position).collect()
    }

    #[test]
    fn test_order_key_follows_declaration() {
        let schema = Schema::new(person(), FieldOrder::Declaration);
        let root = FieldPath::root();

        assert!(schema.order_key(&root).is_empty());
        assert_eq!(positions(schema.order_key(&root.child("address").child("city"))), vec![1, 1]);
        assert_eq!(
            positions(schema.order_key(&root.child("tags").child("3").child("label"))),
            vec![2, 3, 0]
        );
        assert_eq!(
            schema.order_key(&root.child("extra")),
            vec![(usize::MAX, "extra".to_string())]
        );
        assert!(schema.order_key(&root.child("alpha")) < schema.order_key(&root.child("beta")));
        assert!(schema.order_key(&root.child("tags")) < schema.order_key(&root.child("alpha")));
    }

    #[test]
    fn test_alphabetical_order_key() {
        let schema = Schema::new(person(), FieldOrder::Alphabetical);
        let root = FieldPath::root();
        assert_eq!(positions(schema.order_key(&root.child("address"))), vec![0]);
        assert_eq!(positions(schema.order_key(&root.child("name"))), vec![1]);
        assert_eq!(positions(schema.order_key(&root.child("address").child("city"))), vec![0, 0]);
    }

    #[test]
    fn test_types_at_schema_location() {
        let schema = Schema::new(person(), FieldOrder::Declaration);
        assert_eq!(
            schema.types_at("/properties/name/type"),
            Some(vec![JsonType::String])
        );
        assert_eq!(schema.types_at("/properties/missing/type"), None);
    }
}
