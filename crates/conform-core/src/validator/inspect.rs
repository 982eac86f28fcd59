//! Explicit field projection for objects that are not `Serialize`.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// Name-based access to an object's fields.
///
/// Implement this for types that should not (or cannot) go through serde.
/// Field names are matched against the schema's property names.
pub trait Inspect {
    /// The value of the named field, or `None` when the field is absent.
    fn field(&self, name: &str) -> Option<Value>;

    /// Names of every field the object exposes.
    fn field_names(&self) -> Vec<String>;

    /// Project the object into a JSON object, one entry per exposed field.
    fn project(&self) -> Value {
        let mut map = Map::new();
        for name in self.field_names() {
            if let Some(value) = self.field(&name) {
                map.insert(name, value);
            }
        }
        Value::Object(map)
    }
}

impl Inspect for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl Inspect for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl<S: std::hash::BuildHasher> Inspect for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.keys().cloned().collect();
        names.sort();
        names
    }
}
