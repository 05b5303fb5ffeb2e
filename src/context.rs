//! Render bindings produced by tags.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// The variables a template's tags produce for one render.
///
/// Insertion-ordered; binding a name that already exists silently replaces
/// the earlier value (last write wins), exactly as a template context write
/// would.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: IndexMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding of that name.
    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The final render context: the base object with every binding laid
    /// over it. Bindings shadow base entries of the same name. A base that
    /// is not an object contributes nothing.
    pub fn merged_over(&self, base: &Value) -> Value {
        let mut merged = match base.as_object() {
            Some(object) => object.clone(),
            None => Map::new(),
        };
        for (name, value) in &self.values {
            merged.insert(name.clone(), value.clone());
        }
        Value::Object(merged)
    }
}
