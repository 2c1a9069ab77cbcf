//! Out-of-band schema metadata
//!
//! Metadata never affects validation. It exists so tooling such as the
//! documentation generator can introspect a schema without re-deriving its
//! validation logic.
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key of the schema kind entry
pub const KIND_KEY: &str = "kind";
/// Key of the free-form description entry
pub const DESCRIPTION_KEY: &str = "description";
/// Key of the examples list entry
pub const EXAMPLES_KEY: &str = "examples";

/// Kind reported by every file schema
pub const FILE_KIND: &str = "File";

/// Ordered key/value metadata attached to a schema
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: BTreeMap<String, Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata tagged with the given kind
    pub fn with_kind(kind: &str) -> Self {
        let mut metadata = Self::new();
        metadata.insert(KIND_KEY, Value::String(kind.to_string()));
        metadata
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn kind(&self) -> Option<&str> {
        self.get(KIND_KEY).and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION_KEY).and_then(Value::as_str)
    }

    pub fn examples(&self) -> &[Value] {
        self.get(EXAMPLES_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append to the examples list, creating it on first use
    pub fn push_example(&mut self, example: Value) {
        let entry = self
            .entries
            .entry(EXAMPLES_KEY.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(items) => items.push(example),
            other => *other = Value::Array(vec![example]),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Schemas that carry metadata
pub trait HasMetadata {
    fn metadata(&self) -> &Metadata;
}

/// Read one metadata entry of a schema
pub fn get_meta<'a, S>(schema: &'a S, key: &str) -> Option<&'a Value>
where
    S: HasMetadata + ?Sized,
{
    schema.metadata().get(key)
}
