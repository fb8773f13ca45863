//! Typed access to the custom field bag.
//!
//! Jira returns custom fields under opaque identifiers with loosely typed
//! values. Lookups here report whether a value was found, absent, or present
//! with an unexpected shape, leaving the defaulting policy to the caller.

use serde_json::{Map, Value};

/// Outcome of reading one custom field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLookup<T> {
    /// The field exists and has the expected shape.
    Found(T),

    /// The field is missing or null.
    Absent,

    /// The field exists but has an unexpected shape.
    Malformed {
        /// What was wrong with the value.
        reason: String,
    },
}

impl<T> FieldLookup<T> {
    /// Returns the found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent | Self::Malformed { .. } => None,
        }
    }

    fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Read-only view over an issue's custom fields.
#[derive(Debug, Clone, Copy)]
pub struct CustomFields<'a> {
    values: &'a Map<String, Value>,
}

impl<'a> CustomFields<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Self { values }
    }

    fn get(&self, id: &str) -> Option<&'a Value> {
        self.values.get(id).filter(|value| !value.is_null())
    }

    /// Reads a plain string field.
    pub fn string(&self, id: &str) -> FieldLookup<&'a str> {
        match self.get(id) {
            None => FieldLookup::Absent,
            Some(Value::String(s)) => FieldLookup::Found(s.as_str()),
            Some(other) => FieldLookup::malformed(format!("expected string, got {other}")),
        }
    }

    /// Reads a list whose every element is a string.
    pub fn string_list(&self, id: &str) -> FieldLookup<Vec<&'a str>> {
        let items = match self.get(id) {
            None => return FieldLookup::Absent,
            Some(Value::Array(items)) => items,
            Some(other) => {
                return FieldLookup::malformed(format!("expected list, got {other}"));
            }
        };

        let mut strings = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(s) => strings.push(s),
                None => {
                    return FieldLookup::malformed(format!("expected string item, got {item}"));
                }
            }
        }
        FieldLookup::Found(strings)
    }

    /// Reads a string stored under `key` inside an object field.
    pub fn nested_string(&self, id: &str, key: &str) -> FieldLookup<&'a str> {
        match self.get(id) {
            None => FieldLookup::Absent,
            Some(Value::Object(object)) => match object.get(key) {
                Some(Value::String(s)) => FieldLookup::Found(s.as_str()),
                Some(other) => {
                    FieldLookup::malformed(format!("expected string at '{key}', got {other}"))
                }
                None => FieldLookup::malformed(format!("object has no '{key}' key")),
            },
            Some(other) => FieldLookup::malformed(format!("expected object, got {other}")),
        }
    }
}
