//! The transient school representation.
//!
//! A [`SchoolRecord`] is whatever object the server returned for a school. It
//! is edited in exactly one place (the district reference) and sent back
//! wholesale, so every other field, and the key order, passes through
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::{DistrictId, SchoolId};
use crate::errors::CoreError;

/// Field holding a school's owning district.
pub const DISTRICT_FIELD: &str = "district_id";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolRecord(Map<String, Value>);

impl SchoolRecord {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotAnObject`] for arrays, strings, numbers and the like.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(CoreError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    #[must_use]
    pub fn district(&self) -> Option<&Value> {
        self.0.get(DISTRICT_FIELD)
    }

    /// Point the record at `district`, leaving every other field as fetched.
    ///
    /// The identifier is written exactly as selected. It stays a string when
    /// the old value was one; otherwise integer literals become numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if the record carries no district
    /// reference. The field is never inserted.
    pub fn reassign(&mut self, school: &SchoolId, district: &DistrictId) -> Result<(), CoreError> {
        let Some(slot) = self.0.get_mut(DISTRICT_FIELD) else {
            return Err(CoreError::MissingField {
                school_id: school.to_string(),
                field: DISTRICT_FIELD.to_string(),
            });
        };
        *slot = district_value(slot, district);
        Ok(())
    }

    /// Flatten into `key=value` pairs the way jQuery's `$.param` encodes an
    /// object for a browser form post.
    ///
    /// `null` becomes an empty value, arrays of scalars repeat `key[]`, and
    /// nested containers use `key[index]` / `key[field]` brackets. Empty
    /// arrays and objects produce no pairs.
    #[must_use]
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            push_form_pairs(key, value, &mut pairs);
        }
        pairs
    }
}

fn district_value(previous: &Value, district: &DistrictId) -> Value {
    let raw = district.as_str();
    if previous.is_string() {
        return Value::String(raw.to_string());
    }
    raw.parse::<i64>()
        .map_or_else(|_| Value::String(raw.to_string()), Value::from)
}

fn push_form_pairs(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if is_container(item) {
                    push_form_pairs(&format!("{prefix}[{index}]"), item, pairs);
                } else if prefix.ends_with("[]") {
                    push_form_pairs(prefix, item, pairs);
                } else {
                    push_form_pairs(&format!("{prefix}[]"), item, pairs);
                }
            }
        }
        Value::Object(fields) => {
            for (name, item) in fields {
                push_form_pairs(&format!("{prefix}[{name}]"), item, pairs);
            }
        }
        Value::Null => pairs.push((prefix.to_string(), String::new())),
        Value::String(s) => pairs.push((prefix.to_string(), s.clone())),
        scalar => pairs.push((prefix.to_string(), scalar.to_string())),
    }
}

const fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
