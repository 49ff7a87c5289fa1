//! Grid records: one row of the dataset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of grid data, a mapping from field name to JSON value.
///
/// Records are owned by the host; the grid only reads them.
///
/// ```rust
/// use littlegrid::Record;
/// use serde_json::json;
///
/// let record = Record::from_value(json!({
///     "name": "Alice",
///     "meta": { "role": "admin" }
/// }))
/// .unwrap();
///
/// assert_eq!(record.get("name"), Some(&json!("Alice")));
/// assert_eq!(record.get("meta.role"), Some(&json!("admin")));
/// assert_eq!(record.get("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Record(Map::new())
    }

    /// Wrap a JSON object. Returns `None` for any other JSON value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Record(map)),
            _ => None,
        }
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Look up a field.
    ///
    /// An exact key match wins; otherwise `path` is read as dot notation
    /// into nested objects (`"author.name"`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.0.get(path) {
            return Some(value);
        }
        if !path.contains('.') {
            return None;
        }

        let mut parts = path.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            match current {
                Value::Object(map) => current = map.get(part)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Nested records stored as an array of objects under `path`.
    ///
    /// Non-object array entries are skipped; a missing or non-array field
    /// yields no records.
    pub fn nested(&self, path: &str) -> Vec<Record> {
        match self.get(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| Record::from_value(item.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
