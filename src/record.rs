//! Output records and static tag sets.
//!
//! A record is the per-call result of a generator-mode run: a mapping that
//! always carries a `description` entry plus one entry per collected item.
//! Records serialize as plain mappings, ready for fixture emission.

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Key under which every record stores its description.
pub const DESCRIPTION_KEY: &str = "description";

/// The mapping produced by a generator-mode run.
///
/// Duplicate keys follow mapping overwrite semantics: the last write wins,
/// including a yielded item overwriting `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRecord {
    entries: HashMap<String, Value>,
}

impl OutputRecord {
    /// A record seeded with its `description` entry.
    pub fn with_description(description: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            DESCRIPTION_KEY.to_string(),
            Value::String(description.into()),
        );
        Self { entries }
    }

    /// The record's description, when it is still a string.
    pub fn description(&self) -> Option<&str> {
        self.entries.get(DESCRIPTION_KEY).and_then(Value::as_str)
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// A new record formed by overlaying `tags` under this record's entries.
    /// Keys present in both keep this record's value; neither input is
    /// modified.
    pub fn overlay_tags(&self, tags: &TagSet) -> Self {
        Self {
            entries: self.entries.clone().union(tags.entries.clone()),
        }
    }

    /// The record in fixture-emission form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

/// Static annotations bound to a case at decoration time and overlaid onto
/// every record it produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    entries: HashMap<String, Value>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag, builder-style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
