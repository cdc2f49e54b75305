//! Data models for the roster page generator.
//!
//! This module contains the core data structures used throughout
//! the application for representing people, grouping keys, and
//! the grouped roster.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Key a person is grouped under: their manager, or the absent marker.
///
/// The marker is a distinct variant rather than a sentinel string, so a
/// roster entry whose manager happens to be named like the marker label
/// still lands in its own bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// The person reports to this manager.
    Manager(String),
    /// The person has no manager (field absent or null).
    Unassigned,
}

impl GroupKey {
    /// Builds a key from a raw `manager` field value.
    ///
    /// Absent and null both map to [`GroupKey::Unassigned`]. String values
    /// are used directly. Any other JSON value is folded to its compact
    /// JSON text and used as an opaque key.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => GroupKey::Unassigned,
            Some(Value::String(s)) => GroupKey::Manager(s.clone()),
            Some(other) => GroupKey::Manager(other.to_string()),
        }
    }

    /// Label used when the key is serialized into the rendered text.
    pub fn label(&self) -> &str {
        match self {
            GroupKey::Manager(name) => name,
            GroupKey::Unassigned => "(unassigned)",
        }
    }

    /// Returns true for the absent-manager bucket.
    pub fn is_unassigned(&self) -> bool {
        matches!(self, GroupKey::Unassigned)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A single roster entry.
///
/// Only `name` and `manager` carry meaning for this tool; whatever other
/// fields the roster defines are kept verbatim and round-tripped into the
/// rendered output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Display name of the person.
    pub name: String,
    /// Manager field as it appears in the roster. Kept as a raw JSON
    /// value so malformed entries group instead of failing to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Value>,
    /// Any additional roster fields (title, location, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Person {
    /// Creates a person with just a name and an optional manager name.
    #[allow(dead_code)] // Constructor used by tests
    pub fn new(name: impl Into<String>, manager: Option<&str>) -> Self {
        Self {
            name: name.into(),
            manager: manager.map(|m| Value::String(m.to_string())),
            extra: serde_json::Map::new(),
        }
    }

    /// The grouping key for this person.
    pub fn group_key(&self) -> GroupKey {
        GroupKey::from_value(self.manager.as_ref())
    }
}

/// The grouped roster: manager key to the people reporting to that key.
///
/// Keys appear in first-occurrence order; people within a bucket keep
/// their roster order. Derived fresh from the roster on every render.
#[derive(Debug, Clone, Default)]
pub struct ManagerGroups {
    groups: IndexMap<GroupKey, Vec<Person>>,
}

impl ManagerGroups {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a person to the bucket for `key`, creating the bucket on
    /// first encounter.
    pub fn push(&mut self, key: GroupKey, person: Person) {
        self.groups.entry(key).or_default().push(person);
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no bucket exists.
    #[allow(dead_code)] // Utility accessor
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Bucket for a key, if present.
    #[allow(dead_code)] // Utility accessor
    pub fn get(&self, key: &GroupKey) -> Option<&[Person]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterates buckets in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Person])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Keys in first-occurrence order.
    #[allow(dead_code)] // Utility accessor
    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }
}

impl Serialize for ManagerGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, people) in &self.groups {
            map.serialize_entry(key, people)?;
        }
        map.end()
    }
}
