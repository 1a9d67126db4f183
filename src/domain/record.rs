//! Registration records as returned by the source, before and after cleaning

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record keys stripped before export
///
/// Internal identifiers, audit fields and free-text address/visit fields
/// never reach a renderer.
pub const EXCLUDED_FIELDS: [&str; 12] = [
    "_id",
    "isRegistered",
    "updatedAt",
    "__v",
    "address",
    "city",
    "state",
    "pincode",
    "reason",
    "typeOfVisit",
    "middleName",
    "lastname",
];

/// One patient's registration entry, exactly as the source sent it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationRecord(Map<String, Value>);

impl RegistrationRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RegistrationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A registration record with [`EXCLUDED_FIELDS`] removed
///
/// Only produced by [`crate::core::transform::clean_record`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CleanedRecord(Map<String, Value>);

impl CleanedRecord {
    pub(crate) fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
