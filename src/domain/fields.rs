//! Exportable field catalog and the operator's selection
//!
//! The catalog is fixed for the process lifetime. A [`FieldSelection`] is an
//! ordered set drawn from it: selection order is column order in both export
//! formats.

use super::errors::ValidationError;
use serde::Serialize;
use std::fmt;

/// Record key holding the creation timestamp
pub const CREATED_AT_KEY: &str = "createdAt";

/// One exportable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    /// Column header shown in the exported file
    pub label: &'static str,

    /// Key of the value in a registration record
    pub key: &'static str,
}

impl FieldDescriptor {
    const fn new(label: &'static str, key: &'static str) -> Self {
        Self { label, key }
    }

    /// Whether this column holds the creation timestamp
    pub fn is_creation_timestamp(&self) -> bool {
        self.key == CREATED_AT_KEY
    }

    /// Looks up a catalog entry by key or label, ignoring case
    pub fn lookup(name: &str) -> Option<&'static FieldDescriptor> {
        let name = name.trim();
        FIELD_CATALOG
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(name) || f.label.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Every field that can be exported, in presentation order
pub const FIELD_CATALOG: [FieldDescriptor; 7] = [
    FieldDescriptor::new("Name", "firstName"),
    FieldDescriptor::new("Age", "age"),
    FieldDescriptor::new("Gender", "gender"),
    FieldDescriptor::new("Email", "email"),
    FieldDescriptor::new("Mobile Number", "mobile_number"),
    FieldDescriptor::new("Date of Registration", CREATED_AT_KEY),
    FieldDescriptor::new("Patient ID", "patientId"),
];

/// Ordered, duplicate-free subset of [`FIELD_CATALOG`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<FieldDescriptor>,
}

impl FieldSelection {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves catalog keys or labels into a selection
    ///
    /// Repeated names collapse onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for the first name that
    /// matches no catalog entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use registry_export::domain::fields::FieldSelection;
    ///
    /// let selection = FieldSelection::from_names(["Name", "email"]).unwrap();
    /// let labels: Vec<_> = selection.labels().collect();
    /// assert_eq!(labels, vec!["Name", "Email"]);
    /// ```
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for name in names {
            let name = name.as_ref();
            let field = FieldDescriptor::lookup(name)
                .ok_or_else(|| ValidationError::UnknownField(name.trim().to_string()))?;
            selection.insert(*field);
        }
        Ok(selection)
    }

    /// Appends a field; returns `false` if it was already selected
    pub fn insert(&mut self, field: FieldDescriptor) -> bool {
        if self.contains(&field) {
            return false;
        }
        self.fields.push(field);
        true
    }

    /// Removes a field; returns `false` if it was not selected
    pub fn remove(&mut self, field: &FieldDescriptor) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f != field);
        self.fields.len() != before
    }

    /// Empties the selection
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn contains(&self, field: &FieldDescriptor) -> bool {
        self.fields.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Column headers in selection order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.label)
    }
}

impl<'a> IntoIterator for &'a FieldSelection {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
