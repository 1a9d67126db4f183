//! Record cleaning
//!
//! Strips [`EXCLUDED_FIELDS`] from registration records before they reach a
//! renderer. The exclusion list lives in the domain layer; this module only
//! applies it.

use crate::domain::{CleanedRecord, RegistrationRecord, EXCLUDED_FIELDS};

/// Remove every excluded key from a record, keeping the rest in order
///
/// # Examples
///
/// ```
/// use registry_export::core::transform::clean_record;
/// use registry_export::domain::RegistrationRecord;
/// use serde_json::json;
///
/// let raw: RegistrationRecord = serde_json::from_value(json!({
///     "_id": "65f0c1",
///     "firstName": "Asha",
///     "city": "Pune"
/// })).unwrap();
///
/// let cleaned = clean_record(raw);
/// assert_eq!(cleaned.keys().collect::<Vec<_>>(), vec!["firstName"]);
/// ```
pub fn clean_record(record: RegistrationRecord) -> CleanedRecord {
    let mut fields = record.into_inner();
    fields.retain(|key, _| !EXCLUDED_FIELDS.contains(&key.as_str()));
    CleanedRecord::from_map(fields)
}

/// Clean every record, preserving record order
pub fn clean_records(records: Vec<RegistrationRecord>) -> Vec<CleanedRecord> {
    records.into_iter().map(clean_record).collect()
}
