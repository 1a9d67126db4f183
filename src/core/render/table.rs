//! Table model shared by both renderers
//!
//! Selected fields become columns and cleaned records become rows of text.
//! The creation timestamp is the only value that is reformatted.

use crate::domain::{CleanedRecord, FieldSelection, RegistryError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

/// Display format for the creation timestamp
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Header plus body rows, all as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Project cleaned records onto the selected fields
///
/// # Errors
///
/// Returns a render error if a creation timestamp cannot be parsed.
pub fn build_table(records: &[CleanedRecord], selection: &FieldSelection) -> Result<ExportTable> {
    let header = selection.labels().map(str::to_string).collect();

    let rows = records
        .iter()
        .map(|record| {
            selection
                .iter()
                .map(|field| {
                    let value = record.get(field.key);
                    if field.is_creation_timestamp() {
                        format_creation_timestamp(value)
                    } else {
                        Ok(cell_text(value))
                    }
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ExportTable { header, rows })
}

/// Verbatim text of a record value; null and missing become empty
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn format_creation_timestamp(value: Option<&Value>) -> Result<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(raw)) => reformat_timestamp(raw),
        Some(other) => Err(RegistryError::Render(format!(
            "Invalid creation timestamp: {other}"
        ))),
    }
}

/// Reformat a raw timestamp as `DD-MM-YYYY` in the local timezone
///
/// Accepts RFC 3339 (the calendar date is taken in local time), a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, or a bare `YYYY-MM-DD`. Naive values are
/// already local and keep their date.
///
/// # Examples
///
/// ```
/// use registry_export::core::render::table::reformat_timestamp;
///
/// assert_eq!(reformat_timestamp("2024-03-05T10:00:00").unwrap(), "05-03-2024");
/// ```
pub fn reformat_timestamp(raw: &str) -> Result<String> {
    reformat_timestamp_in(raw, &Local)
}

/// [`reformat_timestamp`] with an explicit timezone for offset-carrying input
pub fn reformat_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<String> {
    let raw = raw.trim();

    let date = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.with_timezone(tz).date_naive()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        dt.date()
    } else if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        date
    } else {
        return Err(RegistryError::Render(format!(
            "Invalid creation timestamp: {raw}"
        )));
    };

    Ok(date.format(DISPLAY_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::clean_record;
    use crate::domain::RegistrationRecord;
    use chrono::FixedOffset;
    use serde_json::json;
    use test_case::test_case;

    fn record(value: Value) -> CleanedRecord {
        clean_record(serde_json::from_value::<RegistrationRecord>(value).unwrap())
    }

    fn local_date(raw: &str) -> String {
        DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_DATE_FORMAT)
            .to_string()
    }

    #[test_case("2024-03-05T10:00:00", "05-03-2024")]
    #[test_case("2024-03-05T23:59:59.999", "05-03-2024")]
    #[test_case("2024-03-05", "05-03-2024")]
    fn test_reformat_naive_timestamp_keeps_date(raw: &str, expected: &str) {
        assert_eq!(reformat_timestamp(raw).unwrap(), expected);
    }

    #[test_case("2024-03-05T20:00:00Z", 19_800, "06-03-2024")]
    #[test_case("2024-03-05T20:00:00Z", 0, "05-03-2024")]
    #[test_case("2024-03-05T02:00:00.500Z", -18_000, "04-03-2024")]
    #[test_case("2024-03-05T23:30:00-02:00", 0, "06-03-2024")]
    fn test_reformat_timestamp_rolls_date_with_offset(raw: &str, offset_secs: i32, expected: &str) {
        let tz = FixedOffset::east_opt(offset_secs).unwrap();
        assert_eq!(reformat_timestamp_in(raw, &tz).unwrap(), expected);
    }

    #[test]
    fn test_reformat_timestamp_uses_local_time() {
        let raw = "2024-03-05T20:00:00Z";
        assert_eq!(reformat_timestamp(raw).unwrap(), local_date(raw));
    }

    #[test]
    fn test_reformat_timestamp_rejects_garbage() {
        assert!(matches!(
            reformat_timestamp("yesterday"),
            Err(RegistryError::Render(_))
        ));
    }

    #[test]
    fn test_build_table_follows_selection_order() {
        let records = vec![
            record(json!({"firstName": "Asha", "email": "asha@example.org", "age": 34})),
            record(json!({"firstName": "Ravi", "email": "ravi@example.org", "age": 51})),
        ];
        let selection = FieldSelection::from_names(["Email", "Name"]).unwrap();

        let table = build_table(&records, &selection).unwrap();

        assert_eq!(table.header, vec!["Email", "Name"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["asha@example.org", "Asha"],
                vec!["ravi@example.org", "Ravi"]
            ]
        );
    }

    #[test]
    fn test_build_table_text_conversion() {
        let records = vec![record(json!({
            "firstName": "Asha",
            "age": 34,
            "gender": null,
            "createdAt": "2024-03-05T10:00:00Z"
        }))];
        let selection =
            FieldSelection::from_names(["Name", "Age", "Gender", "Patient ID", "createdAt"])
                .unwrap();

        let table = build_table(&records, &selection).unwrap();

        assert_eq!(
            table.rows[0],
            vec![
                "Asha".to_string(),
                "34".to_string(),
                String::new(),
                String::new(),
                local_date("2024-03-05T10:00:00Z"),
            ]
        );
    }

    #[test]
    fn test_build_table_bad_timestamp_fails() {
        let records = vec![record(json!({"createdAt": "not a date"}))];
        let selection = FieldSelection::from_names(["createdAt"]).unwrap();
        assert!(build_table(&records, &selection).is_err());
    }

    #[test]
    fn test_build_table_ignores_unselected_bad_timestamp() {
        let records = vec![record(json!({"firstName": "Asha", "createdAt": "not a date"}))];
        let selection = FieldSelection::from_names(["Name"]).unwrap();
        let table = build_table(&records, &selection).unwrap();
        assert_eq!(table.rows, vec![vec!["Asha"]]);
    }
}
