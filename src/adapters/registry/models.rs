//! Wire models for the registration listing endpoint

use crate::domain::RegistrationRecord;
use serde::{Deserialize, Serialize};

/// Body returned by the listing endpoint
///
/// Both fields are optional on the wire: an empty range may come back with
/// only a `message`, and error responses reuse the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Registration records in the requested range
    #[serde(default)]
    pub data: Option<Vec<RegistrationRecord>>,

    /// Human-readable status from the server
    #[serde(default)]
    pub message: Option<String>,
}

impl RegistrationResponse {
    pub fn with_records(records: Vec<RegistrationRecord>) -> Self {
        Self {
            data: Some(records),
            message: None,
        }
    }

    /// Number of records, treating an absent list as empty
    pub fn record_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }
}

/// Error body shape; only the message is of interest
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_response() {
        let body = json!({
            "message": "Registrations fetched",
            "data": [
                {"_id": "65f0", "firstName": "Asha", "createdAt": "2024-03-05T10:00:00Z"}
            ]
        });
        let response: RegistrationResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.record_count(), 1);
        assert_eq!(response.message.as_deref(), Some("Registrations fetched"));
        let record = &response.data.unwrap()[0];
        assert_eq!(record.get("firstName").unwrap(), "Asha");
    }

    #[test]
    fn test_deserialize_without_data() {
        let response: RegistrationResponse =
            serde_json::from_value(json!({"message": "No registrations found"})).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.record_count(), 0);
    }

    #[test]
    fn test_deserialize_null_data() {
        let response: RegistrationResponse =
            serde_json::from_value(json!({"data": null})).unwrap();
        assert!(response.data.is_none());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_error_body_tolerates_extra_fields() {
        let body: ErrorBody =
            serde_json::from_value(json!({"message": "boom", "success": false})).unwrap();
        assert_eq!(body.message.as_deref(), Some("boom"));
    }
}
