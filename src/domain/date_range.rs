//! Calendar date range selected in the export dialog

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Wire format for dates sent to the registration source
pub const WIRE_DATE_FORMAT: &str = "%Y/%m/%d";

/// `(from, to)` pair; either end may still be unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Both ends set
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Unsets both ends
    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    /// Checks the range is usable and renders it for the wire
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingDateRange`] if either end is unset
    /// - [`ValidationError::InvertedDateRange`] if `from` is after `to`
    pub fn to_wire(&self) -> Result<WireDateRange, ValidationError> {
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return Err(ValidationError::MissingDateRange);
        };

        if from > to {
            return Err(ValidationError::InvertedDateRange {
                from: from.format(WIRE_DATE_FORMAT).to_string(),
                to: to.format(WIRE_DATE_FORMAT).to_string(),
            });
        }

        Ok(WireDateRange {
            from_date: from.format(WIRE_DATE_FORMAT).to_string(),
            to_date: to.format(WIRE_DATE_FORMAT).to_string(),
        })
    }
}

/// Parses an operator-supplied date in `YYYY-MM-DD` or `YYYY/MM/DD` form
///
/// # Examples
///
/// ```
/// use registry_export::domain::date_range::parse_date;
///
/// let a = parse_date("2024-03-05").unwrap();
/// let b = parse_date("2024/03/05").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, WIRE_DATE_FORMAT))
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Request body for the registration listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDateRange {
    pub from_date: String,
    pub to_date: String,
}

impl fmt::Display for WireDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from_date, self.to_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_wire_formats_with_slashes() {
        let range = DateRange::between(date(2024, 3, 5), date(2024, 12, 31));
        let wire = range.to_wire().unwrap();
        assert_eq!(wire.from_date, "2024/03/05");
        assert_eq!(wire.to_date, "2024/12/31");
    }

    #[test]
    fn test_to_wire_same_day() {
        let range = DateRange::between(date(2024, 1, 1), date(2024, 1, 1));
        assert!(range.to_wire().is_ok());
    }

    #[test_case(None, None)]
    #[test_case(Some(date(2024, 1, 1)), None)]
    #[test_case(None, Some(date(2024, 1, 1)))]
    fn test_to_wire_missing_end(from: Option<NaiveDate>, to: Option<NaiveDate>) {
        let range = DateRange::new(from, to);
        assert_eq!(range.to_wire(), Err(ValidationError::MissingDateRange));
    }

    #[test]
    fn test_to_wire_rejects_inverted_range() {
        let range = DateRange::between(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(
            range.to_wire(),
            Err(ValidationError::InvertedDateRange { .. })
        ));
    }

    #[test]
    fn test_wire_body_field_names() {
        let wire = DateRange::between(date(2024, 1, 1), date(2024, 1, 31))
            .to_wire()
            .unwrap();
        let body = serde_json::to_value(&wire).unwrap();
        assert_eq!(body["fromDate"], "2024/01/01");
        assert_eq!(body["toDate"], "2024/01/31");
    }

    #[test]
    fn test_clear() {
        let mut range = DateRange::between(date(2024, 1, 1), date(2024, 1, 31));
        assert!(range.is_complete());
        range.clear();
        assert_eq!(range, DateRange::default());
    }

    #[test_case("2024-03-05")]
    #[test_case("2024/03/05")]
    #[test_case(" 2024-03-05 ")]
    fn test_parse_date_accepts(input: &str) {
        assert_eq!(parse_date(input).unwrap(), date(2024, 3, 5));
    }

    #[test_case("05-03-2024")]
    #[test_case("2024-13-01")]
    #[test_case("")]
    fn test_parse_date_rejects(input: &str) {
        assert!(matches!(parse_date(input), Err(ValidationError::InvalidDate(_))));
    }
}
