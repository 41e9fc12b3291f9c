//! Timestamp and date parsing for request payloads
//!
//! Clients submit dates as `YYYY-MM-DD` strings and timestamps as
//! RFC3339 strings. Both parsers report failures as validation errors
//! naming the offending field.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ApiError;

/// Parse an RFC3339 timestamp from a request field
pub fn parse_rfc3339(field: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| {
            ApiError::validation(format!(
                "Invalid {field} timestamp. Expected RFC3339 format: YYYY-MM-DDTHH:MM:SSZ"
            ))
        })
}

/// Parse a calendar date from a request field
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ApiError::validation(format!("Invalid {field}. Expected format: YYYY-MM-DD"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_accepts_utc_and_offsets() {
        let utc = parse_rfc3339("closed_at", "2025-07-01T10:30:00Z").unwrap();
        assert_eq!(utc.to_rfc3339(), "2025-07-01T10:30:00+00:00");

        let offset = parse_rfc3339("closed_at", "2025-07-01T12:30:00+02:00").unwrap();
        assert_eq!(utc, offset);
    }

    #[test]
    fn test_parse_rfc3339_rejects_garbage() {
        let error = parse_rfc3339("closed_at", "yesterday").unwrap_err();
        assert_eq!(error.error_type(), "validation_error");
        assert!(error.to_string().contains("closed_at"));
    }

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        let date = parse_date("due_date", "2025-07-01").unwrap();
        assert_eq!(date.to_string(), "2025-07-01");
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("due_date", "07/01/2025").is_err());
        assert!(parse_date("due_date", "2025-13-01").is_err());
        assert!(parse_date("due_date", "").is_err());
    }
}
