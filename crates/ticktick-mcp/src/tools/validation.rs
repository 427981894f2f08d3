//! Parameter validation for tool inputs.
//!
//! All checks are pure. The `Display` text of [`ValidationError`] is returned
//! to the caller verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use ticktick_client::{Priority, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid priority. Must be 0 (None), 1 (Low), 3 (Medium), or 5 (High).")]
    InvalidPriority(i64),

    #[error("Invalid {field} format. Use ISO format: YYYY-MM-DDThh:mm:ss+0000")]
    InvalidDate { field: &'static str },

    #[error("Invalid view_mode. Must be one of: list, kanban, timeline.")]
    InvalidViewMode(String),
}

pub fn validate_priority(value: i64) -> Result<Priority, ValidationError> {
    Priority::try_from(value).map_err(ValidationError::InvalidPriority)
}

pub fn validate_optional_priority(value: Option<i64>) -> Result<Option<Priority>, ValidationError> {
    value.map(validate_priority).transpose()
}

pub fn validate_view_mode(value: &str) -> Result<ViewMode, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidViewMode(value.to_string()))
}

/// Check an optional date parameter. Absent and empty values pass.
pub fn validate_date(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(raw) if !raw.is_empty() => {
            if is_iso8601(&raw.replace('Z', "+00:00")) {
                Ok(())
            } else {
                Err(ValidationError::InvalidDate { field })
            }
        }
        _ => Ok(()),
    }
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn is_iso8601(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || OFFSET_FORMATS
            .iter()
            .any(|fmt| DateTime::parse_from_str(value, fmt).is_ok())
        || NAIVE_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Treat empty strings as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_accepts_enum_values() {
        assert_eq!(validate_priority(0), Ok(Priority::None));
        assert_eq!(validate_priority(5), Ok(Priority::High));
    }

    #[test]
    fn test_priority_rejects_everything_else() {
        for value in [-5, -1, 2, 4, 6, 10, i64::MAX] {
            let err = validate_priority(value).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid priority. Must be 0 (None), 1 (Low), 3 (Medium), or 5 (High)."
            );
        }
    }

    #[test]
    fn test_optional_priority() {
        assert_eq!(validate_optional_priority(None), Ok(None));
        assert_eq!(validate_optional_priority(Some(3)), Ok(Some(Priority::Medium)));
        assert!(validate_optional_priority(Some(2)).is_err());
    }

    #[test]
    fn test_view_mode() {
        assert_eq!(validate_view_mode("timeline"), Ok(ViewMode::Timeline));
        let err = validate_view_mode("calendar").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid view_mode. Must be one of: list, kanban, timeline."
        );
    }

    #[test]
    fn test_dates_with_offsets() {
        for value in [
            "2024-01-01T10:00:00+0000",
            "2024-01-01T10:00:00Z",
            "2024-01-01T10:00:00+00:00",
            "2024-01-01T10:00:00.123+0800",
            "2024-06-30T23:59:59-0500",
        ] {
            assert!(
                validate_date("due_date", Some(value)).is_ok(),
                "{value} should be accepted"
            );
        }
    }

    #[test]
    fn test_naive_dates() {
        for value in ["2024-01-01", "2024-01-01T10:00:00", "2024-01-01 10:00"] {
            assert!(
                validate_date("start_date", Some(value)).is_ok(),
                "{value} should be accepted"
            );
        }
    }

    #[test]
    fn test_invalid_dates_name_the_field() {
        for value in ["not-a-date", "2024-13-01", "01/02/2024", "2024-01-01T25:00:00Z"] {
            let err = validate_date("start_date", Some(value)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid start_date format. Use ISO format: YYYY-MM-DDThh:mm:ss+0000"
            );
        }
    }

    #[test]
    fn test_absent_or_empty_dates_pass() {
        assert!(validate_date("due_date", None).is_ok());
        assert!(validate_date("due_date", Some("")).is_ok());
    }
}
