//! Request validation for API endpoints
//!
//! Provides a validation trait and helper macros used by the request
//! types in the handler modules. Validation always runs before any
//! storage access so that malformed requests never reach the database.

use crate::error::ApiError;

/// Trait for validating request payloads
pub trait RequestValidation {
    /// Validate the request, returning a validation error on failure
    fn validate(&self) -> Result<(), ApiError>;
}

/// Validate a field against a predicate
///
/// # Example
///
/// ```ignore
/// validate_field!(request.name, !request.name.is_empty(), "Name is required");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $condition:expr, $message:expr) => {
        if !($condition) {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Validate that a string field is not empty after trimming
///
/// # Example
///
/// ```ignore
/// validate_required!(request.title, "Title is required");
/// ```
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        $crate::validate_field!($field, !$field.trim().is_empty(), $message);
    };
}

/// Validate that a UUID field is not the nil UUID
///
/// # Example
///
/// ```ignore
/// validate_uuid!(request.auditee_id, "Auditee ID is required");
/// ```
#[macro_export]
macro_rules! validate_uuid {
    ($field:expr, $message:expr) => {
        $crate::validate_field!($field, !$field.is_nil(), $message);
    };
}

/// Validate that a string field length is within bounds (inclusive)
///
/// # Example
///
/// ```ignore
/// validate_length!(request.title, 1, 200, "Title must be 1-200 characters");
/// ```
#[macro_export]
macro_rules! validate_length {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        $crate::validate_field!(
            $field,
            $field.len() >= $min && $field.len() <= $max,
            $message
        );
    };
}

/// Validate that a string field looks like an email address
///
/// # Example
///
/// ```ignore
/// validate_email!(request.email, "Invalid email format");
/// ```
#[macro_export]
macro_rules! validate_email {
    ($field:expr, $message:expr) => {
        $crate::validate_field!(
            $field,
            $field.contains('@') && $field.contains('.') && $field.len() >= 5,
            $message
        );
    };
}

/// Validate that a numeric field is within bounds (inclusive)
///
/// # Example
///
/// ```ignore
/// validate_range!(request.attempt_number, 1, 2, "Attempt number must be 1 or 2");
/// ```
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        $crate::validate_field!($field, $field >= $min && $field <= $max, $message);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct SampleRequest {
        name: String,
        email: String,
        auditee_id: Uuid,
        attempt_number: i16,
    }

    impl RequestValidation for SampleRequest {
        fn validate(&self) -> Result<(), ApiError> {
            validate_required!(self.name, "Name is required");
            validate_length!(self.name, 1, 50, "Name must be 1-50 characters");
            validate_email!(self.email, "Invalid email format");
            validate_uuid!(self.auditee_id, "Auditee ID is required");
            validate_range!(self.attempt_number, 1, 2, "Attempt number must be 1 or 2");
            Ok(())
        }
    }

    fn valid_request() -> SampleRequest {
        SampleRequest {
            name: "Quality Review".to_string(),
            email: "auditor@example.com".to_string(),
            auditee_id: Uuid::new_v4(),
            attempt_number: 1,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut request = valid_request();
        request.name = "   ".to_string();
        let error = request.validate().unwrap_err();
        assert!(matches!(error, ApiError::Validation { .. }));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut request = valid_request();
        request.name = "x".repeat(51);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_nil_uuid_rejected() {
        let mut request = valid_request();
        request.auditee_id = Uuid::nil();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_attempt_out_of_range_rejected() {
        let mut request = valid_request();
        request.attempt_number = 3;
        let error = request.validate().unwrap_err();
        assert_eq!(error.error_type(), "validation_error");

        request.attempt_number = 0;
        assert!(request.validate().is_err());
    }
}
