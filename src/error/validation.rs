//! Parameter validation errors

use super::ValidationError;

/// Creates an unknown parameter error listing every accepted name
pub fn unknown_parameter(key: impl Into<String>, allowed: Vec<String>) -> ValidationError {
    ValidationError::UnknownParameter {
        key: key.into(),
        allowed,
    }
}

/// Creates an invalid value error
pub fn invalid_value(
    key: impl Into<String>,
    provided: impl Into<String>,
    expected_type: impl Into<String>,
) -> ValidationError {
    ValidationError::InvalidValue {
        key: key.into(),
        provided: provided.into(),
        expected_type: expected_type.into(),
    }
}
