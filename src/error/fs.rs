//! Input and output errors

use super::AppError;

/// Creates a read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a JSON input parse error
pub fn input_parse_failed(source_name: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::InputParseFailed {
        source_name: source_name.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AppError {
    AppError::IoError {
        message: message.into(),
    }
}
