//! Error types and handling for ollama-params
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`parse`]: Parameter block parsing errors
//! - [`validation`]: Parameter validation errors
//! - [`fs`]: Input/output errors raised by the command layer

pub mod fs;
pub mod parse;
pub mod validation;


use miette::Diagnostic;
use thiserror::Error;

/// Error produced by the parameter block parser
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed parameter line {line_number}: '{raw_line}'")]
    #[diagnostic(
        code(ollama_params::parse::malformed_line),
        help("Each line must hold a key and a value separated by whitespace, e.g. `temperature 0.8`")
    )]
    MalformedLine { line_number: usize, raw_line: String },
}

/// Error produced by the parameter validator
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown parameter '{key}'. Allowed parameters: {}", .allowed.join(", "))]
    #[diagnostic(code(ollama_params::validation::unknown_parameter))]
    UnknownParameter { key: String, allowed: Vec<String> },

    #[error("Invalid value for parameter '{key}': {provided} (expected {expected_type})")]
    #[diagnostic(
        code(ollama_params::validation::invalid_value),
        help("Run `ollama-params registry` to list the expected type of every parameter")
    )]
    InvalidValue {
        key: String,
        provided: String,
        expected_type: String,
    },
}

/// Main error type for the ollama-params command line
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    // File system errors
    #[error("Failed to read input: {path}: {reason}")]
    #[diagnostic(code(ollama_params::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to parse JSON input: {source_name}: {reason}")]
    #[diagnostic(
        code(ollama_params::input::parse_failed),
        help("Values must be integers, floats, strings, or arrays of those")
    )]
    InputParseFailed { source_name: String, reason: String },

    #[error("Failed to render output: {reason}")]
    #[diagnostic(code(ollama_params::output::failed))]
    OutputFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ollama_params::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::OutputFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::OutputFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppError>;
