//! ollama-params - parameter block parsing and validation
//!
//! Two independent, pure stages used by the model manager:
//! - [`block`] turns the aligned `parameters` text returned by the model server
//!   into ordered key/value rows
//! - [`validate`] checks a caller-supplied parameter mapping against the
//!   [`ParameterRegistry`] and casts every value to its declared type
//!
//! ```rust
//! use ollama_params::{ParameterInput, ValidatedValue, parse_parameter_block, validate_parameters};
//!
//! let rows = parse_parameter_block("seed    42\nstop    \"</s>\"").unwrap();
//! assert_eq!(rows[0].value, "42");
//!
//! let input: ParameterInput = serde_json::from_str(r#"{"temperature": "0.8"}"#).unwrap();
//! let validated = validate_parameters(&input).unwrap();
//! assert_eq!(validated.get("temperature"), Some(&ValidatedValue::Float(0.8)));
//! ```

pub mod block;
pub mod error;
pub mod model;
pub mod registry;
pub mod validate;
pub mod value;

pub use block::{LenientParse, MalformedLinePolicy, ParsedBlock, RawPair};
pub use error::{AppError, ParseError, ValidationError};
pub use model::{
    CopyModelRequest, CreateModelRequest, ListResponse, ListedModel, ModelDetail, ModelInfo,
    ShowResponse,
};
pub use registry::{ParameterDefinition, ParameterRegistry, Primitive};
pub use value::{ParamValue, ParameterInput, ValidatedParameters, ValidatedValue};

/// Parse a parameter block, failing on the first malformed line.
///
/// Use [`block::parse_lenient`] to skip malformed lines instead.
pub fn parse_parameter_block(raw_text: &str) -> Result<ParsedBlock, ParseError> {
    block::parse(raw_text)
}

/// Validate `input` against the built-in parameter registry.
pub fn validate_parameters(input: &ParameterInput) -> Result<ValidatedParameters, ValidationError> {
    validate::validate(input, ParameterRegistry::builtin())
}
