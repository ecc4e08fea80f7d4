//! Parameter validation
//!
//! Checks a caller-supplied mapping against a [`ParameterRegistry`] and casts
//! every value to the type the registry declares. Validation is all-or-nothing:
//! the first unknown name or uncastable value fails the whole mapping.
//!
//! A sequence-capable parameter given a bare scalar keeps it as a scalar. It is
//! never wrapped into a one-element sequence.

use crate::error::ValidationError;
use crate::error::validation::{invalid_value, unknown_parameter};
use crate::registry::{ParameterDefinition, ParameterRegistry};
use crate::value::{ParamValue, ParameterInput, ValidatedParameters, ValidatedValue};

/// Validate `input` against `registry`, preserving input order.
pub fn validate(
    input: &ParameterInput,
    registry: &ParameterRegistry,
) -> Result<ValidatedParameters, ValidationError> {
    let mut validated = ValidatedParameters::new();

    for (key, value) in input.iter() {
        let definition = registry
            .get(key)
            .ok_or_else(|| unknown_parameter(key, registry.names()))?;
        validated.insert(key.clone(), cast_value(definition, value)?);
    }

    Ok(validated)
}

fn cast_value(
    definition: &ParameterDefinition,
    value: &ParamValue,
) -> Result<ValidatedValue, ValidationError> {
    let invalid = || {
        invalid_value(
            definition.name.as_str(),
            value.to_string(),
            definition.expected_type(),
        )
    };

    match value {
        ParamValue::Sequence(items) if definition.allows_sequence => items
            .iter()
            .map(|item| definition.primitive.cast(item))
            .collect::<Option<Vec<_>>>()
            .map(ValidatedValue::Sequence)
            .ok_or_else(invalid),
        scalar => definition.primitive.cast(scalar).ok_or_else(invalid),
    }
}
