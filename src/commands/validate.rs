//! Validate command implementation

use ollama_params::error::Result;
use ollama_params::validate::validate;
use ollama_params::{ParameterInput, ParameterRegistry};

use crate::cli::{OutputFormat, ValidateArgs};
use crate::commands::helpers::{parse_json, read_input};
use crate::ui::{formatter, render};

/// Run validate command
pub fn run(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let parameters: ParameterInput = parse_json(&input)?;

    let validated = validate(&parameters, ParameterRegistry::builtin())?;
    tracing::info!(
        source = %input.source_name,
        parameters = validated.len(),
        "parameters validated"
    );

    println!(
        "{}",
        render(&validated, format, formatter::validated_table)?
    );
    Ok(())
}
