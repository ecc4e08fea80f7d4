//! Copy command implementation
//!
//! Validates the parameters of a copy request and prints the body of the
//! matching create call.

use ollama_params::error::Result;
use ollama_params::{CopyModelRequest, ParameterRegistry};

use crate::cli::{CopyArgs, OutputFormat};
use crate::commands::helpers::{parse_json, read_input};
use crate::ui::{formatter, render};

/// Run copy command
pub fn run(args: CopyArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let request: CopyModelRequest = parse_json(&input)?;

    tracing::info!(
        model = %request.model,
        base = request.base.as_deref().unwrap_or("-"),
        "building create request"
    );
    let create = request.into_create_request(ParameterRegistry::builtin())?;

    println!(
        "{}",
        render(&create, format, formatter::create_request_table)?
    );
    Ok(())
}
