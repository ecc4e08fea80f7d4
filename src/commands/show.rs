//! Show command implementation
//!
//! Builds the model detail view from a saved show response.

use ollama_params::error::Result;
use ollama_params::{ModelDetail, ShowResponse};

use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::helpers::{parse_json, read_input};
use crate::ui::{formatter, render};

/// Run show command
pub fn run(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let show: ShowResponse = parse_json(&input)?;

    let (detail, skipped) = ModelDetail::from_show(args.name, show);
    for err in &skipped {
        tracing::warn!(model = %detail.name, "skipping {err}");
    }
    tracing::debug!(
        model = %detail.name,
        parameters = detail.parameters.len(),
        "built model detail"
    );

    println!("{}", render(&detail, format, formatter::detail_table)?);
    Ok(())
}
