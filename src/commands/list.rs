//! List command implementation

use ollama_params::error::Result;
use ollama_params::{ListResponse, ModelInfo};

use crate::cli::{ListArgs, OutputFormat};
use crate::commands::helpers::{parse_json, read_input};
use crate::ui::{formatter, render};

/// Run list command
pub fn run(args: ListArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let list: ListResponse = parse_json(&input)?;

    let models = ModelInfo::from_list(list);
    tracing::debug!(source = %input.source_name, models = models.len(), "listed models");

    println!("{}", render(&models, format, |m| formatter::models_table(m))?);
    Ok(())
}
