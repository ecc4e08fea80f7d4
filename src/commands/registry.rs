//! Registry command implementation

use ollama_params::ParameterRegistry;
use ollama_params::error::Result;

use crate::cli::OutputFormat;
use crate::ui::{formatter, render};

/// Run registry command
pub fn run(format: OutputFormat) -> Result<()> {
    let registry = ParameterRegistry::builtin();
    println!(
        "{}",
        render(registry.all(), format, |_| formatter::registry_table(registry))?
    );
    Ok(())
}
