//! Parse command implementation
//!
//! Reads a parameter block and prints its rows. Malformed lines are skipped
//! with a warning unless `--strict` is given.

use ollama_params::block::{self, MalformedLinePolicy};
use ollama_params::error::Result;

use crate::cli::{OutputFormat, ParseArgs};
use crate::commands::helpers::read_input;
use crate::ui::{formatter, render};

/// Run parse command
pub fn run(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(args.file.as_deref())?;

    let policy = if args.strict {
        MalformedLinePolicy::Abort
    } else {
        MalformedLinePolicy::Skip
    };

    let parsed = block::parse_with(&input.content, policy)?;
    for skipped in &parsed.skipped {
        tracing::warn!(source = %input.source_name, "skipping {skipped}");
    }
    tracing::info!(
        source = %input.source_name,
        pairs = parsed.pairs.len(),
        skipped = parsed.skipped.len(),
        "parsed parameter block"
    );

    println!(
        "{}",
        render(&parsed.pairs, format, |pairs| formatter::pairs_table(pairs))?
    );
    Ok(())
}
