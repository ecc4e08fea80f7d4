//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use ollama_params::error::Result;

const BIN_NAME: &str = "ollama-params";

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut impl Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    tracing::debug!(shell = %args.shell, "generating completions");
    write_completions(args.shell, &mut std::io::stdout().lock());
    Ok(())
}
