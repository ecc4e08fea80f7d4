use clap::Parser;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Parse a saved parameter block:\n    ollama-params parse params.txt\n\n\
                  Parse from stdin:\n    ollama show llama3 --parameters | ollama-params parse\n\n\
                  Fail on the first malformed line:\n    ollama-params parse params.txt --strict\n\n\
                  Emit JSON rows:\n    ollama-params -f json parse params.txt")]
pub struct ParseArgs {
    /// File holding the parameter block (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}
