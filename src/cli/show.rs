use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show details from a saved show response:\n    ollama-params show llama3 show.json\n\n\
                  Show details piped from the server:\n    \
                  curl -s localhost:11434/api/show -d '{\"model\":\"llama3\"}' | ollama-params show llama3")]
pub struct ShowArgs {
    /// Model name the show response belongs to
    pub name: String,

    /// JSON file holding the show response (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}
