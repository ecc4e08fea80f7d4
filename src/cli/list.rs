use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Summarize a saved list response:\n    ollama-params list tags.json\n\n\
                  Summarize the models a running server has installed:\n    \
                  curl -s localhost:11434/api/tags | ollama-params list")]
pub struct ListArgs {
    /// JSON file holding the list response (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}
