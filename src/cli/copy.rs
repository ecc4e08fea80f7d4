use clap::Parser;
use std::path::PathBuf;

/// Arguments for the copy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build a create request from a copy request:\n    ollama-params copy request.json\n\n\
                  Request format:\n    \
                  {\"model\": \"my-llama\", \"base\": \"llama3\", \"parameters\": {\"temperature\": 0.2}}")]
pub struct CopyArgs {
    /// JSON file holding the copy request (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}
