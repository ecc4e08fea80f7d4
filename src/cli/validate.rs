use clap::Parser;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate a JSON parameter mapping:\n    ollama-params validate params.json\n\n\
                  Validate from stdin:\n    echo '{\"temperature\": \"0.8\", \"stop\": [\"</s>\"]}' | ollama-params validate")]
pub struct ValidateArgs {
    /// JSON file holding the parameter mapping (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}
