//! Command helper utilities

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use ollama_params::error::Result;
use ollama_params::error::fs::{input_parse_failed, read_failed};

/// Name used for stdin in messages
pub const STDIN_NAME: &str = "<stdin>";

/// Input text together with a printable name of where it came from
#[derive(Debug)]
pub struct Input {
    pub source_name: String,
    pub content: String,
}

/// Read the whole input from `file`, or from stdin when it is absent or `-`.
pub fn read_input(file: Option<&Path>) -> Result<Input> {
    match file {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => read_from(std::io::stdin().lock(), STDIN_NAME),
    }
}

fn read_file(path: &Path) -> Result<Input> {
    let source_name = path.display().to_string();
    tracing::debug!(path = %source_name, "reading input file");

    let content =
        std::fs::read_to_string(path).map_err(|e| read_failed(&source_name, e.to_string()))?;

    Ok(Input {
        source_name,
        content,
    })
}

/// Read everything from `reader`, naming it `source_name` in errors.
pub fn read_from(mut reader: impl Read, source_name: &str) -> Result<Input> {
    tracing::debug!(source = source_name, "reading input stream");

    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| read_failed(source_name, e.to_string()))?;

    Ok(Input {
        source_name: source_name.to_string(),
        content,
    })
}

/// Deserialize JSON input, reporting failures against the input's name.
pub fn parse_json<T: DeserializeOwned>(input: &Input) -> Result<T> {
    serde_json::from_str(&input.content)
        .map_err(|e| input_parse_failed(&input.source_name, e.to_string()))
}
