//! Version command implementation

use serde::Serialize;

use ollama_params::ParameterRegistry;
use ollama_params::error::Result;

use crate::cli::OutputFormat;
use crate::ui::render;

/// What the binary was built from
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub minimum_rust_version: &'static str,
    pub profile: &'static str,
    pub known_parameters: usize,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            // Declared MSRV, not the compiler that produced this binary
            minimum_rust_version: env!("CARGO_PKG_RUST_VERSION"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
            known_parameters: ParameterRegistry::builtin().len(),
        }
    }
}

fn build_info_table(info: &BuildInfo) -> String {
    [
        format!("ollama-params {}", info.version),
        String::new(),
        "Build info:".to_string(),
        format!("  Minimum Rust version: {}", info.minimum_rust_version),
        format!("  Profile: {}", info.profile),
        format!("  Known parameters: {}", info.known_parameters),
    ]
    .join("\n")
}

/// Run version command
pub fn run(format: OutputFormat) -> Result<()> {
    println!(
        "{}",
        render(&BuildInfo::current(), format, build_info_table)?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_table_labels_msrv() {
        let table = build_info_table(&BuildInfo::current());
        assert!(table.contains("Minimum Rust version: 1.85"));
        assert!(!table.contains("  Rust version"));
        assert!(table.contains("Known parameters: 13"));
    }
}
