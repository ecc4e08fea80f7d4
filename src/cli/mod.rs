//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - parse: Parse command arguments
//! - validate: Validate command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - copy: Copy command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};

pub mod completions;
pub mod copy;
pub mod list;
pub mod parse;
pub mod show;
pub mod validate;

pub use completions::CompletionsArgs;
pub use copy::CopyArgs;
pub use list::ListArgs;
pub use parse::ParseArgs;
pub use show::ShowArgs;
pub use validate::ValidateArgs;

/// Output rendering for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human readable rows
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// ollama-params - parse and validate model parameters
///
/// Inspect the parameter blocks a model server reports and check tuning
/// parameters before creating a model from them.
#[derive(Parser, Debug)]
#[command(
    name = "ollama-params",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Parse and validate model server parameter blocks",
    long_about = "ollama-params parses the whitespace-aligned parameter blocks reported by a model \
                  server into ordered key/value rows, and validates tuning parameter mappings \
                  against the set of parameters the server accepts.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ollama-params parse params.txt             \x1b[90m# Show parameter rows\x1b[0m\n   \
                  ollama-params validate params.json         \x1b[90m# Type-check a parameter mapping\x1b[0m\n   \
                  ollama-params list tags.json               \x1b[90m# Summarize installed models\x1b[0m\n   \
                  ollama-params show llama3 show.json        \x1b[90m# Model details from a show response\x1b[0m\n   \
                  ollama-params copy request.json            \x1b[90m# Build a create request body\x1b[0m\n   \
                  ollama-params registry                     \x1b[90m# List accepted parameters\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(
        long,
        short = 'f',
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        env = "OLLAMA_PARAMS_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a parameter block into key/value rows
    Parse(ParseArgs),

    /// Validate and type-cast a JSON parameter mapping
    Validate(ValidateArgs),

    /// Summarize installed models from a list response
    List(ListArgs),

    /// Show model details from a show response
    Show(ShowArgs),

    /// Build a create request from a copy request
    Copy(CopyArgs),

    /// List accepted parameters and their types
    Registry,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_parse() {
        let cli = Cli::try_parse_from(["ollama-params", "parse", "params.txt", "--strict"]).unwrap();
        match cli.command {
            Commands::Parse(args) => {
                assert_eq!(args.file, Some(PathBuf::from("params.txt")));
                assert!(args.strict);
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_cli_parsing_parse_stdin() {
        let cli = Cli::try_parse_from(["ollama-params", "parse"]).unwrap();
        match cli.command {
            Commands::Parse(args) => {
                assert_eq!(args.file, None);
                assert!(!args.strict);
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["ollama-params", "show", "llama3"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.name, "llama3");
                assert_eq!(args.file, None);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["ollama-params", "list", "tags.json"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.file, Some(PathBuf::from("tags.json")));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_show_requires_name() {
        assert!(Cli::try_parse_from(["ollama-params", "show"]).is_err());
    }

    #[test]
    fn test_cli_parsing_registry() {
        let cli = Cli::try_parse_from(["ollama-params", "registry"]).unwrap();
        assert!(matches!(cli.command, Commands::Registry));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["ollama-params", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["ollama-params", "validate", "-v", "-f", "json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_cli_explicit_table_format() {
        let cli = Cli::try_parse_from(["ollama-params", "-f", "table", "copy"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ollama-params", "-f", "xml", "registry"]).is_err());
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["ollama-params", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn test_cli_completions_shell_ignores_case() {
        let cli = Cli::try_parse_from(["ollama-params", "completions", "ZSH"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs {
                shell: clap_complete::Shell::Zsh
            })
        ));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["ollama-params", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
