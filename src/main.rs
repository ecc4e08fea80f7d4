//! ollama-params - command line front end
//!
//! Parses model server parameter blocks and validates tuning parameters
//! before they are sent to the server.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let format = cli.format;
    let result = match cli.command {
        Commands::Parse(args) => commands::parse::run(args, format),
        Commands::Validate(args) => commands::validate::run(args, format),
        Commands::List(args) => commands::list::run(args, format),
        Commands::Show(args) => commands::show::run(args, format),
        Commands::Copy(args) => commands::copy::run(args, format),
        Commands::Registry => commands::registry::run(format),
        Commands::Version => commands::version::run(format),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
