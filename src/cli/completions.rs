use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ollama-params completions bash > ~/.bash_completion.d/ollama-params\n\n\
                  Generate zsh completions:\n    ollama-params completions zsh > ~/.zfunc/_ollama-params\n\n\
                  Generate fish completions:\n    ollama-params completions fish > ~/.config/fish/completions/ollama-params.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
