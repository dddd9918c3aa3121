mod completions;
mod generate;
mod init;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for craft_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "craft")]
#[command(version)]
#[command(about = "Generate services, responses and modules for Go projects")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate boilerplate files from a name
    #[command(visible_aliases = ["g", "make"])]
    Generate(GenerateCommand),

    /// Write a craft.toml with the default layout
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_aliases_parse() {
        for args in [
            ["craft", "generate", "module", "order"],
            ["craft", "g", "mod", "order"],
            ["craft", "make", "service", "billing/invoice"],
            ["craft", "generate", "response", "invoice"],
        ] {
            assert!(Cli::try_parse_from(args).is_ok(), "failed to parse {args:?}");
        }
    }

    #[test]
    fn test_generate_requires_exactly_one_name() {
        assert!(Cli::try_parse_from(["craft", "generate", "service"]).is_err());
        assert!(Cli::try_parse_from(["craft", "generate", "service", "a", "b"]).is_err());
    }
}
