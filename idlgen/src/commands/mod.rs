mod check;
mod completions;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use idlgen_codegen::Indent;
use idlgen_codegen_julia::GeneratorOptions;
use idlgen_manifest::Config;

/// Extension trait for exiting on loader errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for idlgen_manifest::Result<T> {
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
#[command(name = "idlgen")]
#[command(version)]
#[command(about = "Generate Julia Thrift.jl modules from resolved IDL programs")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Julia module from a program dump
    Generate(GenerateCommand),

    /// Run a generation pass without writing files and report diagnostics
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Load `idlgen.toml`, falling back to defaults when it does not exist.
pub(crate) fn load_config(path: &Path) -> Config {
    Config::load_or_default(path).unwrap_or_exit()
}

/// Generator options from the `[generator]` table.
pub(crate) fn generator_options(config: &Config) -> GeneratorOptions {
    GeneratorOptions {
        indent: Indent::Spaces(config.generator.indent),
        impl_stub: config.generator.impl_stub,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generator_options_from_config() {
        let config = Config::parse("[generator]\nindent = 2\nimpl_stub = false\n", "idlgen.toml").unwrap();
        let options = generator_options(&config);
        assert_eq!(options.indent, Indent::Spaces(2));
        assert!(!options.impl_stub);
    }

    #[test]
    fn test_verbosity_is_global() {
        let cli = Cli::try_parse_from(["idlgen", "check", "tutorial.json", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
