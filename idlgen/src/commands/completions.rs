use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to print a completion script for
    shell: Shell,
}

impl CompletionsCommand {
    /// Print the script to stdout, e.g. `idlgen completions zsh > _idlgen`
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        let bin = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, bin, &mut std::io::stdout().lock());
        Ok(())
    }
}
