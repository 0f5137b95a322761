use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use idlgen_manifest::{CONFIG_FILE, ProgramFile};

use super::{UnwrapOrExit, generator_options, load_config};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Program dump from the IDL front end (.json or .toml)
    pub program: PathBuf,

    /// Path to idlgen.toml (defaults to ./idlgen.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let file = ProgramFile::open(&self.program).unwrap_or_exit();

        let report = ops::check(file.program(), file.path(), generator_options(&config))?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
