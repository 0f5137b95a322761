use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use idlgen_manifest::{CONFIG_FILE, ProgramFile};

use super::{UnwrapOrExit, generator_options, load_config};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Program dump from the IDL front end (.json or .toml)
    pub program: PathBuf,

    /// Path to idlgen.toml (defaults to ./idlgen.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides generator.out_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the handler stub file (overrides generator.impl_stub)
    #[arg(long)]
    pub no_impl_stub: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let file = ProgramFile::open(&self.program).unwrap_or_exit();

        let mut generator = generator_options(&config);
        if self.no_impl_stub {
            generator.impl_stub = false;
        }
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.generator.out_dir.clone());

        tracing::info!(
            program = %file.path().display(),
            output = %output_dir.display(),
            dry_run = self.dry_run,
            "generating"
        );

        let report = ops::generate(
            file.program(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                generator,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
