use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.output).wrap_err("Failed to write craft.toml")?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
