use std::path::PathBuf;

use clap::{Args, Subcommand};
use craft_codegen::{Kind, Layout};
use craft_config::Config;
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{OutcomeLine, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(subcommand)]
    kind: GenerateSubcommand,
}

#[derive(Subcommand)]
enum GenerateSubcommand {
    /// Create a module with service, controller, dto, wire and middleware files
    #[command(visible_alias = "mod")]
    Module(GenerateArgs),

    /// Create a service file
    Service(GenerateArgs),

    /// Create a response file
    Response(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Name to generate (use / for namespaces, e.g., "billing/invoice")
    name: String,

    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Path to craft.toml (defaults to <output>/craft.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        match &self.kind {
            GenerateSubcommand::Module(args) => args.run(Kind::Module),
            GenerateSubcommand::Service(args) => args.run(Kind::Service),
            GenerateSubcommand::Response(args) => args.run(Kind::Response),
        }
    }
}

impl GenerateArgs {
    fn run(&self, kind: Kind) -> Result<()> {
        let config = Config::load(self.config.as_deref(), &self.output).unwrap_or_exit();
        let layout = Layout::from(&config);
        let opts = GenerateOptions {
            kind,
            name: &self.name,
            output_dir: &self.output,
        };
        let mut out = TerminalOutput::new();

        if self.dry_run {
            ops::preview(&layout, opts)?.render(&mut out);
            return Ok(());
        }

        let report = ops::generate(&layout, opts, |outcome| {
            OutcomeLine::new(&self.output, outcome).render(&mut out);
        })?;
        report.render(&mut out);

        if report.all_failed() {
            bail!("no files were written for {} '{}'", kind, self.name);
        }

        Ok(())
    }
}
