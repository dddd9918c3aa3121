//! Generate operation - render and write one request's files.

use std::path::Path;

use craft_codegen::{ArtifactOutcome, Generator, Kind, Layout};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, PreviewReport};

/// Options for the generate operation.
#[derive(Clone, Copy)]
pub struct GenerateOptions<'a> {
    pub kind: Kind,
    /// Name as given on the command line, e.g. "billing/invoice".
    pub name: &'a str,
    /// Project directory the layout is relative to.
    pub output_dir: &'a Path,
}

/// Execute the generate operation.
///
/// `on_outcome` is called for every file as soon as it has been written or
/// skipped, before the summary report is returned.
pub fn generate(
    layout: &Layout,
    opts: GenerateOptions,
    on_outcome: impl FnMut(&ArtifactOutcome),
) -> Result<GenerateReport> {
    let generator = Generator::new(opts.kind, opts.name, layout)?;
    let generation = generator
        .generate(opts.output_dir, on_outcome)
        .wrap_err_with(|| format!("Failed to generate {} '{}'", opts.kind, opts.name))?;

    Ok(GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        created: generation.created(),
        skipped: generation.skipped(),
        failed: generation.failed(),
        kind: generation.kind,
        name: generation.identifier,
        directory: generation.directory,
    })
}

/// Execute the generate operation without writing anything.
pub fn preview(layout: &Layout, opts: GenerateOptions) -> Result<PreviewReport> {
    let generator = Generator::new(opts.kind, opts.name, layout)?;
    let files = generator
        .preview(opts.output_dir)
        .wrap_err("Failed to render templates")?;

    Ok(PreviewReport {
        output_dir: opts.output_dir.to_path_buf(),
        files,
    })
}
