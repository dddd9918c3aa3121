//! Generate command report data structures.

use std::path::{Path, PathBuf};

use craft_codegen::{ArtifactOutcome, Kind, Outcome, PreviewFile};

use super::{
    display_path,
    output::{Output, Report},
};

/// One line per file, rendered as soon as the file is handled.
pub struct OutcomeLine<'a> {
    output_dir: &'a Path,
    outcome: &'a ArtifactOutcome,
}

impl<'a> OutcomeLine<'a> {
    pub fn new(output_dir: &'a Path, outcome: &'a ArtifactOutcome) -> Self {
        Self { output_dir, outcome }
    }
}

impl Report for OutcomeLine<'_> {
    fn render(&self, out: &mut dyn Output) {
        let path = display_path(self.output_dir, &self.outcome.path);
        match &self.outcome.outcome {
            Outcome::Created => out.added_item(&path.display().to_string()),
            Outcome::SkippedExisting => {
                out.warning(&format!("{} already exists, skipping", path.display()))
            }
            Outcome::Failed(reason) => {
                out.error(&format!("failed to write {}: {}", path.display(), reason))
            }
        }
    }
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project directory.
    pub output_dir: PathBuf,
    pub kind: Kind,
    /// Name as given on the command line.
    pub name: String,
    /// Target directory relative to the project directory.
    pub directory: PathBuf,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl GenerateReport {
    /// Whether every file of the request failed.
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.created == 0 && self.skipped == 0
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let dir = display_path(&self.output_dir, &self.directory);
        let summary = if self.all_failed() {
            format!(
                "{} '{}' was not generated ({} failed)",
                self.kind, self.name, self.failed
            )
        } else if self.failed > 0 {
            format!(
                "{} '{}' partially generated in {} ({} created, {} skipped, {} failed)",
                self.kind,
                self.name,
                dir.display(),
                self.created,
                self.skipped,
                self.failed
            )
        } else {
            format!(
                "{} '{}' generated in {} ({} created, {} skipped)",
                self.kind,
                self.name,
                dir.display(),
                self.created,
                self.skipped
            )
        };
        out.preformatted(&summary);
    }
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    /// Project directory.
    pub output_dir: PathBuf,
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            let path = display_path(&self.output_dir, &file.path);
            if file.exists {
                out.divider(&format!("{} (exists, would be skipped)", path.display()));
            } else {
                out.divider(&path.display().to_string());
            }
            out.preformatted(&file.content);
        }

        let skipped = self.files.iter().filter(|f| f.exists).count();
        out.divider("Summary");
        out.key_value("Would create", &(self.files.len() - skipped).to_string());
        out.key_value("Would skip", &skipped.to_string());
    }
}
