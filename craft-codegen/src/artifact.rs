use std::path::{Path, PathBuf};

use craft_core::GeneratedFile;

use crate::{FieldValues, TargetPath, Template};

/// One template bound to a request's target and field values.
pub struct Artifact<'a> {
    pub template: &'a Template,
    pub target: &'a TargetPath,
    pub values: &'a FieldValues,
}

impl<'a> Artifact<'a> {
    pub fn new(template: &'a Template, target: &'a TargetPath, values: &'a FieldValues) -> Self {
        Self {
            template,
            target,
            values,
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        self.target.file_path(self.template)
    }
}

impl GeneratedFile for Artifact<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> eyre::Result<String> {
        Ok(self.template.render(self.values)?)
    }
}

/// What happened to one file of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    SkippedExisting,
    Failed(String),
}

/// Outcome for one template, with the path it targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOutcome {
    /// Template identifier
    pub template: &'static str,
    /// Path relative to the output directory
    pub path: PathBuf,
    pub outcome: Outcome,
}
