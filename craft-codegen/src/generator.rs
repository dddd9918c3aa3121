use std::path::{Path, PathBuf};

use craft_core::{GeneratedFile, TokenSet, WriteResult};

use crate::{
    Artifact, ArtifactOutcome, Error, FieldValues, Identifier, Kind, Layout, Outcome, Result,
    TargetPath, Template, templates::bundle,
};

/// Generator for one request.
///
/// Names, target directory and field values are computed once in
/// [`Generator::new`] and shared by every template of the bundle, so the
/// generated files always agree on type and constructor names.
#[derive(Debug)]
pub struct Generator {
    kind: Kind,
    identifier: Identifier,
    tokens: TokenSet,
    target: TargetPath,
    values: FieldValues,
}

impl Generator {
    pub fn new(kind: Kind, name: &str, layout: &Layout) -> Result<Self> {
        let identifier = Identifier::parse(name)?;
        let tokens = TokenSet::new(identifier.leaf());
        let target = layout.compose(kind, &identifier, &tokens);
        let values = FieldValues::new(&target, &tokens);

        Ok(Self {
            kind,
            identifier,
            tokens,
            target,
            values,
        })
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn target(&self) -> &TargetPath {
        &self.target
    }

    /// Templates rendered for this request, in report order.
    pub fn templates(&self) -> &'static [Template] {
        bundle(self.kind)
    }

    /// Render every file without touching the file system.
    pub fn preview(&self, output_dir: &Path) -> Result<Vec<PreviewFile>> {
        self.templates()
            .iter()
            .map(|template| {
                let artifact = Artifact::new(template, &self.target, &self.values);
                Ok(PreviewFile {
                    path: artifact.relative_path(),
                    content: template.render(&self.values)?,
                    exists: artifact.path(output_dir).exists(),
                })
            })
            .collect()
    }

    /// Create the target directory and write every missing file.
    ///
    /// `on_outcome` sees each file's outcome as soon as it is known. Failing
    /// to create the directory aborts before any file is touched; a failure
    /// on one file does not stop the others.
    pub fn generate(
        &self,
        output_dir: &Path,
        on_outcome: impl FnMut(&ArtifactOutcome),
    ) -> Result<Generation> {
        let directory = output_dir.join(&self.target.directory);
        std::fs::create_dir_all(&directory).map_err(|source| Error::DirectoryCreation {
            path: directory.clone(),
            source,
        })?;

        let outcomes = write_artifacts(
            output_dir,
            self.templates(),
            &self.target,
            &self.values,
            on_outcome,
        );

        Ok(Generation {
            kind: self.kind,
            identifier: self.identifier.to_string(),
            directory: self.target.directory.clone(),
            outcomes,
        })
    }
}

fn write_artifacts(
    output_dir: &Path,
    templates: &[Template],
    target: &TargetPath,
    values: &FieldValues,
    mut on_outcome: impl FnMut(&ArtifactOutcome),
) -> Vec<ArtifactOutcome> {
    templates
        .iter()
        .map(|template| {
            let artifact = Artifact::new(template, target, values);
            let outcome = match artifact.write(output_dir) {
                Ok(WriteResult::Written) => Outcome::Created,
                Ok(WriteResult::Skipped) => Outcome::SkippedExisting,
                Err(e) => Outcome::Failed(format!("{e:#}")),
            };
            let result = ArtifactOutcome {
                template: template.name,
                path: artifact.relative_path(),
                outcome,
            };
            on_outcome(&result);
            result
        })
        .collect()
}

/// Summary of a finished request.
#[derive(Debug)]
pub struct Generation {
    pub kind: Kind,
    pub identifier: String,
    /// Target directory relative to the output directory
    pub directory: PathBuf,
    pub outcomes: Vec<ArtifactOutcome>,
}

impl Generation {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::SkippedExisting))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    /// Whether files were attempted and every one of them failed.
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == self.outcomes.len()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }
}

/// A rendered file in dry-run mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub content: String,
    /// Whether a real run would skip this file
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{Field, FileName};

    fn generate(kind: Kind, name: &str, dir: &Path) -> Generation {
        Generator::new(kind, name, &Layout::default())
            .unwrap()
            .generate(dir, |_| {})
            .unwrap()
    }

    #[test]
    fn test_module_creates_five_files() {
        let temp = TempDir::new().unwrap();
        let generation = generate(Kind::Module, "order", temp.path());

        assert_eq!(generation.directory, Path::new("internal/module/order"));
        assert_eq!(generation.created(), 5);

        let dir = temp.path().join("internal/module/order");
        for file in [
            "service.go",
            "controller.go",
            "dto.go",
            "wire.go",
            "middleware.go",
        ] {
            let content = fs::read_to_string(dir.join(file)).unwrap();
            assert!(content.contains("package order\n"), "{file}");
            assert!(content.contains("Order"), "{file}");
        }

        let controller = fs::read_to_string(dir.join("controller.go")).unwrap();
        assert!(controller.contains("orderService OrderService"));
        let wire = fs::read_to_string(dir.join("wire.go")).unwrap();
        assert!(wire.contains("NewOrderService,"));
        assert!(wire.contains("NewOrderController,"));
        assert!(wire.contains("NewOrderMiddleware,"));
    }

    #[test]
    fn test_namespaced_service() {
        let temp = TempDir::new().unwrap();
        let generation = generate(Kind::Service, "billing/invoice", temp.path());

        assert_eq!(generation.outcomes.len(), 1);
        assert_eq!(
            generation.outcomes[0].path,
            Path::new("app/services/billing/invoice.go")
        );
        let content =
            fs::read_to_string(temp.path().join("app/services/billing/invoice.go")).unwrap();
        assert!(content.starts_with("package billing\n"));
        assert!(content.contains("type Invoice interface"));
        assert!(content.contains("type invoice struct"));
        assert!(content.contains("func NewInvoice(orm orm.Orm) Invoice"));
    }

    #[test]
    fn test_response_without_namespace() {
        let temp = TempDir::new().unwrap();
        generate(Kind::Response, "invoice", temp.path());

        let content =
            fs::read_to_string(temp.path().join("app/http/responses/invoice.go")).unwrap();
        assert_eq!(
            content,
            "package responses\n\ntype Invoice struct {\n\tName string\n}\n"
        );
    }

    #[test]
    fn test_second_run_skips_everything() {
        let temp = TempDir::new().unwrap();
        generate(Kind::Module, "order", temp.path());

        let service = temp.path().join("internal/module/order/service.go");
        fs::write(&service, "// edited by hand\n").unwrap();

        let second = generate(Kind::Module, "order", temp.path());

        assert_eq!(second.skipped(), 5);
        assert!(
            second
                .outcomes
                .iter()
                .all(|o| o.outcome == Outcome::SkippedExisting)
        );
        assert_eq!(fs::read_to_string(&service).unwrap(), "// edited by hand\n");
        assert!(!second.all_failed());
    }

    #[test]
    fn test_missing_files_are_filled_in() {
        let temp = TempDir::new().unwrap();
        generate(Kind::Module, "order", temp.path());
        fs::remove_file(temp.path().join("internal/module/order/dto.go")).unwrap();

        let second = generate(Kind::Module, "order", temp.path());

        assert_eq!(second.created(), 1);
        assert_eq!(second.skipped(), 4);
        assert_eq!(second.outcomes[2].template, "dto.go");
        assert_eq!(second.outcomes[2].outcome, Outcome::Created);
    }

    #[test]
    fn test_directory_creation_failure_writes_nothing() {
        let temp = TempDir::new().unwrap();
        // A regular file where the module root directory should be.
        fs::write(temp.path().join("internal"), "").unwrap();

        let generator = Generator::new(Kind::Module, "order", &Layout::default()).unwrap();
        let mut seen = 0;
        let err = generator.generate(temp.path(), |_| seen += 1).unwrap_err();

        assert!(matches!(err, Error::DirectoryCreation { .. }));
        assert_eq!(seen, 0);
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(temp.path().join("internal").is_file());
    }

    #[test]
    fn test_invalid_name_is_rejected_before_generation() {
        let err = Generator::new(Kind::Service, "billing/", &Layout::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_outcomes_are_reported_in_bundle_order() {
        let temp = TempDir::new().unwrap();
        let generator = Generator::new(Kind::Module, "order", &Layout::default()).unwrap();

        let mut seen = Vec::new();
        generator
            .generate(temp.path(), |o| seen.push(o.template))
            .unwrap();

        assert_eq!(
            seen,
            [
                "service.go",
                "controller.go",
                "dto.go",
                "wire.go",
                "middleware.go"
            ]
        );
    }

    #[test]
    fn test_failed_template_does_not_stop_siblings() {
        const BROKEN: Template = Template {
            name: "broken.go",
            file_name: FileName::Fixed("broken.go"),
            fields: &[Field::PackageName],
            body: "package {{PackageName}}\n\ntype {{TypeName}} struct{}\n",
        };
        const GOOD: Template = Template {
            name: "good.go",
            file_name: FileName::Fixed("good.go"),
            fields: &[Field::PackageName],
            body: "package {{PackageName}}\n",
        };

        let temp = TempDir::new().unwrap();
        let generator = Generator::new(Kind::Module, "order", &Layout::default()).unwrap();
        fs::create_dir_all(temp.path().join(&generator.target().directory)).unwrap();

        let outcomes = write_artifacts(
            temp.path(),
            &[BROKEN, GOOD],
            generator.target(),
            &generator.values,
            |_| {},
        );

        assert!(matches!(&outcomes[0].outcome, Outcome::Failed(reason) if reason.contains("TypeName")));
        assert_eq!(outcomes[1].outcome, Outcome::Created);

        let dir = temp.path().join("internal/module/order");
        assert!(!dir.join("broken.go").exists());
        assert_eq!(
            fs::read_to_string(dir.join("good.go")).unwrap(),
            "package order\n"
        );
    }

    #[test]
    fn test_all_failed() {
        let outcome = |outcome| ArtifactOutcome {
            template: "service",
            path: PathBuf::from("app/services/invoice.go"),
            outcome,
        };
        let generation = |outcomes| Generation {
            kind: Kind::Service,
            identifier: "invoice".to_string(),
            directory: PathBuf::from("app/services"),
            outcomes,
        };

        assert!(generation(vec![outcome(Outcome::Failed("disk full".into()))]).all_failed());
        assert!(!generation(vec![outcome(Outcome::Created)]).all_failed());
        assert!(!generation(vec![outcome(Outcome::SkippedExisting)]).all_failed());
        assert!(!generation(vec![]).all_failed());
    }

    #[test]
    fn test_preview_does_not_touch_disk() {
        let temp = TempDir::new().unwrap();
        let generator = Generator::new(Kind::Service, "billing/invoice", &Layout::default()).unwrap();

        let files = generator.preview(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, Path::new("app/services/billing/invoice.go"));
        assert!(files[0].content.starts_with("package billing\n"));
        assert!(!files[0].exists);
        assert!(!temp.path().join("app").exists());
    }

    #[test]
    fn test_preview_marks_existing_files() {
        let temp = TempDir::new().unwrap();
        generate(Kind::Response, "invoice", temp.path());

        let generator = Generator::new(Kind::Response, "invoice", &Layout::default()).unwrap();
        let files = generator.preview(temp.path()).unwrap();

        assert!(files[0].exists);
    }
}
