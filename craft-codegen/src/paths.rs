//! Directory layout for generated files.
//!
//! This module centralizes the per-kind roots and package names, and composes
//! the target directory for a request.

use std::path::{Path, PathBuf};

use craft_config::Config;
use craft_core::TokenSet;

use crate::{FileName, Identifier, Kind, Template};

/// Built-in layout used when craft.toml does not override it.
pub mod defaults {
    /// Module directories, one per leaf name.
    pub const MODULE_ROOT: &str = "internal/module";

    /// Service files.
    pub const SERVICE_ROOT: &str = "app/services";

    /// Response files.
    pub const RESPONSE_ROOT: &str = "app/http/responses";

    /// Package of a service generated without a namespace.
    pub const SERVICE_PACKAGE: &str = "services";

    /// Package of a response generated without a namespace.
    pub const RESPONSE_PACKAGE: &str = "responses";

    /// File extension for generated Go sources.
    pub const FILE_EXTENSION: &str = "go";
}

/// Per-kind roots and fallback package names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub module_root: PathBuf,
    pub service_root: PathBuf,
    pub service_package: String,
    pub response_root: PathBuf,
    pub response_package: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            module_root: PathBuf::from(defaults::MODULE_ROOT),
            service_root: PathBuf::from(defaults::SERVICE_ROOT),
            service_package: defaults::SERVICE_PACKAGE.to_string(),
            response_root: PathBuf::from(defaults::RESPONSE_ROOT),
            response_package: defaults::RESPONSE_PACKAGE.to_string(),
        }
    }
}

impl From<&Config> for Layout {
    fn from(config: &Config) -> Self {
        let base = Self::default();
        Self {
            module_root: config
                .module
                .root
                .as_deref()
                .map_or(base.module_root, PathBuf::from),
            service_root: config
                .service
                .root
                .as_deref()
                .map_or(base.service_root, PathBuf::from),
            service_package: config
                .service
                .package
                .clone()
                .unwrap_or(base.service_package),
            response_root: config
                .response
                .root
                .as_deref()
                .map_or(base.response_root, PathBuf::from),
            response_package: config
                .response
                .package
                .clone()
                .unwrap_or(base.response_package),
        }
    }
}

impl Layout {
    /// Root directory for a kind.
    pub fn root(&self, kind: Kind) -> &Path {
        match kind {
            Kind::Module => &self.module_root,
            Kind::Service => &self.service_root,
            Kind::Response => &self.response_root,
        }
    }

    /// Compose the target directory and package for a request.
    ///
    /// Modules get their own directory named after the leaf and always use
    /// the lower-cased leaf as package. Services and responses are written
    /// straight into the namespace directory and take the closest namespace
    /// segment as package, falling back to the configured default.
    pub fn compose(&self, kind: Kind, identifier: &Identifier, tokens: &TokenSet) -> TargetPath {
        let mut directory = self.root(kind).to_path_buf();
        directory.extend(identifier.namespace());

        let package = match kind {
            Kind::Module => {
                directory.push(identifier.leaf());
                tokens.package_name().to_string()
            }
            Kind::Service => namespace_package(identifier, &self.service_package),
            Kind::Response => namespace_package(identifier, &self.response_package),
        };

        TargetPath {
            directory,
            package,
            file_stem: tokens.file_base_name().to_string(),
        }
    }
}

fn namespace_package(identifier: &Identifier, fallback: &str) -> String {
    identifier
        .namespace()
        .last()
        .map_or_else(|| fallback.to_string(), Clone::clone)
}

/// Where a request's files go, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    /// Directory that holds every file of the request
    pub directory: PathBuf,
    /// Effective Go package name of the generated files
    pub package: String,
    /// snake_case stem for derived file names
    pub file_stem: String,
}

impl TargetPath {
    /// File name a template is written to.
    pub fn file_name(&self, template: &Template) -> String {
        match template.file_name {
            FileName::Fixed(name) => name.to_string(),
            FileName::Derived => format!("{}.{}", self.file_stem, defaults::FILE_EXTENSION),
        }
    }

    /// Path a template is written to.
    pub fn file_path(&self, template: &Template) -> PathBuf {
        self.directory.join(self.file_name(template))
    }
}
