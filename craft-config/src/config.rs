use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    Error, Result, SourceContext,
    validate::{find_value_span, validate_package, validate_root},
};

/// Default configuration file name, looked up in the output directory.
pub const CONFIG_FILE_NAME: &str = "craft.toml";

/// Root configuration for craft.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings for `generate module`
    #[serde(default)]
    pub module: ModuleConfig,

    /// Settings for `generate service`
    #[serde(default)]
    pub service: LayerConfig,

    /// Settings for `generate response`
    #[serde(default)]
    pub response: LayerConfig,
}

/// `[module]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Directory that holds one subdirectory per module
    pub root: Option<String>,
}

/// `[service]` and `[response]` tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerConfig {
    /// Directory that holds the generated files
    pub root: Option<String>,
    /// Package name used when the identifier has no namespace
    pub package: Option<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a craft.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a craft.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Load the configuration for a project.
    ///
    /// An explicit path must exist. Without one, `<project_dir>/craft.toml` is
    /// read when present and the defaults are used otherwise.
    pub fn load(explicit: Option<&Path>, project_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path(project_dir);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Path of the config file inside a project directory.
    pub fn default_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        check_root(ctx, "module", self.module.root.as_deref())?;
        for (table, layer) in [("service", &self.service), ("response", &self.response)] {
            check_root(ctx, table, layer.root.as_deref())?;
            let Some(package) = layer.package.as_deref() else {
                continue;
            };
            if let Some(reason) = validate_package(package) {
                return Err(ctx.invalid_package_error(
                    table,
                    package,
                    reason,
                    find_value_span(ctx.src(), package),
                ));
            }
        }
        Ok(())
    }
}

fn check_root(ctx: &SourceContext, table: &str, root: Option<&str>) -> Result<()> {
    let Some(root) = root else {
        return Ok(());
    };
    match validate_root(root) {
        Some(reason) => Err(ctx.invalid_root_error(
            table,
            root,
            reason,
            find_value_span(ctx.src(), root),
        )),
        None => Ok(()),
    }
}
