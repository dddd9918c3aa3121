//! Init operation - write a default craft.toml.

use std::path::Path;

use craft_codegen::CraftToml;
use craft_core::{GeneratedFile, WriteResult};
use eyre::{Context, Result};

use crate::reports::InitReport;

/// Execute the init operation.
///
/// Creates the project directory if needed and writes craft.toml unless one
/// already exists.
pub fn init(output_dir: &Path) -> Result<InitReport> {
    std::fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create directory {}", output_dir.display()))?;

    let result = CraftToml.write(output_dir)?;

    Ok(InitReport {
        path: CraftToml.path(output_dir),
        created: result == WriteResult::Written,
    })
}

#[cfg(test)]
mod tests {
    use craft_codegen::Layout;
    use craft_config::Config;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("shop");

        let report = init(&project).unwrap();

        assert!(report.created);
        assert_eq!(report.path, project.join("craft.toml"));
        let config = Config::load(None, &project).unwrap();
        assert_eq!(Layout::from(&config), Layout::default());
    }

    #[test]
    fn test_init_twice_keeps_first_file() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();

        let report = init(temp.path()).unwrap();

        assert!(!report.created);
    }
}
