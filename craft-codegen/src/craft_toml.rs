//! The craft.toml written by `craft init`.

use std::path::{Path, PathBuf};

use craft_config::CONFIG_FILE_NAME;
use craft_core::GeneratedFile;

use crate::paths::defaults;

/// The craft.toml configuration file, spelling out the built-in layout.
pub struct CraftToml;

impl GeneratedFile for CraftToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CONFIG_FILE_NAME)
    }

    fn render(&self) -> eyre::Result<String> {
        Ok(format!(
            r#"# craft configuration. Every key is optional; remove a key to use the default.

# `craft generate module <name>` creates <root>/<name>/ with one file per layer.
[module]
root = "{}"

# `craft generate service <ns>/<name>` writes <root>/<ns>/<name>.go in package <ns>.
# Without a namespace the file goes to <root>/ in `package`.
[service]
root = "{}"
package = "{}"

# `craft generate response <ns>/<name>`, same rules as services.
[response]
root = "{}"
package = "{}"
"#,
            defaults::MODULE_ROOT,
            defaults::SERVICE_ROOT,
            defaults::SERVICE_PACKAGE,
            defaults::RESPONSE_ROOT,
            defaults::RESPONSE_PACKAGE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use craft_config::Config;
    use craft_core::WriteResult;
    use tempfile::TempDir;

    use super::*;
    use crate::Layout;

    #[test]
    fn test_rendered_config_matches_defaults() {
        let content = CraftToml.render().unwrap();
        let config = Config::from_str(&content).unwrap();
        assert_eq!(Layout::from(&config), Layout::default());
    }

    #[test]
    fn test_write_keeps_existing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[service]\nroot = \"pkg/svc\"\n").unwrap();

        assert_eq!(CraftToml.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert!(
            std::fs::read_to_string(&path)
                .unwrap()
                .contains("pkg/svc")
        );
    }
}
