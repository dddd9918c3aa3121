use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file.
///
/// Generated files are stubs meant to be edited by hand, so writing never
/// replaces an existing file.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file to disk unless something already exists at its path.
    ///
    /// The parent directory must already exist.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if path.exists() {
            return Ok(WriteResult::Skipped);
        }

        let content = self.render()?;
        match write_new_file(&path, &content) {
            Ok(()) => Ok(WriteResult::Written),
            // Lost the race against another writer between the check and the open.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(WriteResult::Skipped),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to write {}", path.display())),
        }
    }
}

fn write_new_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Stub {
        name: &'static str,
        content: Result<&'static str, &'static str>,
    }

    impl GeneratedFile for Stub {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn render(&self) -> Result<String> {
            self.content
                .map(str::to_string)
                .map_err(|msg| eyre::eyre!(msg))
        }
    }

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let stub = Stub {
            name: "test.go",
            content: Ok("package test\n"),
        };

        let result = stub.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("test.go")).unwrap(),
            "package test\n"
        );
    }

    #[test]
    fn test_write_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.go");
        fs::write(&path, "hand edited").unwrap();

        let stub = Stub {
            name: "existing.go",
            content: Ok("should not write"),
        };
        let result = stub.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited");
    }

    #[test]
    fn test_write_skips_existing_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("taken.go")).unwrap();

        let stub = Stub {
            name: "taken.go",
            content: Ok("package taken\n"),
        };

        assert_eq!(stub.write(temp.path()).unwrap(), WriteResult::Skipped);
    }

    #[test]
    fn test_write_does_not_create_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let stub = Stub {
            name: "missing/test.go",
            content: Ok("package test\n"),
        };

        assert!(stub.write(temp.path()).is_err());
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_render_error_leaves_no_file() {
        let temp = TempDir::new().unwrap();
        let stub = Stub {
            name: "broken.go",
            content: Err("render failed"),
        };

        let err = stub.write(temp.path()).unwrap_err();

        assert!(err.to_string().contains("render failed"));
        assert!(!temp.path().join("broken.go").exists());
    }
}
