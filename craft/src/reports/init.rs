//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing craft.toml.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the config file.
    pub path: PathBuf,
    /// Whether the file was written (false when it already existed).
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if self.created {
            out.added_item(&self.path.display().to_string());
        } else {
            out.warning(&format!(
                "{} already exists, leaving it unchanged",
                self.path.display()
            ));
        }
    }
}
