//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod init;
mod output;

use std::path::{Path, PathBuf};

pub use generate::{GenerateReport, OutcomeLine, PreviewReport};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};

/// Path as the user typed it: relative paths stay relative to `.`.
fn display_path(output_dir: &Path, path: &Path) -> PathBuf {
    if output_dir == Path::new(".") {
        path.to_path_buf()
    } else {
        output_dir.join(path)
    }
}
