use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for craft-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid name '{name}': {reason}")]
    #[diagnostic(
        code(craft::invalid_argument),
        help("pass a name such as 'order' or 'billing/invoice'")
    )]
    InvalidArgument { name: String, reason: &'static str },

    #[error("failed to create directory '{}'", path.display())]
    #[diagnostic(
        code(craft::directory_creation),
        help("check that no file is in the way and that the parent directory is writable")
    )]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{template}' uses undeclared field '{field}'")]
    #[diagnostic(code(craft::undeclared_field))]
    UndeclaredField {
        template: &'static str,
        field: String,
    },

    #[error("template '{template}' has an unterminated placeholder at byte {offset}")]
    #[diagnostic(code(craft::unterminated_placeholder))]
    UnterminatedPlaceholder {
        template: &'static str,
        offset: usize,
    },
}

impl Error {
    pub(crate) fn invalid_argument(name: &str, reason: &'static str) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            reason,
        }
    }
}
