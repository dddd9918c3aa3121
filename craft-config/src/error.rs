use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for craft-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so validation code only
/// passes one value around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid root directory error.
    pub fn invalid_root_error(
        &self,
        table: impl Into<String>,
        root: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidRoot {
            src: self.named_source(),
            span,
            table: table.into(),
            root: root.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid package name error.
    pub fn invalid_package_error(
        &self,
        table: impl Into<String>,
        package: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackage {
            src: self.named_source(),
            span,
            table: table.into(),
            package: package.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'craft init' to create a craft.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse craft.toml")]
    #[diagnostic(code(craft::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid root directory '{root}' in [{table}]")]
    #[diagnostic(
        code(craft::invalid_root),
        help("{reason}. Use a relative path such as 'app/services'.")
    )]
    InvalidRoot {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid root")]
        span: Option<SourceSpan>,
        table: String,
        root: String,
        reason: String,
    },

    #[error("invalid package name '{package}' in [{table}]")]
    #[diagnostic(
        code(craft::invalid_package),
        help("{reason}. Use lower-case letters, digits and underscores, starting with a letter.")
    )]
    InvalidPackage {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package name")]
        span: Option<SourceSpan>,
        table: String,
        package: String,
        reason: String,
    },
}
