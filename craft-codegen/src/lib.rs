//! Scaffolding engine for craft.
//!
//! Turns a kind and a name such as `billing/invoice` into a set of Go source
//! files. The name is validated and normalized once per request, the target
//! directory is composed from the [`Layout`], and each template of the kind's
//! bundle is rendered and written unless a file already exists at its path.
//!
//! Existence is checked right before each write. Two concurrent runs on the
//! same target can both pass the check; the exclusive create then makes the
//! loser report the file as skipped.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod artifact;
mod craft_toml;
mod error;
mod generator;
mod identifier;
mod kind;
pub mod paths;
mod template;
pub mod templates;

pub use artifact::{Artifact, ArtifactOutcome, Outcome};
pub use craft_toml::CraftToml;
pub use error::{Error, Result};
pub use generator::{Generation, Generator, PreviewFile};
pub use identifier::Identifier;
pub use kind::Kind;
pub use paths::{Layout, TargetPath};
pub use template::{Field, FieldValues, FileName, Template};
