// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Optional project configuration for craft, read from `craft.toml`.
//!
//! Every key is optional. Values left out fall back to the built-in layout
//! chosen by the generator.

mod config;
mod error;
mod validate;

pub use config::{CONFIG_FILE_NAME, Config, LayerConfig, ModuleConfig};
pub use error::{Error, Result, SourceContext};
