//! Core utilities and types for the craft scaffolding generator.
//!
//! This crate provides the name normalizer and the file-writing contract
//! shared by the generator crates.

mod file;
mod tokens;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// Derived names
pub use tokens::TokenSet;
// String utilities
pub use utils::{to_instance_name, to_package_name, to_snake_case, to_type_name};
