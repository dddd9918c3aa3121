//! Core operations.
//!
//! This module contains the business logic for craft commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod init;

pub use generate::{GenerateOptions, generate, preview};
pub use init::init;
