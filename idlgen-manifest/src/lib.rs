//! Input loading for the idlgen code generator.
//!
//! Reads the resolved program dump produced by the IDL front end (JSON or
//! TOML) and the optional `idlgen.toml` generator configuration. Errors carry
//! the source document so they render with [`miette`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod program;

pub use config::{CONFIG_FILE, Config, GeneratorConfig};
pub use error::{Error, Result, SourceContext};
pub use program::{Format, ProgramFile, parse_program};
