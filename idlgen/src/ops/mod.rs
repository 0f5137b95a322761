//! Operations behind the CLI commands.
//!
//! Each operation runs the generator and returns a report; rendering is left
//! to the caller.

mod check;
mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
