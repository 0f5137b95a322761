//! Core output primitives for the idlgen code generator.
//!
//! Every emitted artifact implements [`GeneratedFile`]; [`FileRules`]
//! decide whether an existing file on disk is replaced or preserved.

mod file;

pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file, write_with};
