//! Output management for generated files.

mod registry;

pub use registry::{FileCategory, FileEntry, FileRegistry, WriteOutcome};
