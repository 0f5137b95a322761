//! The seam between the CLI and a target-language backend.

use std::path::Path;

use eyre::Result;

use crate::Diagnostic;

/// A backend bound to one program.
///
/// All three entry points run the same full pass, so a program that
/// previews cleanly also generates cleanly.
pub trait LanguageCodegen {
    /// Short target name used in logs, e.g. `julia`.
    fn language(&self) -> &'static str;

    /// Every file the pass would produce, rendered but not written.
    fn preview(&self) -> Result<PreviewResult>;

    /// Write the files under `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// The pass's diagnostics, with nothing rendered to disk.
    fn check(&self) -> Result<Vec<Diagnostic>>;
}

#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Relative to the output directory.
    pub written: Vec<String>,
    /// Create-once stubs that already existed.
    pub skipped: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default)]
pub struct PreviewResult {
    /// In write order.
    pub files: Vec<PreviewFile>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug)]
pub struct PreviewFile {
    /// Relative to the output directory.
    pub path: String,
    pub content: String,
}
