//! Generate command report data structures.

use std::path::PathBuf;

use super::DiagnosticLines;
use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Program name from the dump.
    pub program: String,

    /// Number of top-level definitions in the program.
    pub definitions: usize,

    pub diagnostics: DiagnosticLines,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths written, relative to `output_dir`.
    pub written: Vec<String>,
    /// Existing files left alone (the handler stub).
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Program",
            &format!("{} ({} definitions)", self.program, self.definitions),
        );
        out.key_value("Generated", &written.output_dir.join(&self.program).display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Kept (already exists)");
            for path in &written.skipped {
                out.kept_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
