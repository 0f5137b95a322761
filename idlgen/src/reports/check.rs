//! Check command report data structures.

use std::path::PathBuf;

use super::DiagnosticLines;
use super::output::{Output, Report};

/// Report data from a check pass.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the program dump.
    pub program_path: PathBuf,
    pub program: String,
    pub records: usize,
    pub services: usize,
    pub functions: usize,
    pub diagnostics: DiagnosticLines,
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);
        out.preformatted(&format!("✓ {} is valid", self.program_path.display()));
        out.newline();
        out.preformatted(&format!(
            "  {}: {} record{}, {} service{}, {} function{}",
            self.program,
            self.records,
            plural(self.records),
            self.services,
            plural(self.services),
            self.functions,
            plural(self.functions),
        ));
    }
}
