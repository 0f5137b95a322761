//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod generate;
mod output;

use idlgen_codegen::Diagnostic;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Output, Report, TerminalOutput};

/// Diagnostics of a pass, formatted for display.
#[derive(Debug, Default)]
pub struct DiagnosticLines {
    pub warnings: Vec<String>,
}

impl DiagnosticLines {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let warnings = diagnostics
            .iter()
            .map(|diag| match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.kind, loc),
                None => diag.message(),
            })
            .collect();
        Self { warnings }
    }

    pub fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
    }
}
