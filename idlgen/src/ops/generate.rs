//! Generate operation - Julia module emission.

use std::path::Path;

use eyre::{Context, Result};
use idlgen_codegen::LanguageCodegen;
use idlgen_codegen_julia::{Generator, GeneratorOptions};
use idlgen_ir::Program;

use crate::reports::{
    DiagnosticLines, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root directory; the module lands in `<output_dir>/<program>/`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub generator: GeneratorOptions,
}

/// Execute the generate operation.
///
/// Nothing is written when the pass fails.
pub fn generate(program: &Program, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(program).with_options(opts.generator);
    tracing::debug!(language = generator.language(), dry_run = opts.dry_run, "running backend");

    let (diagnostics, result) = if opts.dry_run {
        let preview = generator.preview().wrap_err("Generation failed")?;
        let files = preview
            .files
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        (preview.diagnostics, GenerationResult::Preview(PreviewResult { files }))
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        (
            result.diagnostics,
            GenerationResult::Written(WrittenResult {
                output_dir: opts.output_dir.to_path_buf(),
                written: result.written,
                skipped: result.skipped,
            }),
        )
    };

    Ok(GenerateReport {
        program: program.name.clone(),
        definitions: program.definition_count(),
        diagnostics: DiagnosticLines::from_diagnostics(&diagnostics),
        result,
    })
}
