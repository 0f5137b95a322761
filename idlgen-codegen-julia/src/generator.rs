//! Julia code generator for Thrift.jl.

use std::path::Path;

use eyre::Result;
use idlgen_codegen::{
    Diagnostic, GenerationContext, Indent,
    generation::FileRegistry,
    language::{GenerateResult, LanguageCodegen, PreviewFile, PreviewResult},
};
use idlgen_ir::{Program, TypeDecl};

use crate::{
    JULIA_NAMING,
    definitions::{emit_const, emit_enum, emit_record, emit_typedef},
    module::{ModuleAssembler, ModuleFiles},
    service::emit_service,
};

/// Knobs for one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub indent: Indent,
    /// Write `<program>_impl.jl` when it does not exist yet.
    pub impl_stub: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: Indent::JULIA,
            impl_stub: true,
        }
    }
}

/// Julia code generator producing a Thrift.jl module for one program.
pub struct Generator<'a> {
    program: &'a Program,
    options: GeneratorOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "julia"
    }

    fn preview(&self) -> Result<PreviewResult> {
        let files = self.run()?;
        let mut registry = FileRegistry::new();
        files.register(&mut registry);
        Ok(PreviewResult {
            files: registry
                .entries()
                .map(|entry| PreviewFile {
                    path: entry.path.clone(),
                    content: entry.content.clone(),
                })
                .collect(),
            diagnostics: files.diagnostics,
        })
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.run()?;
        let mut registry = FileRegistry::new();
        files.register(&mut registry);
        let outcome = registry.write_all(output_dir)?;

        tracing::info!(
            program = %self.program.name,
            written = outcome.written.len(),
            skipped = outcome.skipped.len(),
            "generated julia module"
        );

        Ok(GenerateResult {
            written: outcome.written,
            skipped: outcome.skipped,
            diagnostics: files.diagnostics,
        })
    }

    fn check(&self) -> Result<Vec<Diagnostic>> {
        Ok(self.run()?.diagnostics)
    }
}

impl<'a> Generator<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Run one generation pass over the program.
    ///
    /// Types are emitted so that no record is named before it is defined:
    /// typedefs, enums and records in dependency order, then constants, then
    /// services. Any error aborts the pass before a file is produced.
    pub fn run(&self) -> idlgen_codegen::Result<ModuleFiles> {
        let program = self.program;
        let _span = tracing::info_span!("generate", program = %program.name).entered();

        let mut ctx = GenerationContext::new(&program.name, JULIA_NAMING)
            .with_indent(self.options.indent);
        let module = ctx.sanitize(&program.name);
        let uses: Vec<String> = program
            .includes
            .iter()
            .map(|include| ctx.sanitize(include))
            .collect();

        for decl in program.type_decls() {
            match decl {
                TypeDecl::Typedef(def) => emit_typedef(&mut ctx, def)?,
                TypeDecl::Enum(def) => emit_enum(&mut ctx, def)?,
                TypeDecl::Record(def) => emit_record(&mut ctx, def)?,
            }
        }
        for def in &program.consts {
            emit_const(&mut ctx, def)?;
        }
        let mut handlers = Vec::new();
        for service in &program.services {
            handlers.extend(emit_service(&mut ctx, service)?);
        }

        for diagnostic in ctx.diagnostics() {
            tracing::debug!(%diagnostic, "diagnostic");
        }
        tracing::debug!(
            definitions = program.definition_count(),
            services = program.services.len(),
            "pass complete"
        );

        let assembler = ModuleAssembler::new(&program.name, module, uses)
            .with_indent(self.options.indent);
        let stub = self.options.impl_stub.then_some(handlers);
        Ok(assembler.assemble(ctx.finish(), stub))
    }
}
