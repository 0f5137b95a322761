//! Assembling a finished pass into output files.

use idlgen_codegen::generation::{FileCategory, FileEntry, FileRegistry};
use idlgen_codegen::{Assembly, Diagnostic, Indent};

use crate::files::{ConstantsJl, ImplJl, ModuleJl, ServiceJl, TypesJl};
use crate::service::HandlerSignature;

/// Every file produced for one program.
pub struct ModuleFiles {
    pub constants: ConstantsJl,
    pub types: TypesJl,
    pub services: Vec<ServiceJl>,
    pub entry: ModuleJl,
    /// Handler stub, absent when disabled.
    pub handlers: Option<ImplJl>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ModuleFiles {
    /// Register the files in write order.
    pub fn register(&self, registry: &mut FileRegistry) {
        registry.register(FileEntry::from_generated(
            &self.constants,
            FileCategory::Generated,
        ));
        registry.register(FileEntry::from_generated(&self.types, FileCategory::Generated));
        for service in &self.services {
            registry.register(FileEntry::from_generated(service, FileCategory::Generated));
        }
        registry.register(FileEntry::from_generated(&self.entry, FileCategory::Entry));
        if let Some(handlers) = &self.handlers {
            registry.register(FileEntry::from_generated(handlers, FileCategory::Handler));
        }
    }
}

/// Turns the [`Assembly`] of a pass into the program's files.
#[derive(Debug, Clone)]
pub struct ModuleAssembler {
    program: String,
    module: String,
    uses: Vec<String>,
    indent: Indent,
}

impl ModuleAssembler {
    /// `program` names the output files; `module` is the target-safe module name.
    pub fn new(program: impl Into<String>, module: impl Into<String>, uses: Vec<String>) -> Self {
        Self {
            program: program.into(),
            module: module.into(),
            uses,
            indent: Indent::JULIA,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Consume the assembly. `handlers` is `None` when no stub is wanted.
    pub fn assemble(self, assembly: Assembly, handlers: Option<Vec<HandlerSignature>>) -> ModuleFiles {
        let Assembly {
            constants,
            types,
            exports,
            services,
            diagnostics,
            ..
        } = assembly;

        let service_files = services.iter().map(|s| s.file.clone()).collect();
        let entry = ModuleJl::new(&self.program, &self.module, self.uses, exports, service_files);

        ModuleFiles {
            constants: ConstantsJl::new(&self.program, constants),
            types: TypesJl::new(&self.program, types),
            services: services
                .into_iter()
                .map(|unit| ServiceJl::new(&self.program, unit))
                .collect(),
            entry,
            handlers: handlers.map(|h| ImplJl::new(&self.program, h, self.indent)),
            diagnostics,
        }
    }
}
