//! Per-pass generation state.
//!
//! A [`GenerationContext`] lives for exactly one program. Emitters hand it
//! complete units: a [`Definition`] carries its code together with the
//! [`Export`] entry it contributes, and a [`ServiceUnit`] carries its file,
//! its include and its exports. Code cannot be added without its export
//! registration. [`GenerationContext::finish`] consumes the context into an
//! [`Assembly`] that the module assembler reads.

use indexmap::IndexSet;

use crate::{CodeBuilder, Diagnostic, Indent, NamingConvention, Renderable};

/// Generated file section a definition is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Constants,
    Types,
}

/// One export line of the entry module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub symbols: Vec<String>,
    /// Trailing annotation (e.g. "struct", "service Calculator").
    pub note: String,
}

impl Export {
    pub fn symbol(name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            symbols: vec![name.into()],
            note: note.into(),
        }
    }

    pub fn symbols(
        names: impl IntoIterator<Item = impl Into<String>>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            symbols: names.into_iter().map(Into::into).collect(),
            note: note.into(),
        }
    }
}

/// A complete top-level definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub section: Section,
    pub code: String,
    pub export: Export,
}

impl Definition {
    pub fn constant(code: impl Into<String>, export: Export) -> Self {
        Self {
            section: Section::Constants,
            code: code.into(),
            export,
        }
    }

    pub fn types(code: impl Into<String>, export: Export) -> Self {
        Self {
            section: Section::Types,
            code: code.into(),
            export,
        }
    }
}

/// Everything one service contributes to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUnit {
    pub name: String,
    /// File name of the service, included by the entry module.
    pub file: String,
    /// Body of the service file.
    pub code: String,
    /// Declarations that other files must see first (client supertype).
    pub types_code: String,
    pub export: Export,
}

/// State threaded through every emitter for one program.
#[derive(Debug)]
pub struct GenerationContext {
    program: String,
    naming: NamingConvention,
    indent: Indent,
    renamed: IndexSet<String>,
    diagnostics: Vec<Diagnostic>,
    constants: Vec<String>,
    types: Vec<String>,
    exports: Vec<Export>,
    services: Vec<ServiceUnit>,
}

impl GenerationContext {
    pub fn new(program: impl Into<String>, naming: NamingConvention) -> Self {
        Self {
            program: program.into(),
            naming,
            indent: Indent::default(),
            renamed: IndexSet::new(),
            diagnostics: Vec::new(),
            constants: Vec::new(),
            types: Vec::new(),
            exports: Vec::new(),
            services: Vec::new(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Render a node with the pass's indentation.
    pub fn render(&self, node: &impl Renderable) -> String {
        CodeBuilder::render(self.indent, node)
    }

    /// Rewrite `name` if it collides with a reserved word.
    ///
    /// Each distinct colliding identifier produces one warning per pass.
    pub fn sanitize(&mut self, name: &str) -> String {
        if !self.naming.is_reserved(name) {
            return name.to_string();
        }
        let safe = self.naming.safe_name(name);
        if self.renamed.insert(name.to_string()) {
            tracing::debug!(identifier = name, renamed = %safe, "escaping reserved word");
            self.diagnostics
                .push(Diagnostic::reserved_word(name, &safe).at(format!("program {}", self.program)));
        }
        safe
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Add a definition and register its export.
    pub fn define(&mut self, definition: Definition) {
        let Definition {
            section,
            code,
            export,
        } = definition;
        match section {
            Section::Constants => self.constants.push(code),
            Section::Types => self.types.push(code),
        }
        self.exports.push(export);
    }

    /// Add a service and register its types, include and exports.
    pub fn define_service(&mut self, unit: ServiceUnit) {
        if !unit.types_code.is_empty() {
            self.types.push(unit.types_code.clone());
        }
        self.exports.push(unit.export.clone());
        self.services.push(unit);
    }

    /// Close the pass. The context cannot be written to afterwards.
    pub fn finish(self) -> Assembly {
        Assembly {
            program: self.program,
            constants: self.constants,
            types: self.types,
            exports: self.exports,
            services: self.services,
            diagnostics: self.diagnostics,
        }
    }
}

/// The read-only result of a generation pass.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub program: String,
    pub constants: Vec<String>,
    pub types: Vec<String>,
    pub exports: Vec<Export>,
    pub services: Vec<ServiceUnit>,
    pub diagnostics: Vec<Diagnostic>,
}
