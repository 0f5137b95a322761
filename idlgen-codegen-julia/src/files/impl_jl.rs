//! `<program>_impl.jl` handler stub generator.

use std::path::{Path, PathBuf};

use idlgen_codegen::Indent;
use idlgen_core::{FileRules, GeneratedFile};

use crate::code_file::CodeFile;
use crate::service::HandlerSignature;

/// Placeholder server methods, written once and then owned by the user.
pub struct ImplJl {
    program: String,
    handlers: Vec<HandlerSignature>,
    indent: Indent,
}

impl ImplJl {
    pub fn new(program: impl Into<String>, handlers: Vec<HandlerSignature>, indent: Indent) -> Self {
        Self {
            program: program.into(),
            handlers,
            indent,
        }
    }
}

impl GeneratedFile for ImplJl {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.program)
            .join(format!("{}_impl.jl", self.program))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new(self.indent)
            .comment([
                format!("Server side methods for {}.", self.program),
                "This file is not regenerated; replace each body with the implementation.".into(),
            ])
            .items(self.handlers.iter().map(HandlerSignature::stub))
            .render()
    }
}
