//! `<program>.jl` entry module generator.

use std::path::{Path, PathBuf};

use idlgen_codegen::{CodeFragment, Export, Indent};
use idlgen_core::{FileRules, GeneratedFile};

use super::BANNER;
use crate::code_file::CodeFile;

/// The module that ties a program's files together.
#[derive(Debug, Clone)]
pub struct ModuleJl {
    /// Program name as used for file names.
    program: String,
    /// Target-safe module name.
    module: String,
    /// Modules of included programs.
    uses: Vec<String>,
    exports: Vec<Export>,
    /// Service files in declaration order.
    services: Vec<String>,
}

impl ModuleJl {
    pub fn new(
        program: impl Into<String>,
        module: impl Into<String>,
        uses: Vec<String>,
        exports: Vec<Export>,
        services: Vec<String>,
    ) -> Self {
        Self {
            program: program.into(),
            module: module.into(),
            uses,
            exports,
            services,
        }
    }

    /// Files included by the module, in include order.
    pub fn includes(&self) -> Vec<String> {
        let mut files = vec![
            format!("{}_constants.jl", self.program),
            format!("{}_types.jl", self.program),
            format!("{}_impl.jl", self.program),
        ];
        files.extend(self.services.iter().cloned());
        files
    }
}

impl GeneratedFile for ModuleJl {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.program).join(format!("{}.jl", self.program))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(BANNER)
    }

    fn render(&self) -> String {
        let imports = vec![
            CodeFragment::line("using Thrift"),
            CodeFragment::line("import Thrift.process, Thrift.meta, Thrift.distribute"),
        ];
        let uses = (!self.uses.is_empty()).then(|| {
            vec![
                CodeFragment::line("# import included programs"),
                CodeFragment::line(format!("using {}", self.uses.join(", "))),
            ]
        });
        let exports: Vec<_> = std::iter::once(CodeFragment::line("export meta"))
            .chain(
                self.exports
                    .iter()
                    .filter(|e| !e.symbols.is_empty())
                    .map(|e| CodeFragment::line(format!("export {} # {}", e.symbols.join(", "), e.note))),
            )
            .collect();
        let impl_file = format!("{}_impl.jl", self.program);
        let includes: Vec<_> = self
            .includes()
            .into_iter()
            .map(|file| {
                if file == impl_file {
                    CodeFragment::line(format!("include(\"{file}\")  # server methods to be hand coded"))
                } else {
                    CodeFragment::line(format!("include(\"{file}\")"))
                }
            })
            .collect();

        CodeFile::new(Indent::JULIA)
            .item(CodeFragment::line(format!("module {}", self.module)))
            .item(imports)
            .items(uses)
            .item(exports)
            .item(includes)
            .item(CodeFragment::line(format!("end # module {}", self.module)))
            .render()
    }
}
