//! `<program>_types.jl` generator.

use std::path::{Path, PathBuf};

use idlgen_codegen::Indent;
use idlgen_core::{FileRules, GeneratedFile};

use super::BANNER;
use crate::code_file::{CodeFile, RawCode};

/// Typedefs, enums, records and client supertypes, in declaration order.
pub struct TypesJl {
    program: String,
    definitions: Vec<String>,
}

impl TypesJl {
    pub fn new(program: impl Into<String>, definitions: Vec<String>) -> Self {
        Self {
            program: program.into(),
            definitions,
        }
    }
}

impl GeneratedFile for TypesJl {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.program)
            .join(format!("{}_types.jl", self.program))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(BANNER)
    }

    fn render(&self) -> String {
        CodeFile::new(Indent::JULIA)
            .items(self.definitions.iter().map(|d| RawCode::new(d)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_separated_by_blank_line() {
        let file = TypesJl::new(
            "tutorial",
            vec![
                "const MyInteger = Int32\n".into(),
                "abstract type CalculatorClientBase end\n".into(),
            ],
        );
        assert_eq!(
            file.render(),
            "const MyInteger = Int32\n\nabstract type CalculatorClientBase end\n"
        );
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/tutorial/tutorial_types.jl")
        );
    }
}
