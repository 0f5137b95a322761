//! `<program>_constants.jl` generator.

use std::path::{Path, PathBuf};

use idlgen_core::{FileRules, GeneratedFile};

use super::BANNER;

/// Top-level constants, one per line in declaration order.
pub struct ConstantsJl {
    program: String,
    constants: Vec<String>,
}

impl ConstantsJl {
    pub fn new(program: impl Into<String>, constants: Vec<String>) -> Self {
        Self {
            program: program.into(),
            constants,
        }
    }
}

impl GeneratedFile for ConstantsJl {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.program)
            .join(format!("{}_constants.jl", self.program))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(BANNER)
    }

    fn render(&self) -> String {
        self.constants.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_file() {
        let file = ConstantsJl::new(
            "tutorial",
            vec![
                "const INT32CONSTANT = Int32(9853)\n".into(),
                "const MAPCONSTANT = Dict{String,String}(\"hello\" => \"world\")\n".into(),
            ],
        );
        assert_eq!(
            file.path(Path::new("gen-jl")),
            Path::new("gen-jl/tutorial/tutorial_constants.jl")
        );
        let contents = file.contents();
        assert!(contents.starts_with("#\n# Autogenerated by idlgen ("));
        assert!(contents.ends_with(
            "WHAT YOU ARE DOING\n#\n\nconst INT32CONSTANT = Int32(9853)\nconst MAPCONSTANT = Dict{String,String}(\"hello\" => \"world\")\n"
        ));
    }
}
