//! `<Service>.jl` generator.

use std::path::{Path, PathBuf};

use idlgen_codegen::ServiceUnit;
use idlgen_core::{FileRules, GeneratedFile};

use super::BANNER;

/// One service's records, processor and client.
pub struct ServiceJl {
    program: String,
    unit: ServiceUnit,
}

impl ServiceJl {
    pub fn new(program: impl Into<String>, unit: ServiceUnit) -> Self {
        Self {
            program: program.into(),
            unit,
        }
    }
}

impl GeneratedFile for ServiceJl {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.program).join(&self.unit.file)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(BANNER)
    }

    fn render(&self) -> String {
        self.unit.code.clone()
    }
}
