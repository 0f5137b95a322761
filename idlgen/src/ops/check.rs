//! Check operation - a generation pass that writes nothing.

use std::path::Path;

use eyre::{Context, Result};
use idlgen_codegen::LanguageCodegen;
use idlgen_codegen_julia::{Generator, GeneratorOptions};
use idlgen_ir::Program;

use crate::reports::{CheckReport, DiagnosticLines};

/// Execute the check operation.
///
/// Fatal generation errors are returned as `Err`; everything else ends up in
/// the report.
pub fn check(program: &Program, program_path: &Path, options: GeneratorOptions) -> Result<CheckReport> {
    let diagnostics = Generator::new(program)
        .with_options(options)
        .check()
        .wrap_err("Generation check failed")?;

    Ok(CheckReport {
        program_path: program_path.to_path_buf(),
        program: program.name.clone(),
        records: program.records.len(),
        services: program.services.len(),
        functions: program.services.iter().map(|s| s.functions.len()).sum(),
        diagnostics: DiagnosticLines::from_diagnostics(&diagnostics),
    })
}

#[cfg(test)]
mod tests {
    use idlgen_ir::{BaseType, ConstDef, ConstValue, FunctionDef, ServiceDef, TypeNode};

    use super::*;

    #[test]
    fn test_counts() {
        let mut program = Program::new("tutorial");
        program.services.push(
            ServiceDef::new("Calculator")
                .function(FunctionDef::new("ping", TypeNode::void()))
                .function(FunctionDef::new("zip", TypeNode::void()).oneway()),
        );
        let report = check(&program, Path::new("tutorial.json"), GeneratorOptions::default()).unwrap();
        assert_eq!(report.services, 1);
        assert_eq!(report.functions, 2);
        assert!(report.diagnostics.warnings.is_empty());
    }

    #[test]
    fn test_fatal_error_is_returned() {
        let mut program = Program::new("tutorial");
        program.consts.push(ConstDef {
            name: "BAD".into(),
            ty: TypeNode::base(BaseType::I32),
            value: ConstValue::String("one".into()),
        });
        let err = check(&program, Path::new("tutorial.json"), GeneratorOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Generation check failed");
        assert!(format!("{err:?}").contains("const BAD"));
    }
}
