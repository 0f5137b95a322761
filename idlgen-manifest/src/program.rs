//! Loading resolved program dumps.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use idlgen_ir::{Field, Program};

use crate::{Error, Result, error::SourceContext};

/// Serialization format of a program dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("json") => Some(Format::Json),
            Some("toml") => Some(Format::Toml),
            _ => None,
        }
    }
}

/// A program dump on disk, parsed.
pub struct ProgramFile {
    path: PathBuf,
    program: Program,
}

impl ProgramFile {
    /// Open and parse a program dump, choosing the format from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)
            .ok_or_else(|| Box::new(Error::UnsupportedFormat { path: path.clone() }))?;
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let program = parse_program(&content, &path.display().to_string(), format)?;

        Ok(Self { path, program })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
}

/// Parse a program from `content`, using `filename` for error reporting.
pub fn parse_program(content: &str, filename: &str, format: Format) -> Result<Program> {
    let ctx = SourceContext::new(content, filename);
    let program: Program = match format {
        Format::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e))?,
        Format::Toml => toml::from_str(content).map_err(|e| ctx.toml_error(e))?,
    };
    validate_program(&program, &ctx)?;
    Ok(program)
}

/// Structural checks the generator relies on.
///
/// Everything else (type resolution, name uniqueness) is the front end's job.
fn validate_program(program: &Program, ctx: &SourceContext) -> Result<()> {
    if program.name.trim().is_empty() {
        return Err(ctx.empty_program_name());
    }

    let record_fields = program
        .records
        .iter()
        .flat_map(|r| r.fields.iter().map(move |f| (r.name.as_str(), f)));
    let function_fields = program.services.iter().flat_map(|s| {
        s.functions
            .iter()
            .flat_map(|f| f.args.iter().chain(&f.throws).map(move |a| (f.name.as_str(), a)))
    });

    for (owner, field) in record_fields.chain(function_fields) {
        check_field_id(owner, field, ctx)?;
    }
    Ok(())
}

fn check_field_id(owner: &str, field: &Field, ctx: &SourceContext) -> Result<()> {
    if field.id <= 0 {
        return Err(ctx.bad_field_id(owner, &field.name, field.id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use idlgen_ir::{BaseType, TypeNode};

    use super::*;

    const TUTORIAL_JSON: &str = r#"{
        "name": "tutorial",
        "includes": ["shared"],
        "typedefs": [{"name": "MyInteger", "target": {"base": "i32"}}],
        "records": [{
            "name": "Work",
            "fields": [
                {"id": 1, "name": "num1", "type": {"base": "i32"}, "default": {"integer": 0}},
                {"id": 4, "name": "comment", "type": {"base": "string"}, "requiredness": "optional"}
            ]
        }]
    }"#;

    #[test]
    fn test_parse_json_program() {
        let program = parse_program(TUTORIAL_JSON, "tutorial.json", Format::Json).unwrap();
        assert_eq!(program.name, "tutorial");
        assert_eq!(program.includes, vec!["shared"]);
        assert_eq!(program.typedefs[0].target, TypeNode::base(BaseType::I32));
        assert!(program.records[0].fields[1].is_optional());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = parse_program(r#"name = """#, "p.toml", Format::Toml).unwrap_err();
        assert!(matches!(*err, Error::EmptyProgramName { .. }));
    }

    #[test]
    fn test_rejects_non_positive_field_id() {
        let src = r#"{"name": "p", "records": [{"name": "R", "fields": [
            {"id": 0, "name": "bad", "type": {"base": "i32"}}
        ]}]}"#;
        let err = parse_program(src, "p.json", Format::Json).unwrap_err();
        match *err {
            Error::FieldId { field, span, .. } => {
                assert_eq!(field, "bad");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml_reports_parse_error() {
        let err = parse_program("name = ", "p.toml", Format::Toml).unwrap_err();
        assert!(matches!(*err, Error::Toml { .. }));
    }

    #[test]
    fn test_open_detects_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutorial.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(TUTORIAL_JSON.as_bytes())
            .unwrap();

        let file = ProgramFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.program().records.len(), 1);
    }

    #[test]
    fn test_open_rejects_unknown_extension() {
        let err = ProgramFile::open("tutorial.thrift").err().unwrap();
        assert!(matches!(*err, Error::UnsupportedFormat { .. }));
    }
}
