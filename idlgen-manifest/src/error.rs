use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result of loading a program dump or configuration file.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The document being loaded, kept so errors can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of the first occurrence of `needle`, if it occurs at all.
    fn span_of(&self, needle: &str) -> Option<SourceSpan> {
        self.src
            .find(needle)
            .map(|start| SourceSpan::from((start, needle.len())))
    }

    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Toml {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        // line 0 means serde_json had no position, e.g. empty input
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 1)
        });
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn empty_program_name(&self) -> Box<Error> {
        Box::new(Error::EmptyProgramName {
            src: self.named_source(),
            span: self.span_of("name"),
        })
    }

    /// `field` of `owner` carries an id the wire format cannot express.
    pub fn bad_field_id(&self, owner: &str, field: &str, id: i32) -> Box<Error> {
        Box::new(Error::FieldId {
            src: self.named_source(),
            span: self.span_of(&format!("\"{field}\"")),
            owner: owner.to_string(),
            field: field.to_string(),
            id,
        })
    }

    pub fn bad_indent(&self, indent: u8) -> Box<Error> {
        Box::new(Error::Indent {
            src: self.named_source(),
            span: self.span_of("indent"),
            indent,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(idlgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported program format '{path}'")]
    #[diagnostic(
        code(idlgen::unsupported_format),
        help("program dumps must use a .json or .toml extension")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid TOML")]
    #[diagnostic(code(idlgen::toml))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON")]
    #[diagnostic(code(idlgen::json))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("program name must not be empty")]
    #[diagnostic(
        code(idlgen::program_name),
        help("the name becomes the Julia module and file prefix")
    )]
    EmptyProgramName {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty")]
        span: Option<SourceSpan>,
    },

    #[error("field '{field}' of '{owner}' has non-positive id {id}")]
    #[diagnostic(
        code(idlgen::field_id),
        help("give the field an explicit positive id in the IDL")
    )]
    FieldId {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        owner: String,
        field: String,
        id: i32,
    },

    #[error("indent must be between 1 and 8, got {indent}")]
    #[diagnostic(code(idlgen::indent))]
    Indent {
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range")]
        span: Option<SourceSpan>,
        indent: u8,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
