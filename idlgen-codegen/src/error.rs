//! Error types for code generation.

use thiserror::Error;

/// Result type for emitter operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Fatal, pass-aborting generation errors.
///
/// Any of these means the program dump and the backend disagree; no file is
/// written once one is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    /// A base type tag with no target mapping (including `void` in value position).
    #[error("unknown base type '{tag}'")]
    UnknownBaseType { tag: String },

    /// Constants of record type cannot be rendered.
    #[error("constants of struct type '{type_name}' are not supported")]
    StructConstant { type_name: String },

    /// Literal tree shape does not match the declared type.
    #[error("constant of type '{expected}' cannot hold a {found} literal")]
    ConstShapeMismatch { expected: String, found: &'static str },

    /// An error raised while emitting a specific definition.
    #[error("{location}: {source}")]
    Within {
        location: String,
        #[source]
        source: Box<CodegenError>,
    },
}

impl CodegenError {
    pub fn unknown_base_type(tag: impl Into<String>) -> Self {
        Self::UnknownBaseType { tag: tag.into() }
    }

    pub fn shape_mismatch(expected: impl ToString, found: &'static str) -> Self {
        Self::ConstShapeMismatch {
            expected: expected.to_string(),
            found,
        }
    }

    /// Attach the definition being emitted when the error occurred.
    pub fn within(self, location: impl Into<String>) -> Self {
        Self::Within {
            location: location.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, without location wrappers.
    pub fn root(&self) -> &CodegenError {
        match self {
            Self::Within { source, .. } => source.root(),
            other => other,
        }
    }
}
