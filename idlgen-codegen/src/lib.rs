//! Shared code generation utilities for the idlgen code generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific backends (e.g., `idlgen-codegen-julia`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`context`] - Per-pass generation state (GenerationContext, Assembly)
//! - [`diagnostic`] - Non-fatal findings reported during a pass
//! - [`error`] - Fatal generation errors
//! - [`generation`] - Output management (FileRegistry, FileEntry)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use context::{Assembly, Definition, Export, GenerationContext, Section, ServiceUnit};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{CodegenError, Result};
pub use language::{
    GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, PreviewResult, TypeMapper,
};
