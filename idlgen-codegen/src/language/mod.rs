//! Language-specific code generation abstractions.
//!
//! - [`LanguageCodegen`] - Trait for language-specific backends
//! - [`TypeMapper`] - Trait for mapping IDL types to target type expressions
//! - [`NamingConvention`] - Reserved words and escaping rules

mod naming;
mod traits;
mod type_mapper;

pub use naming::{Escape, NamingConvention};
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, PreviewResult};
pub use type_mapper::TypeMapper;
