//! Julia code generator for the idlgen code generator.
//!
//! This crate turns a resolved IDL program into a Julia module built on the
//! [Thrift.jl](https://github.com/tanmaykm/Thrift.jl) runtime.
//!
//! # Usage
//!
//! This crate is used internally by the `idlgen` CLI tool. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use idlgen_codegen_julia::Generator;
//! use idlgen_codegen::LanguageCodegen;
//! use idlgen_manifest::ProgramFile;
//! use std::path::Path;
//!
//! let file = ProgramFile::open("tutorial.json")?;
//! let generator = Generator::new(file.program());
//!
//! // Preview files without writing
//! let preview = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("gen-jl"))?;
//! ```
//!
//! # Generated Output
//!
//! For a program named `tutorial`, under `tutorial/`:
//!
//! - `tutorial.jl` - Module entry with exports and includes
//! - `tutorial_constants.jl` - Constant definitions
//! - `tutorial_types.jl` - Typedefs, enums, records and client supertypes
//! - `<Service>.jl` - Processor and client for each service
//! - `tutorial_impl.jl` - Handler stubs, written once and never overwritten

mod code_file;
mod const_value;
mod definitions;
mod generator;
mod module;
mod naming;
mod record;
mod type_mapper;

pub mod ast;
pub mod files;
pub mod service;

pub use ast::{Function, ShortFunction, Struct, StructKind, TryCatch};
pub use code_file::{CodeFile, RawCode};
pub use const_value::{ConstRenderer, format_double, quote};
pub use definitions::{emit_const, emit_enum, emit_record, emit_typedef};
pub use generator::{Generator, GeneratorOptions};
pub use idlgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile, PreviewResult};
pub use module::{ModuleAssembler, ModuleFiles};
pub use naming::JULIA_NAMING;
pub use record::{FieldEntry, FieldSummary, FieldTable, RecordCode};
pub use service::{DispatchShape, HandlerSignature, MethodPlan, ParentRef, emit_service};
pub use type_mapper::JuliaTypeMapper;
