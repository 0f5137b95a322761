//! Intermediate representation for the idlgen code generator.
//!
//! These types describe a fully resolved IDL program as handed over by the
//! front end: every typedef reference carries its target, every enum constant
//! is already reduced to its integer value, and includes are resolved to
//! program names.
//!
//! # Architecture
//!
//! ```text
//! IDL front end → program dump (JSON/TOML) → idlgen-manifest → idlgen-ir → codegen
//! ```
//!
//! The IR is consumed read-only by the emitters.

mod order;
mod program;
mod types;
mod values;

pub use order::TypeDecl;
pub use program::{
    ConstDef, EnumDef, EnumValue, Field, FunctionDef, Program, RecordDef, RecordKind,
    Requiredness, ServiceDef, TypedefDef,
};
pub use types::{BaseType, TypeNode};
pub use values::ConstValue;
