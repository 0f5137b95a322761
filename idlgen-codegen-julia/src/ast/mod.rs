//! Julia syntax builders.
//!
//! Each builder implements [`Renderable`](idlgen_codegen::Renderable), so
//! nodes nest without knowing the indentation they end up at.

mod control;
mod functions;
mod structs;

pub use control::TryCatch;
pub use functions::{Function, ShortFunction};
pub use structs::{Struct, StructKind};
