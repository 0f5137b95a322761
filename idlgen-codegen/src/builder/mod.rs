//! Line-oriented building blocks for emitted Julia.
//!
//! AST nodes describe themselves as [`CodeFragment`]s through
//! [`Renderable`]; a [`CodeBuilder`] lays the fragments out at the
//! configured [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
