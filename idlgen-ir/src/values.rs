//! Literal values attached to constants and field defaults.

use serde::{Deserialize, Serialize};

/// A literal IDL value tree.
///
/// The tree mirrors the declared type: sets and lists share the `list`
/// shape, enum constants arrive as their resolved `integer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstValue {
    Integer(i64),
    Double(f64),
    String(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
}

impl ConstValue {
    /// Short name of this value's shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            ConstValue::Integer(_) => "integer",
            ConstValue::Double(_) => "double",
            ConstValue::String(_) => "string",
            ConstValue::List(_) => "list",
            ConstValue::Map(_) => "map",
        }
    }
}
