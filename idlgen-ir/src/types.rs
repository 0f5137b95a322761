//! IDL type nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive IDL types.
///
/// Tags the generator does not know deserialize to [`BaseType::Unknown`] so
/// that the type mapper, not the loader, reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    Void,
    #[serde(other)]
    Unknown,
}

impl BaseType {
    /// Get the IDL spelling of this base type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Bool => "bool",
            BaseType::Byte => "byte",
            BaseType::I16 => "i16",
            BaseType::I32 => "i32",
            BaseType::I64 => "i64",
            BaseType::Double => "double",
            BaseType::String => "string",
            BaseType::Binary => "binary",
            BaseType::Void => "void",
            BaseType::Unknown => "unknown",
        }
    }
}

/// A reference to an IDL type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNode {
    Base(BaseType),
    List(Box<TypeNode>),
    Set(Box<TypeNode>),
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    /// Enumeration, referenced by name.
    Enum(String),
    /// Named alias carrying its resolved target.
    Typedef {
        name: String,
        target: Box<TypeNode>,
    },
    /// Record or exception, referenced by name.
    Struct(String),
}

impl TypeNode {
    pub fn base(base: BaseType) -> Self {
        Self::Base(base)
    }

    pub fn void() -> Self {
        Self::Base(BaseType::Void)
    }

    pub fn list(elem: TypeNode) -> Self {
        Self::List(Box::new(elem))
    }

    pub fn set(elem: TypeNode) -> Self {
        Self::Set(Box::new(elem))
    }

    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn typedef(name: impl Into<String>, target: TypeNode) -> Self {
        Self::Typedef {
            name: name.into(),
            target: Box::new(target),
        }
    }

    /// Follow typedef chains down to the underlying type.
    pub fn true_type(&self) -> &TypeNode {
        let mut ty = self;
        while let TypeNode::Typedef { target, .. } = ty {
            ty = target;
        }
        ty
    }

    /// Returns true if this type (after typedef resolution) is `void`.
    pub fn is_void(&self) -> bool {
        matches!(self.true_type(), TypeNode::Base(BaseType::Void))
    }
}

impl Default for TypeNode {
    fn default() -> Self {
        Self::void()
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Base(base) => f.write_str(base.as_str()),
            TypeNode::List(elem) => write!(f, "list<{}>", elem),
            TypeNode::Set(elem) => write!(f, "set<{}>", elem),
            TypeNode::Map { key, value } => write!(f, "map<{},{}>", key, value),
            TypeNode::Enum(name) | TypeNode::Struct(name) | TypeNode::Typedef { name, .. } => {
                f.write_str(name)
            }
        }
    }
}
