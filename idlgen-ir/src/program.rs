//! Program-level definitions.

use serde::{Deserialize, Serialize};

use crate::{ConstValue, TypeNode};

/// A resolved IDL program.
///
/// Every list keeps declaration order; emitters rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    /// Names of included programs. They are referenced, never re-generated.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub typedefs: Vec<TypedefDef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub consts: Vec<ConstDef>,
    #[serde(default)]
    pub records: Vec<RecordDef>,
    #[serde(default)]
    pub services: Vec<ServiceDef>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Total number of top-level definitions.
    pub fn definition_count(&self) -> usize {
        self.typedefs.len()
            + self.enums.len()
            + self.consts.len()
            + self.records.len()
            + self.services.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedefDef {
    pub name: String,
    pub target: TypeNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeNode,
    pub value: ConstValue,
}

/// Whether a record is a plain struct or a raisable exception.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Struct,
    Exception,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDef {
    pub name: String,
    #[serde(default)]
    pub kind: RecordKind,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl RecordDef {
    pub fn structure(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            kind: RecordKind::Struct,
            fields,
        }
    }

    pub fn exception(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            kind: RecordKind::Exception,
            fields,
        }
    }

    pub fn is_exception(&self) -> bool {
        self.kind == RecordKind::Exception
    }
}

/// Per-field requiredness marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    Required,
    Optional,
    /// Neither keyword given in the IDL.
    #[default]
    #[serde(rename = "default")]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeNode,
    #[serde(default)]
    pub requiredness: Requiredness,
    #[serde(default)]
    pub default: Option<ConstValue>,
}

impl Field {
    pub fn new(id: i32, name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            id,
            name: name.into(),
            ty,
            requiredness: Requiredness::Unspecified,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn with_default(mut self, value: ConstValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn is_optional(&self) -> bool {
        self.requiredness == Requiredness::Optional
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDef {
    pub name: String,
    /// Parent service name, possibly defined in an included program.
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}

impl ServiceDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            functions: Vec::new(),
        }
    }

    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn function(mut self, function: FunctionDef) -> Self {
        self.functions.push(function);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    #[serde(default)]
    pub returns: TypeNode,
    #[serde(default)]
    pub args: Vec<Field>,
    #[serde(default)]
    pub throws: Vec<Field>,
    #[serde(default)]
    pub oneway: bool,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, returns: TypeNode) -> Self {
        Self {
            name: name.into(),
            returns,
            args: Vec::new(),
            throws: Vec::new(),
            oneway: false,
        }
    }

    pub fn arg(mut self, field: Field) -> Self {
        self.args.push(field);
        self
    }

    pub fn throws(mut self, field: Field) -> Self {
        self.throws.push(field);
        self
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }
}
