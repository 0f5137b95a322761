//! Julia type mapper implementation.

use idlgen_codegen::TypeMapper;
use idlgen_ir::BaseType;

use crate::JULIA_NAMING;

/// Julia type mapper.
///
/// Enums map to `Int32` because enum values travel as integers on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct JuliaTypeMapper;

impl TypeMapper for JuliaTypeMapper {
    fn language(&self) -> &'static str {
        "julia"
    }

    fn base_type(&self, base: BaseType) -> Option<&'static str> {
        match base {
            BaseType::Bool => Some("Bool"),
            BaseType::Byte => Some("UInt8"),
            BaseType::I16 => Some("Int16"),
            BaseType::I32 => Some("Int32"),
            BaseType::I64 => Some("Int64"),
            BaseType::Double => Some("Float64"),
            BaseType::String => Some("String"),
            BaseType::Binary => Some("Vector{UInt8}"),
            BaseType::Void | BaseType::Unknown => None,
        }
    }

    fn list_of(&self, elem: &str) -> String {
        format!("Vector{{{}}}", elem)
    }

    fn set_of(&self, elem: &str) -> String {
        format!("Set{{{}}}", elem)
    }

    fn map_of(&self, key: &str, value: &str) -> String {
        format!("Dict{{{},{}}}", key, value)
    }

    fn enum_ref(&self, _name: &str) -> String {
        "Int32".to_string()
    }

    fn struct_ref(&self, name: &str) -> String {
        JULIA_NAMING.safe_name(name)
    }
}
