//! Mapping IDL type nodes to target type expressions.

use idlgen_ir::{BaseType, TypeNode};

use crate::{CodegenError, Result};

/// Trait for mapping IDL types to language-specific type expressions.
///
/// Backends supply the leaf spellings and container constructors; the
/// recursive walk in [`TypeMapper::map_type`] is shared. Mapping is pure: it
/// never records diagnostics.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Spelling of a base type, or `None` when the backend has no mapping.
    fn base_type(&self, base: BaseType) -> Option<&'static str>;

    fn list_of(&self, elem: &str) -> String;

    fn set_of(&self, elem: &str) -> String;

    /// Key and value arrive in source order.
    fn map_of(&self, key: &str, value: &str) -> String;

    /// Type used for values of a named enum.
    fn enum_ref(&self, name: &str) -> String;

    /// Type used for a named record.
    fn struct_ref(&self, name: &str) -> String;

    /// Map a type node to a target type expression.
    ///
    /// Typedefs are resolved to their target; the alias itself is emitted
    /// separately at definition time.
    fn map_type(&self, ty: &TypeNode) -> Result<String> {
        match ty {
            TypeNode::Base(base) => self
                .base_type(*base)
                .map(str::to_string)
                .ok_or_else(|| CodegenError::unknown_base_type(base.as_str())),
            TypeNode::List(elem) => Ok(self.list_of(&self.map_type(elem)?)),
            TypeNode::Set(elem) => Ok(self.set_of(&self.map_type(elem)?)),
            TypeNode::Map { key, value } => {
                Ok(self.map_of(&self.map_type(key)?, &self.map_type(value)?))
            }
            TypeNode::Enum(name) => Ok(self.enum_ref(name)),
            TypeNode::Typedef { target, .. } => self.map_type(target),
            TypeNode::Struct(name) => Ok(self.struct_ref(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal mapper spelling types the way an IDL file would.
    struct IdlMapper;

    impl TypeMapper for IdlMapper {
        fn language(&self) -> &'static str {
            "idl"
        }

        fn base_type(&self, base: BaseType) -> Option<&'static str> {
            match base {
                BaseType::Void | BaseType::Unknown => None,
                other => Some(other.as_str()),
            }
        }

        fn list_of(&self, elem: &str) -> String {
            format!("list<{elem}>")
        }

        fn set_of(&self, elem: &str) -> String {
            format!("set<{elem}>")
        }

        fn map_of(&self, key: &str, value: &str) -> String {
            format!("map<{key},{value}>")
        }

        fn enum_ref(&self, name: &str) -> String {
            name.to_string()
        }

        fn struct_ref(&self, name: &str) -> String {
            name.to_string()
        }
    }

    #[test]
    fn test_walk_matches_display() {
        let ty = TypeNode::map(
            TypeNode::Enum("Operation".into()),
            TypeNode::set(TypeNode::Struct("Work".into())),
        );
        assert_eq!(IdlMapper.map_type(&ty).unwrap(), ty.to_string());
    }

    #[test]
    fn test_typedef_resolved() {
        let ty = TypeNode::list(TypeNode::typedef(
            "MyInteger",
            TypeNode::base(BaseType::I32),
        ));
        assert_eq!(IdlMapper.map_type(&ty).unwrap(), "list<i32>");
    }

    #[test]
    fn test_unmapped_base_is_error() {
        let err = IdlMapper
            .map_type(&TypeNode::list(TypeNode::base(BaseType::Unknown)))
            .unwrap_err();
        assert_eq!(err, CodegenError::unknown_base_type("unknown"));
    }
}
