//! Rendering constant literals as Julia expressions.

use idlgen_codegen::{CodegenError, Result, TypeMapper};
use idlgen_ir::{BaseType, ConstValue, TypeNode};

use crate::JuliaTypeMapper;

/// Renders a constant literal tree as a Julia expression of its declared type.
///
/// With conversion enabled, numeric scalars are wrapped in an explicit
/// constructor (`Int32(9853)`, `Float64(3.14)`) so the value has its declared
/// width. Container
/// elements are always rendered without one; the typed container literal does
/// the conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstRenderer {
    mapper: JuliaTypeMapper,
}

impl ConstRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, ty: &TypeNode, value: &ConstValue, with_conversion: bool) -> Result<String> {
        let ty = ty.true_type();
        match (ty, value) {
            (TypeNode::Base(base), _) => self.render_base(ty, *base, value, with_conversion),
            (TypeNode::Enum(_), ConstValue::Integer(v)) => Ok(v.to_string()),
            (TypeNode::Struct(name), _) => Err(CodegenError::StructConstant {
                type_name: name.clone(),
            }),
            (TypeNode::List(elem), ConstValue::List(items)) => {
                Ok(format!("{}[{}]", self.mapper.map_type(elem)?, self.elements(elem, items)?))
            }
            (TypeNode::Set(elem), ConstValue::List(items)) => Ok(format!(
                "union!({}(), {}[{}])",
                self.mapper.map_type(ty)?,
                self.mapper.map_type(elem)?,
                self.elements(elem, items)?
            )),
            (TypeNode::Map { key, value: val }, ConstValue::Map(pairs)) => {
                let entries = pairs
                    .iter()
                    .map(|(k, v)| {
                        Ok(format!(
                            "{} => {}",
                            self.render(key, k, false)?,
                            self.render(val, v, false)?
                        ))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{}({})", self.mapper.map_type(ty)?, entries.join(", ")))
            }
            _ => Err(CodegenError::shape_mismatch(ty, value.shape())),
        }
    }

    fn render_base(
        &self,
        ty: &TypeNode,
        base: BaseType,
        value: &ConstValue,
        with_conversion: bool,
    ) -> Result<String> {
        let julia = self
            .mapper
            .base_type(base)
            .ok_or_else(|| CodegenError::unknown_base_type(base.as_str()))?;
        let convert = |julia: &str, literal: String| {
            if with_conversion {
                format!("{julia}({literal})")
            } else {
                literal
            }
        };
        match (base, value) {
            (BaseType::String, ConstValue::String(s)) => Ok(quote(s)),
            (BaseType::Binary, ConstValue::String(s)) => Ok(format!("{}({})", julia, quote(s))),
            (BaseType::Bool, ConstValue::Integer(v)) => Ok((*v > 0).to_string()),
            (BaseType::Byte | BaseType::I16 | BaseType::I32 | BaseType::I64, ConstValue::Integer(v)) => {
                Ok(convert(julia, v.to_string()))
            }
            (BaseType::Double, ConstValue::Double(v)) => Ok(convert(julia, format_double(*v))),
            (BaseType::Double, ConstValue::Integer(v)) => {
                Ok(convert(julia, format_double(*v as f64)))
            }
            _ => Err(CodegenError::shape_mismatch(ty, value.shape())),
        }
    }

    fn elements(&self, elem: &TypeNode, items: &[ConstValue]) -> Result<String> {
        let rendered = items
            .iter()
            .map(|item| self.render(elem, item, false))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(", "))
    }
}

/// Julia literal for a double, with the non-finite values spelled out.
pub fn format_double(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{:?}", v)
    }
}

/// Quote `s` as a Julia string literal.
///
/// `$` is escaped so the literal is never interpolated.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i32_ty() -> TypeNode {
        TypeNode::base(BaseType::I32)
    }

    fn string_ty() -> TypeNode {
        TypeNode::base(BaseType::String)
    }

    fn render(ty: &TypeNode, value: &ConstValue) -> Result<String> {
        ConstRenderer::new().render(ty, value, true)
    }

    #[test]
    fn test_integer_conversion() {
        let renderer = ConstRenderer::new();
        let v = ConstValue::Integer(9853);
        assert_eq!(renderer.render(&i32_ty(), &v, true).unwrap(), "Int32(9853)");
        assert_eq!(renderer.render(&i32_ty(), &v, false).unwrap(), "9853");
        assert_eq!(
            renderer
                .render(&TypeNode::base(BaseType::Byte), &v, true)
                .unwrap(),
            "UInt8(9853)"
        );
    }

    #[test]
    fn test_typedef_resolves_to_target() {
        let ty = TypeNode::typedef("MyInteger", i32_ty());
        assert_eq!(render(&ty, &ConstValue::Integer(7)).unwrap(), "Int32(7)");
    }

    #[test]
    fn test_bool_is_positive_integer() {
        let ty = TypeNode::base(BaseType::Bool);
        assert_eq!(render(&ty, &ConstValue::Integer(1)).unwrap(), "true");
        assert_eq!(render(&ty, &ConstValue::Integer(0)).unwrap(), "false");
        assert_eq!(render(&ty, &ConstValue::Integer(-3)).unwrap(), "false");
    }

    #[test]
    fn test_doubles() {
        let ty = TypeNode::base(BaseType::Double);
        assert_eq!(render(&ty, &ConstValue::Double(3.5)).unwrap(), "Float64(3.5)");
        assert_eq!(render(&ty, &ConstValue::Integer(2)).unwrap(), "Float64(2.0)");
        assert_eq!(
            render(&ty, &ConstValue::Double(f64::NEG_INFINITY)).unwrap(),
            "Float64(-Inf)"
        );
        assert_eq!(render(&ty, &ConstValue::Double(f64::NAN)).unwrap(), "Float64(NaN)");
    }

    #[test]
    fn test_doubles_in_containers_are_bare() {
        let renderer = ConstRenderer::new();
        let ty = TypeNode::base(BaseType::Double);
        assert_eq!(
            renderer.render(&ty, &ConstValue::Double(3.5), false).unwrap(),
            "3.5"
        );
        assert_eq!(
            renderer.render(&ty, &ConstValue::Double(f64::INFINITY), false).unwrap(),
            "Inf"
        );

        let list = TypeNode::list(ty);
        let v = ConstValue::List(vec![ConstValue::Double(1.5), ConstValue::Integer(2)]);
        assert_eq!(renderer.render(&list, &v, true).unwrap(), "Float64[1.5, 2.0]");
    }

    #[test]
    fn test_enum_is_bare_integer() {
        let ty = TypeNode::Enum("Operation".into());
        assert_eq!(render(&ty, &ConstValue::Integer(4)).unwrap(), "4");
    }

    #[test]
    fn test_string_escaping() {
        let v = ConstValue::String("say \"hi\"\n$x \\ \t\u{1}".into());
        assert_eq!(
            render(&string_ty(), &v).unwrap(),
            r#""say \"hi\"\n\$x \\ \t\x01""#
        );
    }

    #[test]
    fn test_binary() {
        let ty = TypeNode::base(BaseType::Binary);
        assert_eq!(
            render(&ty, &ConstValue::String("abc".into())).unwrap(),
            "Vector{UInt8}(\"abc\")"
        );
    }

    #[test]
    fn test_list_elements_are_bare() {
        let ty = TypeNode::list(i32_ty());
        let v = ConstValue::List(vec![ConstValue::Integer(1), ConstValue::Integer(2)]);
        assert_eq!(render(&ty, &v).unwrap(), "Int32[1, 2]");
        assert_eq!(render(&ty, &ConstValue::List(vec![])).unwrap(), "Int32[]");
    }

    #[test]
    fn test_set() {
        let ty = TypeNode::set(string_ty());
        let v = ConstValue::List(vec![ConstValue::String("a".into())]);
        assert_eq!(
            render(&ty, &v).unwrap(),
            "union!(Set{String}(), String[\"a\"])"
        );
    }

    #[test]
    fn test_map_keeps_pair_order() {
        let ty = TypeNode::map(string_ty(), TypeNode::list(i32_ty()));
        let v = ConstValue::Map(vec![
            (
                ConstValue::String("b".into()),
                ConstValue::List(vec![ConstValue::Integer(2)]),
            ),
            (ConstValue::String("a".into()), ConstValue::List(vec![])),
        ]);
        assert_eq!(
            render(&ty, &v).unwrap(),
            "Dict{String,Vector{Int32}}(\"b\" => Int32[2], \"a\" => Int32[])"
        );
        assert_eq!(
            render(&ty, &ConstValue::Map(vec![])).unwrap(),
            "Dict{String,Vector{Int32}}()"
        );
    }

    #[test]
    fn test_struct_constant_rejected() {
        let err = render(&TypeNode::Struct("Work".into()), &ConstValue::Map(vec![])).unwrap_err();
        assert_eq!(
            err,
            CodegenError::StructConstant {
                type_name: "Work".into()
            }
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let err = render(&i32_ty(), &ConstValue::String("x".into())).unwrap_err();
        assert!(matches!(err, CodegenError::ConstShapeMismatch { .. }));

        let err = render(&TypeNode::list(i32_ty()), &ConstValue::Integer(1)).unwrap_err();
        assert!(matches!(err, CodegenError::ConstShapeMismatch { .. }));
    }

    #[test]
    fn test_void_is_unknown_base_type() {
        let err = render(&TypeNode::void(), &ConstValue::Integer(1)).unwrap_err();
        assert!(matches!(err, CodegenError::UnknownBaseType { .. }));
    }
}
