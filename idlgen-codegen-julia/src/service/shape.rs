//! Per-method dispatch classification.

use idlgen_codegen::{Diagnostic, GenerationContext, Result, TypeMapper};
use idlgen_ir::{Field, FunctionDef};

use crate::JuliaTypeMapper;

/// A declared exception a method may report to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionSlot {
    /// Field of the result record carrying the exception.
    pub field: String,
    /// Julia type tested with `isa`.
    pub ty: String,
    /// Position in the result record, counted from 1 in declaration order.
    /// The declared field id is not carried over.
    pub id: i32,
}

/// How a method travels over the wire and how its outcome is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchShape {
    /// No response is ever sent.
    OneWay,
    /// A response carries either the return value, one declared exception,
    /// or nothing for void methods.
    TwoWay {
        returns: Option<String>,
        /// Tested in declaration order; the first match wins.
        throws: Vec<ExceptionSlot>,
    },
}

impl DispatchShape {
    pub fn is_oneway(&self) -> bool {
        matches!(self, DispatchShape::OneWay)
    }
}

/// A positional parameter: target-safe name and Julia type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn typed(&self) -> String {
        format!("{}::{}", self.name, self.ty)
    }
}

/// Everything the emitters need to know about one method.
#[derive(Debug, Clone)]
pub struct MethodPlan {
    /// Method name on the wire, never rewritten.
    pub wire_name: String,
    /// Target-safe method name.
    pub name: String,
    pub params: Vec<Param>,
    pub shape: DispatchShape,
}

impl MethodPlan {
    pub fn resolve(ctx: &mut GenerationContext, function: &FunctionDef) -> Result<Self> {
        let name = ctx.sanitize(&function.name);
        let params = function
            .args
            .iter()
            .map(|arg| param(ctx, arg))
            .collect::<Result<Vec<_>>>()?;

        let shape = if function.oneway {
            if !function.throws.is_empty() || !function.returns.is_void() {
                let location = format!("program {}", ctx.program());
                ctx.report(Diagnostic::oneway_result(&function.name).at(location));
            }
            DispatchShape::OneWay
        } else {
            let returns = if function.returns.is_void() {
                None
            } else {
                Some(
                    JuliaTypeMapper
                        .map_type(&function.returns)
                        .map_err(|e| e.within("return type"))?,
                )
            };
            let throws = function
                .throws
                .iter()
                .zip(1..)
                .map(|(field, id)| {
                    let Param { name, ty } = param(ctx, field)?;
                    Ok(ExceptionSlot { field: name, ty, id })
                })
                .collect::<Result<Vec<_>>>()?;
            DispatchShape::TwoWay { returns, throws }
        };

        Ok(Self {
            wire_name: function.name.clone(),
            name,
            params,
            shape,
        })
    }

    pub fn args_record(&self) -> String {
        format!("{}_args", self.name)
    }

    pub fn result_record(&self) -> String {
        format!("{}_result", self.name)
    }

    pub fn dispatcher(&self) -> String {
        format!("_{}", self.name)
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }
}

fn param(ctx: &mut GenerationContext, field: &Field) -> Result<Param> {
    let name = ctx.sanitize(&field.name);
    let ty = JuliaTypeMapper
        .map_type(&field.ty)
        .map_err(|e| e.within(format!("field {}", field.name)))?;
    Ok(Param { name, ty })
}

/// `base`, prefixed with underscores until it is not in `taken`.
pub fn fresh(base: &str, taken: &[&str]) -> String {
    let mut name = base.to_string();
    while taken.contains(&name.as_str()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use idlgen_ir::{BaseType, TypeNode};

    use super::*;
    use crate::JULIA_NAMING;

    fn ctx() -> GenerationContext {
        GenerationContext::new("tutorial", JULIA_NAMING)
    }

    #[test]
    fn test_two_way_with_exceptions() {
        let function = FunctionDef::new("calculate", TypeNode::base(BaseType::I32))
            .arg(Field::new(1, "logid", TypeNode::base(BaseType::I32)))
            .arg(Field::new(2, "w", TypeNode::Struct("Work".into())))
            .throws(Field::new(1, "ouch", TypeNode::Struct("InvalidOperation".into())));
        let plan = MethodPlan::resolve(&mut ctx(), &function).unwrap();

        assert_eq!(plan.param_names(), vec!["logid", "w"]);
        assert_eq!(
            plan.shape,
            DispatchShape::TwoWay {
                returns: Some("Int32".into()),
                throws: vec![ExceptionSlot {
                    field: "ouch".into(),
                    ty: "InvalidOperation".into(),
                    id: 1,
                }],
            }
        );
    }

    #[test]
    fn test_oneway_ignores_declared_result() {
        let function = FunctionDef::new("zip", TypeNode::void())
            .throws(Field::new(1, "ouch", TypeNode::Struct("InvalidOperation".into())))
            .oneway();
        let mut ctx = ctx();
        let plan = MethodPlan::resolve(&mut ctx, &function).unwrap();

        assert!(plan.shape.is_oneway());
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(
            ctx.diagnostics()[0].kind,
            idlgen_codegen::DiagnosticKind::OneWayResult {
                method: "zip".into()
            }
        );
    }

    #[test]
    fn test_wire_name_is_not_sanitized() {
        let function = FunctionDef::new("end", TypeNode::void());
        let plan = MethodPlan::resolve(&mut ctx(), &function).unwrap();
        assert_eq!(plan.wire_name, "end");
        assert_eq!(plan.name, "_end");
        assert_eq!(plan.args_record(), "_end_args");
        assert_eq!(plan.dispatcher(), "__end");
    }

    #[test]
    fn test_fresh() {
        assert_eq!(fresh("p", &["a", "b"]), "p");
        assert_eq!(fresh("p", &["p", "_p"]), "__p");
    }
}
