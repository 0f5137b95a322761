//! Handler signatures the user implements on the server side.

use idlgen_codegen::{CodeFragment, Renderable};

use super::shape::{DispatchShape, MethodPlan, Param};
use crate::ast::Function;
use crate::const_value::quote;

/// A server-side method the processor dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSignature {
    pub service: String,
    pub name: String,
    pub params: Vec<Param>,
    /// Julia return type, `None` for void and one-way methods.
    pub returns: Option<String>,
    /// Declared exceptions as `(field, type)`.
    pub throws: Vec<(String, String)>,
    pub oneway: bool,
}

impl HandlerSignature {
    pub fn from_plan(service: &str, plan: &MethodPlan) -> Self {
        let (returns, throws, oneway) = match &plan.shape {
            DispatchShape::OneWay => (None, Vec::new(), true),
            DispatchShape::TwoWay { returns, throws } => (
                returns.clone(),
                throws
                    .iter()
                    .map(|slot| (slot.field.clone(), slot.ty.clone()))
                    .collect(),
                false,
            ),
        };
        Self {
            service: service.to_string(),
            name: plan.name.clone(),
            params: plan.params.clone(),
            returns,
            throws,
            oneway,
        }
    }

    fn signature(&self) -> String {
        format!(
            "{}({})",
            self.name,
            self.params
                .iter()
                .map(Param::typed)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn notes(&self) -> Vec<String> {
        let mut notes = vec![format!(
            "returns {}",
            self.returns.as_deref().unwrap_or("nothing")
        )];
        if self.oneway {
            notes.push("one-way: the caller does not wait for completion".to_string());
        }
        notes.extend(
            self.throws
                .iter()
                .map(|(field, ty)| format!("throws {}::{}", field, ty)),
        );
        notes
    }

    /// Placeholder definition for the handler stub file.
    pub fn stub(&self) -> Function {
        let mut stub = Function::new(&self.name).params(self.params.iter().map(Param::typed));
        for note in self.notes() {
            stub = stub.line(format!("# {}", note));
        }
        stub.line(format!(
            "error({})",
            quote(&format!("{}.{} is not implemented", self.service, self.name))
        ))
    }
}

/// Commented list of the handlers a service expects.
pub struct UserComments<'a> {
    handlers: &'a [HandlerSignature],
}

impl<'a> UserComments<'a> {
    pub fn new(handlers: &'a [HandlerSignature]) -> Self {
        Self { handlers }
    }
}

impl Renderable for UserComments<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line(
            "# Server side methods to be defined by user:",
        )];
        for handler in self.handlers {
            fragments.push(CodeFragment::line(format!(
                "# function {}",
                handler.signature()
            )));
            fragments.extend(
                handler
                    .notes()
                    .into_iter()
                    .map(|note| CodeFragment::line(format!("#     # {}", note))),
            );
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use idlgen_codegen::GenerationContext;
    use idlgen_ir::{BaseType, Field, FunctionDef, TypeNode};

    use super::*;
    use crate::JULIA_NAMING;

    fn handler(function: &FunctionDef) -> HandlerSignature {
        let mut ctx = GenerationContext::new("tutorial", JULIA_NAMING);
        let plan = MethodPlan::resolve(&mut ctx, function).unwrap();
        HandlerSignature::from_plan("Calculator", &plan)
    }

    fn i32_ty() -> TypeNode {
        TypeNode::base(BaseType::I32)
    }

    #[test]
    fn test_user_comments() {
        let handlers = vec![
            handler(&FunctionDef::new("ping", TypeNode::void())),
            handler(
                &FunctionDef::new("calculate", i32_ty())
                    .arg(Field::new(1, "logid", i32_ty()))
                    .throws(Field::new(1, "ouch", TypeNode::Struct("InvalidOperation".into()))),
            ),
        ];
        let code = GenerationContext::new("tutorial", JULIA_NAMING).render(&UserComments::new(&handlers));
        insta::assert_snapshot!(code, @r"
        # Server side methods to be defined by user:
        # function ping()
        #     # returns nothing
        # function calculate(logid::Int32)
        #     # returns Int32
        #     # throws ouch::InvalidOperation
        ");
    }

    #[test]
    fn test_stub() {
        let add = handler(
            &FunctionDef::new("add", i32_ty())
                .arg(Field::new(1, "num1", i32_ty()))
                .arg(Field::new(2, "num2", i32_ty())),
        );
        let code = GenerationContext::new("tutorial", JULIA_NAMING).render(&add.stub());
        insta::assert_snapshot!(code, @r#"
        function add(num1::Int32, num2::Int32)
            # returns Int32
            error("Calculator.add is not implemented")
        end # function add
        "#);
    }

    #[test]
    fn test_oneway_note() {
        let zip = handler(&FunctionDef::new("zip", TypeNode::void()).oneway());
        assert!(zip.oneway);
        assert!(zip.notes().iter().any(|n| n.starts_with("one-way")));
    }
}
