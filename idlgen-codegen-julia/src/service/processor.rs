//! Server side: dispatch wrappers and the service processor.

use idlgen_codegen::{CodeFragment, Renderable};

use super::ParentRef;
use super::shape::{DispatchShape, MethodPlan, fresh};
use crate::ast::{Function, ShortFunction, Struct, TryCatch};
use crate::const_value::quote;

/// Wrapper `_<fn>(inp::<fn>_args)` adapting a handler to the processor.
pub struct Dispatcher<'a> {
    plan: &'a MethodPlan,
}

impl<'a> Dispatcher<'a> {
    pub fn new(plan: &'a MethodPlan) -> Self {
        Self { plan }
    }
}

impl Renderable for Dispatcher<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let plan = self.plan;
        let taken = [plan.name.as_str()];
        let inp = fresh("inp", &taken);
        let signature = format!("{}({}::{})", plan.dispatcher(), inp, plan.args_record());
        let call = format!(
            "{}({})",
            plan.name,
            plan.params
                .iter()
                .map(|p| format!("{}.{}", inp, p.name))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let result = plan.result_record();

        match &plan.shape {
            DispatchShape::OneWay => Function::new(plan.dispatcher())
                .param(format!("{}::{}", inp, plan.args_record()))
                .node(TryCatch::new().line(call))
                .line("nothing")
                .to_fragments(),
            DispatchShape::TwoWay { returns, throws } if throws.is_empty() => {
                let expr = match returns {
                    Some(_) => format!("{}({})", result, call),
                    None => format!("({}; {}())", call, result),
                };
                ShortFunction::new(signature, expr).to_fragments()
            }
            DispatchShape::TwoWay { returns, throws } => {
                let ret = fresh("result", &taken);
                let ex = fresh("ex", &taken);
                let exret = fresh("exret", &taken);

                let mut guarded = match returns {
                    Some(_) => TryCatch::new()
                        .line(format!("{} = {}", ret, call))
                        .line(format!("return {}({})", result, ret)),
                    None => TryCatch::new()
                        .line(call)
                        .line(format!("return {}()", result)),
                }
                .catch_as(&ex)
                .handler_line(format!("{} = {}()", exret, result));
                for slot in throws {
                    guarded = guarded.handler_line(format!(
                        "isa({ex}, {ty}) && (set_field!({exret}, :{field}, {ex}); return {exret})",
                        ty = slot.ty,
                        field = slot.field,
                    ));
                }
                guarded = guarded.handler_line("rethrow()");

                Function::new(plan.dispatcher())
                    .param(format!("{}::{}", inp, plan.args_record()))
                    .node(guarded)
                    .to_fragments()
            }
        }
    }
}

/// `<Svc>Processor` registering every method with the runtime.
pub struct Processor<'a> {
    service: &'a str,
    parent: Option<&'a ParentRef>,
    plans: &'a [MethodPlan],
}

impl<'a> Processor<'a> {
    pub fn new(service: &'a str, parent: Option<&'a ParentRef>, plans: &'a [MethodPlan]) -> Self {
        Self {
            service,
            parent,
            plans,
        }
    }

    fn name(&self) -> String {
        format!("{}Processor", self.service)
    }
}

impl Renderable for Processor<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let name = self.name();

        let mut constructor = Function::new(&name)
            .line("p = new(ThriftProcessor())")
            .plain_end();
        for plan in self.plans {
            let result = match plan.shape {
                DispatchShape::OneWay => "Nothing".to_string(),
                DispatchShape::TwoWay { .. } => plan.result_record(),
            };
            constructor = constructor.line(format!(
                "handle(p.tp, ThriftHandler({}, {}, {}, {}))",
                quote(&plan.wire_name),
                plan.dispatcher(),
                plan.args_record(),
                result
            ));
        }
        if let Some(parent) = self.parent {
            constructor = constructor.line(format!(
                "extend(p.tp, {}().tp) # using {}",
                parent.qualified("Processor"),
                parent.name
            ));
        }
        constructor = constructor.line("p");

        let mut fragments = vec![CodeFragment::line(format!(
            "# Processor for {} service (to be used in server implementation)",
            self.service
        ))];
        for plan in self.plans {
            fragments.extend(Dispatcher::new(plan).to_fragments());
        }
        fragments.extend(
            Struct::mutable(&name)
                .subtype_of("TProcessor")
                .field("tp", "ThriftProcessor")
                .constructor_node(constructor)
                .to_fragments(),
        );
        fragments.push(CodeFragment::line(format!(
            "process(p::{name}, inp::TProtocol, outp::TProtocol) = process(p.tp, inp, outp)"
        )));
        fragments.push(CodeFragment::line(format!(
            "distribute(p::{name}) = distribute(p.tp)"
        )));
        fragments
    }
}
