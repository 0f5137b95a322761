//! Service scaffolding: records, processor, client and handler notes.
//!
//! Each service becomes one `<Svc>.jl` file. Its client supertype goes to the
//! types file so derived services, included later, can alias it.

mod client;
mod handlers;
mod processor;
mod records;
mod shape;

pub use client::{Client, ClientMethod, client_base};
pub use handlers::{HandlerSignature, UserComments};
pub use processor::{Dispatcher, Processor};
pub use records::MethodRecords;
pub use shape::{DispatchShape, ExceptionSlot, MethodPlan, Param};

use idlgen_codegen::{Export, GenerationContext, Result, ServiceUnit};
use idlgen_ir::ServiceDef;

use crate::code_file::CodeFile;

/// The service a service extends, possibly from an included program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    /// Module of the included program, when qualified (`shared.SharedService`).
    pub module: Option<String>,
    pub name: String,
}

impl ParentRef {
    pub fn new(module: Option<String>, name: String) -> Self {
        Self { module, name }
    }

    /// Parse `Service` or `program.Service`, sanitizing both parts.
    pub fn parse(ctx: &mut GenerationContext, raw: &str) -> Self {
        match raw.rsplit_once('.') {
            Some((module, name)) => Self::new(Some(ctx.sanitize(module)), ctx.sanitize(name)),
            None => Self::new(None, ctx.sanitize(raw)),
        }
    }

    /// `<Parent><suffix>`, qualified with the parent's module when known.
    pub fn qualified(&self, suffix: &str) -> String {
        match &self.module {
            Some(module) => format!("{}.{}{}", module, self.name, suffix),
            None => format!("{}{}", self.name, suffix),
        }
    }
}

/// Emit one service and register it with the context.
///
/// Returns the handler signatures so a stub file can be written for them.
pub fn emit_service(ctx: &mut GenerationContext, service: &ServiceDef) -> Result<Vec<HandlerSignature>> {
    emit(ctx, service).map_err(|e| e.within(format!("service {}", service.name)))
}

fn emit(ctx: &mut GenerationContext, service: &ServiceDef) -> Result<Vec<HandlerSignature>> {
    let name = ctx.sanitize(&service.name);
    let parent = service
        .extends
        .as_deref()
        .map(|raw| ParentRef::parse(ctx, raw));

    let mut plans = Vec::with_capacity(service.functions.len());
    let mut records = Vec::with_capacity(service.functions.len());
    for function in &service.functions {
        let plan = MethodPlan::resolve(ctx, function)
            .map_err(|e| e.within(format!("function {}", function.name)))?;
        records.push(
            MethodRecords::build(ctx, function, &plan)
                .map_err(|e| e.within(format!("function {}", function.name)))?,
        );
        plans.push(plan);
    }
    let handlers: Vec<HandlerSignature> = plans
        .iter()
        .map(|plan| HandlerSignature::from_plan(&name, plan))
        .collect();

    tracing::debug!(
        service = %name,
        methods = plans.len(),
        extends = ?parent.as_ref().map(|p| p.qualified("")),
        "emitting service"
    );

    let extends = parent
        .iter()
        .map(|parent| format!("service extends {}", parent.qualified("")));
    let file = CodeFile::new(ctx.indent())
        .comment(extends)
        .items(records.iter())
        .item(Processor::new(&name, parent.as_ref(), &plans))
        .item(UserComments::new(&handlers))
        .item(Client::new(&name))
        .items(plans.iter().map(|plan| ClientMethod::new(&name, plan)));

    let mut symbols = vec![
        format!("{}Processor", name),
        format!("{}Client", name),
        format!("{}ClientBase", name),
    ];
    symbols.extend(plans.iter().map(|plan| plan.name.clone()));

    let code = file.render();
    ctx.define_service(ServiceUnit {
        file: format!("{}.jl", name),
        code,
        types_code: client_base(&name, parent.as_ref()),
        export: Export::symbols(symbols, format!("service {}", name)),
        name,
    });
    Ok(handlers)
}
