//! Client side: the client type and one callable stub per method.

use idlgen_codegen::{CodeFragment, Renderable};

use super::ParentRef;
use super::shape::{DispatchShape, MethodPlan, fresh};
use crate::ast::{Function, Struct};
use crate::const_value::quote;

/// Supertype declaration for the client, placed in the types file.
///
/// A derived service aliases its parent's base so one handle reaches every
/// inherited method.
pub fn client_base(service: &str, parent: Option<&ParentRef>) -> String {
    match parent {
        Some(parent) => format!(
            "const {}ClientBase = {}\n",
            service,
            parent.qualified("ClientBase")
        ),
        None => format!("abstract type {}ClientBase end\n", service),
    }
}

/// `<Svc>Client <: <Svc>ClientBase` holding the protocol and sequence number.
pub struct Client<'a> {
    service: &'a str,
}

impl<'a> Client<'a> {
    pub fn new(service: &'a str) -> Self {
        Self { service }
    }
}

impl Renderable for Client<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let name = format!("{}Client", self.service);
        let mut fragments = vec![CodeFragment::line(format!(
            "# Client implementation for {} service",
            self.service
        ))];
        fragments.extend(
            Struct::mutable(&name)
                .subtype_of(format!("{}Base", name))
                .field("p", "TProtocol")
                .field("seqid", "Int32")
                .constructor(format!("{}(p::TProtocol) = new(p, 0)", name))
                .to_fragments(),
        );
        fragments
    }
}

/// Local variable names of a client stub, chosen to avoid the parameters.
struct Locals {
    c: String,
    p: String,
    inp: String,
    outp: String,
    fname: String,
    mtype: String,
    rseqid: String,
}

impl Locals {
    fn for_params(taken: &[&str]) -> Self {
        Self {
            c: fresh("c", taken),
            p: fresh("p", taken),
            inp: fresh("inp", taken),
            outp: fresh("outp", taken),
            fname: fresh("fname", taken),
            mtype: fresh("mtype", taken),
            rseqid: fresh("rseqid", taken),
        }
    }
}

/// Callable stub `<fn>(c::<Svc>ClientBase, args...)`.
pub struct ClientMethod<'a> {
    service: &'a str,
    plan: &'a MethodPlan,
}

impl<'a> ClientMethod<'a> {
    pub fn new(service: &'a str, plan: &'a MethodPlan) -> Self {
        Self { service, plan }
    }
}

impl Renderable for ClientMethod<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let plan = self.plan;
        let Locals {
            c,
            p,
            inp,
            outp,
            fname,
            mtype,
            rseqid,
        } = Locals::for_params(&plan.param_names());

        let message_type = match plan.shape {
            DispatchShape::OneWay => "MessageType.ONEWAY",
            DispatchShape::TwoWay { .. } => "MessageType.CALL",
        };

        let mut stub = Function::new(&plan.name)
            .param(format!("{}::{}ClientBase", c, self.service))
            .params(plan.params.iter().map(|param| param.typed()))
            .line(format!("{p} = {c}.p"))
            .line(format!(
                "{c}.seqid = ({c}.seqid < (2^31-1)) ? ({c}.seqid+1) : 0"
            ))
            .line(format!(
                "writeMessageBegin({p}, {}, {message_type}, {c}.seqid)",
                quote(&plan.wire_name)
            ))
            .line(format!("{inp} = {}()", plan.args_record()));
        for param in &plan.params {
            stub = stub.line(format!("set_field!({inp}, :{0}, {0})", param.name));
        }
        stub = stub
            .line(format!("write({p}, {inp})"))
            .line(format!("writeMessageEnd({p})"))
            .line(format!("flush({p}.t)"));

        let stub = match &plan.shape {
            DispatchShape::OneWay => stub.line("nothing"),
            DispatchShape::TwoWay { returns, throws } => {
                let mut stub = stub
                    .blank()
                    .line(format!("({fname}, {mtype}, {rseqid}) = readMessageBegin({p})"))
                    .line(format!(
                        "({mtype} == MessageType.EXCEPTION) && throw(read({p}, TSTRUCT, TApplicationException()))"
                    ))
                    .line(format!(
                        "{outp} = read({p}, TSTRUCT, {}())",
                        plan.result_record()
                    ))
                    .line(format!("readMessageEnd({p})"))
                    .line(format!(
                        "({rseqid} != {c}.seqid) && throw(TApplicationException(ApplicationExceptionType.BAD_SEQUENCE_ID, \"response sequence id ${rseqid} did not match request ($({c}.seqid))\"))"
                    ));
                for slot in throws {
                    stub = stub.line(format!(
                        "has_field({outp}, :{0}) && throw({outp}.{0})",
                        slot.field
                    ));
                }
                match returns {
                    Some(_) => stub
                        .line(format!(
                            "has_field({outp}, :success) && (return {outp}.success)"
                        ))
                        .line(
                            "throw(TApplicationException(ApplicationExceptionType.MISSING_RESULT, \"retrieve failed: unknown result\"))",
                        ),
                    None => stub.line("nothing"),
                }
            }
        };

        let mut fragments = vec![CodeFragment::line(format!(
            "# Client callable method for {}",
            plan.name
        ))];
        fragments.extend(stub.to_fragments());
        fragments
    }
}
