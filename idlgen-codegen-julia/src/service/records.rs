//! Request and response records of a service method.

use idlgen_codegen::{CodeFragment, GenerationContext, Renderable, Result};
use idlgen_ir::{Field, FunctionDef, RecordKind};

use super::shape::{DispatchShape, MethodPlan};
use crate::record::RecordCode;

/// The `<fn>_args` record and, unless one-way, the `<fn>_result` record.
#[derive(Debug, Clone)]
pub struct MethodRecords {
    method: String,
    args: RecordCode,
    result: Option<RecordCode>,
}

impl MethodRecords {
    pub fn build(
        ctx: &mut GenerationContext,
        function: &FunctionDef,
        plan: &MethodPlan,
    ) -> Result<Self> {
        let args = RecordCode::build(ctx, &plan.args_record(), RecordKind::Struct, &function.args)?;
        let result = match &plan.shape {
            DispatchShape::OneWay => None,
            DispatchShape::TwoWay { returns, throws } => {
                let name = plan.result_record();
                let mut fields = Vec::with_capacity(function.throws.len() + 1);
                if returns.is_some() {
                    fields.push(Field::new(0, "success", function.returns.clone()).optional());
                }
                fields.extend(function.throws.iter().zip(throws).map(|(declared, slot)| {
                    Field {
                        id: slot.id,
                        ..declared.clone()
                    }
                    .optional()
                }));

                let mut record =
                    RecordCode::build(ctx, &name, RecordKind::Struct, &fields)?.always_meta();
                if returns.is_some() {
                    record = record.constructor(format!(
                        "{name}(success) = (o=new(); fillset(o, :success); o.success=success; o)"
                    ));
                }
                Some(record)
            }
        };
        Ok(Self {
            method: plan.name.clone(),
            args,
            result,
        })
    }
}

impl Renderable for MethodRecords {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line(format!(
            "# types encapsulating arguments and return values of method {}",
            self.method
        ))];
        fragments.extend(self.args.to_fragments());
        if let Some(result) = &self.result {
            fragments.push(CodeFragment::blank());
            fragments.extend(result.to_fragments());
        }
        fragments
    }
}
