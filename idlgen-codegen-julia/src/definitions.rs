//! Emitters for top-level definitions: typedefs, enums, constants, records.

use idlgen_codegen::{Definition, Export, GenerationContext, Result, TypeMapper};
use idlgen_ir::{ConstDef, EnumDef, RecordDef, TypedefDef};

use crate::ast::Struct;
use crate::record::RecordCode;
use crate::{ConstRenderer, JuliaTypeMapper};

/// `const Alias = T` in the types file.
pub fn emit_typedef(ctx: &mut GenerationContext, typedef: &TypedefDef) -> Result<()> {
    let name = ctx.sanitize(&typedef.name);
    let target = JuliaTypeMapper
        .map_type(&typedef.target)
        .map_err(|e| e.within(format!("typedef {}", typedef.name)))?;
    ctx.define(Definition::types(
        format!("const {} = {}\n", name, target),
        Export::symbol(&name, format!("typedef for {}", target)),
    ));
    Ok(())
}

/// An enum becomes a singleton holding one `Int32` per value.
///
/// ```julia
/// struct _enum_Operation
///     ADD::Int32
/// end
/// const Operation = _enum_Operation(Int32(1))
/// ```
pub fn emit_enum(ctx: &mut GenerationContext, def: &EnumDef) -> Result<()> {
    let name = ctx.sanitize(&def.name);
    let holder = format!("_enum_{}", name);

    let mut decl = Struct::new(&holder);
    let mut values = Vec::with_capacity(def.values.len());
    for value in &def.values {
        decl = decl.field(ctx.sanitize(&value.name), "Int32");
        values.push(format!("Int32({})", value.value));
    }

    let mut code = ctx.render(&decl);
    code.push_str(&format!("const {} = {}({})\n", name, holder, values.join(", ")));
    ctx.define(Definition::types(code, Export::symbol(&name, "enum")));
    Ok(())
}

/// `const NAME = <value>` in the constants file.
pub fn emit_const(ctx: &mut GenerationContext, def: &ConstDef) -> Result<()> {
    let name = ctx.sanitize(&def.name);
    let value = ConstRenderer::new()
        .render(&def.ty, &def.value, true)
        .map_err(|e| e.within(format!("const {}", def.name)))?;
    ctx.define(Definition::constant(
        format!("const {} = {}\n", name, value),
        Export::symbol(&name, "const"),
    ));
    Ok(())
}

/// A struct or exception in the types file.
pub fn emit_record(ctx: &mut GenerationContext, def: &RecordDef) -> Result<()> {
    let name = ctx.sanitize(&def.name);
    let note = if def.is_exception() { "exception" } else { "struct" };
    let record = RecordCode::build(ctx, &name, def.kind, &def.fields)
        .map_err(|e| e.within(format!("{} {}", note, def.name)))?;
    tracing::trace!(record = %name, fields = def.fields.len(), "emitting record");
    let code = ctx.render(&record);
    ctx.define(Definition::types(code, Export::symbol(&name, note)));
    Ok(())
}
