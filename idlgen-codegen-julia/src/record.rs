//! Record (struct and exception) emission.
//!
//! A record becomes a mutable composite type plus, when the defaults of the
//! runtime would not describe it, a `meta` line. The runtime assumes that all
//! fields are required, numbered by position and have no default; the
//! [`FieldTable`] captures where a record deviates from that.

use idlgen_codegen::{CodegenError, CodeFragment, GenerationContext, Renderable, Result, TypeMapper};
use idlgen_ir::{Field, RecordKind};

use crate::ast::Struct;
use crate::{ConstRenderer, JuliaTypeMapper};

/// One field as the runtime sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    /// Target-safe field name.
    pub name: String,
    /// Julia type of the field.
    pub ty: String,
    pub id: i32,
    pub optional: bool,
    /// Rendered default, with conversion.
    pub default: Option<String>,
}

/// Field metadata for one record, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTable {
    record: String,
    entries: Vec<FieldEntry>,
}

/// What a reader of the `meta` line can recover about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
    pub name: String,
    pub id: i32,
    pub optional: bool,
    pub has_default: bool,
}

impl FieldTable {
    /// Build the table for `fields`, sanitizing names and rendering defaults.
    pub fn build(ctx: &mut GenerationContext, record: &str, fields: &[Field]) -> Result<Self> {
        let mapper = JuliaTypeMapper;
        let renderer = ConstRenderer::new();
        let mut entries = Vec::with_capacity(fields.len());
        for field in fields {
            let name = ctx.sanitize(&field.name);
            let located = |e: CodegenError| e.within(format!("field {}", field.name));
            let ty = mapper.map_type(&field.ty).map_err(located)?;
            let default = field
                .default
                .as_ref()
                .map(|value| renderer.render(&field.ty, value, true))
                .transpose()
                .map_err(located)?;
            entries.push(FieldEntry {
                name,
                ty,
                id: field.id,
                optional: field.is_optional(),
                default,
            });
        }
        Ok(Self {
            record: record.to_string(),
            entries,
        })
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the optional fields.
    pub fn optional_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.optional)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// All ids, but only when some id differs from its 1-based position.
    pub fn explicit_ids(&self) -> Option<Vec<i32>> {
        let positional = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, e)| i64::from(e.id) == i as i64 + 1);
        if positional {
            None
        } else {
            Some(self.entries.iter().map(|e| e.id).collect())
        }
    }

    /// Fields with a default, paired with the rendered value.
    pub fn defaults(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter_map(|e| e.default.as_deref().map(|d| (e.name.as_str(), d)))
            .collect()
    }

    /// Whether a `meta` line must be emitted.
    pub fn needs_meta(&self) -> bool {
        !self.optional_names().is_empty()
            || self.explicit_ids().is_some()
            || !self.defaults().is_empty()
    }

    /// The `meta(t::Type{X}) = ...` line, listing ids only when needed.
    pub fn meta_line(&self) -> String {
        self.render_meta(self.explicit_ids())
    }

    /// The `meta` line with every id spelled out.
    pub fn full_meta_line(&self) -> String {
        self.render_meta(Some(self.entries.iter().map(|e| e.id).collect()))
    }

    fn render_meta(&self, ids: Option<Vec<i32>>) -> String {
        let optional = self
            .optional_names()
            .iter()
            .map(|n| format!(":{}", n))
            .collect::<Vec<_>>()
            .join(",");
        let ids = ids
            .map(|ids| {
                ids.iter()
                    .map(i32::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();
        let defaults = self
            .defaults()
            .iter()
            .map(|(name, value)| format!(":{} => {}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "meta(t::Type{{{name}}}) = meta(t, Symbol[{optional}], Int[{ids}], Dict{{Symbol,Any}}({defaults}))",
            name = self.record,
        )
    }

    /// Recover per-field metadata from the three `meta` views alone.
    ///
    /// Field order and names come from the struct body; everything else is
    /// read back the way the runtime reads it.
    pub fn summaries(&self) -> Vec<FieldSummary> {
        let optional = self.optional_names();
        let ids = self.explicit_ids();
        let defaults = self.defaults();
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| FieldSummary {
                name: e.name.clone(),
                id: ids.as_ref().map_or(i as i32 + 1, |ids| ids[i]),
                optional: optional.contains(&e.name.as_str()),
                has_default: defaults.iter().any(|(n, _)| *n == e.name),
            })
            .collect()
    }
}

/// A record ready to be written out.
#[derive(Debug, Clone)]
pub struct RecordCode {
    decl: Struct,
    table: FieldTable,
    always_meta: bool,
}

impl RecordCode {
    /// Build a record declaration named `name` (already target-safe).
    pub fn build(
        ctx: &mut GenerationContext,
        name: &str,
        kind: RecordKind,
        fields: &[Field],
    ) -> Result<Self> {
        let table = FieldTable::build(ctx, name, fields)?;
        let mut decl = Struct::mutable(name);
        if kind == RecordKind::Exception {
            decl = decl.subtype_of("Exception");
        }
        for entry in table.entries() {
            decl = decl.field(&entry.name, &entry.ty);
        }
        if !table.is_empty() {
            decl = decl.constructor(format!("{}() = (o=new(); fillunset(o); o)", name));
        }
        Ok(Self {
            decl,
            table,
            always_meta: false,
        })
    }

    /// Emit the `meta` line with all ids, even when it only restates the
    /// runtime defaults.
    pub fn always_meta(mut self) -> Self {
        self.always_meta = true;
        self
    }

    /// Add an inner constructor after the default one.
    pub fn constructor(mut self, line: impl Into<String>) -> Self {
        self.decl = self.decl.constructor(line);
        self
    }

    pub fn table(&self) -> &FieldTable {
        &self.table
    }
}

impl Renderable for RecordCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.decl.to_fragments();
        if self.always_meta {
            fragments.push(CodeFragment::line(self.table.full_meta_line()));
        } else if self.table.needs_meta() {
            fragments.push(CodeFragment::line(self.table.meta_line()));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use idlgen_ir::{BaseType, ConstValue, TypeNode};

    use super::*;
    use crate::JULIA_NAMING;

    fn i32_ty() -> TypeNode {
        TypeNode::base(BaseType::I32)
    }

    fn ctx() -> GenerationContext {
        GenerationContext::new("tutorial", JULIA_NAMING)
    }

    #[test]
    fn test_plain_record_has_no_meta() {
        let fields = vec![Field::new(1, "a", i32_ty()), Field::new(2, "b", i32_ty())];
        let mut ctx = ctx();
        let record = RecordCode::build(&mut ctx, "Pair", RecordKind::Struct, &fields).unwrap();
        assert!(!record.table().needs_meta());
        assert_eq!(
            ctx.render(&record),
            "mutable struct Pair\n    a::Int32\n    b::Int32\n    Pair() = (o=new(); fillunset(o); o)\nend # mutable struct Pair\n"
        );
    }

    #[test]
    fn test_out_of_order_ids_are_listed() {
        let fields = vec![
            Field::new(1, "a", i32_ty()),
            Field::new(3, "b", i32_ty()),
            Field::new(2, "c", i32_ty()),
        ];
        let table = FieldTable::build(&mut ctx(), "X", &fields).unwrap();
        assert_eq!(table.explicit_ids(), Some(vec![1, 3, 2]));
        assert_eq!(
            table.meta_line(),
            "meta(t::Type{X}) = meta(t, Symbol[], Int[1,3,2], Dict{Symbol,Any}())"
        );
    }

    #[test]
    fn test_always_meta_lists_positional_ids() {
        let fields = vec![
            Field::new(1, "a", i32_ty()).optional(),
            Field::new(2, "b", i32_ty()).optional(),
        ];
        let mut ctx = ctx();
        let record = RecordCode::build(&mut ctx, "Y", RecordKind::Struct, &fields)
            .unwrap()
            .always_meta();
        assert_eq!(record.table().explicit_ids(), None);
        assert!(ctx.render(&record).ends_with(
            "meta(t::Type{Y}) = meta(t, Symbol[:a,:b], Int[1,2], Dict{Symbol,Any}())\n"
        ));
    }

    #[test]
    fn test_optional_and_defaults() {
        let fields = vec![
            Field::new(1, "num1", i32_ty()).with_default(ConstValue::Integer(0)),
            Field::new(2, "num2", i32_ty()),
            Field::new(3, "op", TypeNode::Enum("Operation".into())),
            Field::new(4, "comment", TypeNode::base(BaseType::String)).optional(),
        ];
        let table = FieldTable::build(&mut ctx(), "Work", &fields).unwrap();
        assert_eq!(
            table.meta_line(),
            "meta(t::Type{Work}) = meta(t, Symbol[:comment], Int[], Dict{Symbol,Any}(:num1 => Int32(0)))"
        );
    }

    #[test]
    fn test_summaries_reconstruct_fields() {
        let fields = vec![
            Field::new(2, "end", i32_ty()).with_default(ConstValue::Integer(5)),
            Field::new(1, "b", TypeNode::base(BaseType::String)).optional(),
            Field::new(7, "c", TypeNode::list(i32_ty())).required(),
        ];
        let table = FieldTable::build(&mut ctx(), "X", &fields).unwrap();
        let summaries = table.summaries();

        let expected: Vec<FieldSummary> = fields
            .iter()
            .map(|f| FieldSummary {
                name: JULIA_NAMING.safe_name(&f.name),
                id: f.id,
                optional: f.is_optional(),
                has_default: f.default.is_some(),
            })
            .collect();
        assert_eq!(summaries, expected);
    }

    #[test]
    fn test_exception_record() {
        let fields = vec![Field::new(1, "why", TypeNode::base(BaseType::String))];
        let mut ctx = ctx();
        let record = RecordCode::build(&mut ctx, "InvalidOperation", RecordKind::Exception, &fields)
            .unwrap();
        assert!(
            ctx.render(&record)
                .starts_with("mutable struct InvalidOperation <: Exception\n")
        );
    }

    #[test]
    fn test_empty_record_has_no_constructor() {
        let mut ctx = ctx();
        let record = RecordCode::build(&mut ctx, "Empty", RecordKind::Struct, &[]).unwrap();
        assert_eq!(
            ctx.render(&record),
            "mutable struct Empty\nend # mutable struct Empty\n"
        );
    }

    #[test]
    fn test_bad_field_type_is_located() {
        let fields = vec![Field::new(1, "nothing_here", TypeNode::void())];
        let err = FieldTable::build(&mut ctx(), "X", &fields).unwrap_err();
        assert_eq!(err.to_string(), "field nothing_here: unknown base type 'void'");
    }
}
