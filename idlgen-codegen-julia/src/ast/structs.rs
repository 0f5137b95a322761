//! Julia composite type builder.

use idlgen_codegen::{CodeFragment, Renderable};

/// Mutability of a composite type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructKind {
    Mutable,
    Immutable,
}

impl StructKind {
    fn keyword(&self) -> &'static str {
        match self {
            StructKind::Mutable => "mutable struct",
            StructKind::Immutable => "struct",
        }
    }
}

/// Builder for a Julia `struct` declaration.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    kind: StructKind,
    supertype: Option<String>,
    fields: Vec<(String, String)>,
    constructors: Vec<CodeFragment>,
    annotate_end: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StructKind::Immutable,
            supertype: None,
            fields: Vec::new(),
            constructors: Vec::new(),
            annotate_end: false,
        }
    }

    pub fn mutable(name: impl Into<String>) -> Self {
        Self {
            kind: StructKind::Mutable,
            annotate_end: true,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subtype_of(mut self, supertype: impl Into<String>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Add a one-line inner constructor.
    pub fn constructor(mut self, line: impl Into<String>) -> Self {
        self.constructors.push(CodeFragment::line(line));
        self
    }

    /// Add a multi-line inner constructor.
    pub fn constructor_node(mut self, node: impl Renderable) -> Self {
        self.constructors.extend(node.to_fragments());
        self
    }

    /// Close with `end # <keyword> <name>` instead of a bare `end`.
    pub fn annotate_end(mut self, annotate: bool) -> Self {
        self.annotate_end = annotate;
        self
    }

    fn header(&self) -> String {
        match &self.supertype {
            Some(sup) => format!("{} {} <: {}", self.kind.keyword(), self.name, sup),
            None => format!("{} {}", self.kind.keyword(), self.name),
        }
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .fields
            .iter()
            .map(|(name, ty)| CodeFragment::line(format!("{}::{}", name, ty)))
            .collect();
        body.extend(self.constructors.iter().cloned());

        let close = if self.annotate_end {
            format!("end # {} {}", self.kind.keyword(), self.name)
        } else {
            "end".to_string()
        };
        vec![CodeFragment::block_with_end(self.header(), body, close)]
    }
}

#[cfg(test)]
mod tests {
    use idlgen_codegen::{CodeBuilder, Indent};

    use super::*;

    fn render(node: &Struct) -> String {
        CodeBuilder::render(Indent::JULIA, node)
    }

    #[test]
    fn test_immutable_struct() {
        let s = Struct::new("_enum_Operation")
            .field("ADD", "Int32")
            .field("SUBTRACT", "Int32");
        assert_eq!(
            render(&s),
            "struct _enum_Operation\n    ADD::Int32\n    SUBTRACT::Int32\nend\n"
        );
    }

    #[test]
    fn test_mutable_struct_with_supertype_and_constructor() {
        let s = Struct::mutable("InvalidOperation")
            .subtype_of("Exception")
            .field("whatOp", "Int32")
            .constructor("InvalidOperation() = (o=new(); fillunset(o); o)");
        assert_eq!(
            render(&s),
            "mutable struct InvalidOperation <: Exception\n    whatOp::Int32\n    InvalidOperation() = (o=new(); fillunset(o); o)\nend # mutable struct InvalidOperation\n"
        );
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(
            render(&Struct::mutable("ping_args")),
            "mutable struct ping_args\nend # mutable struct ping_args\n"
        );
    }
}
