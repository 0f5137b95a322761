//! Julia function builders.

use idlgen_codegen::{CodeFragment, Renderable};

/// Builder for a `function ... end` definition.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    params: Vec<String>,
    body: Vec<CodeFragment>,
    annotate_end: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
            annotate_end: true,
        }
    }

    /// Add a parameter, already spelled (`a::Int32`, `c::CalculatorClientBase`).
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    pub fn node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Close with a bare `end` instead of `end # function <name>`.
    pub fn plain_end(mut self) -> Self {
        self.annotate_end = false;
        self
    }

    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let close = if self.annotate_end {
            format!("end # function {}", self.name)
        } else {
            "end".to_string()
        };
        vec![CodeFragment::block_with_end(
            format!("function {}", self.signature()),
            self.body.clone(),
            close,
        )]
    }
}

/// A one-line definition: `signature = expression`.
#[derive(Debug, Clone)]
pub struct ShortFunction {
    signature: String,
    expr: String,
}

impl ShortFunction {
    pub fn new(signature: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            expr: expr.into(),
        }
    }
}

impl Renderable for ShortFunction {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("{} = {}", self.signature, self.expr))]
    }
}

#[cfg(test)]
mod tests {
    use idlgen_codegen::{CodeBuilder, Indent};

    use super::*;

    fn render(node: &impl Renderable) -> String {
        CodeBuilder::render(Indent::JULIA, node)
    }

    #[test]
    fn test_function() {
        let f = Function::new("add")
            .param("c::CalculatorClientBase")
            .params(["num1::Int32", "num2::Int32"])
            .line("p = c.p")
            .blank()
            .line("nothing");
        assert_eq!(
            render(&f),
            "function add(c::CalculatorClientBase, num1::Int32, num2::Int32)\n    p = c.p\n\n    nothing\nend # function add\n"
        );
    }

    #[test]
    fn test_plain_end() {
        let f = Function::new("CalculatorProcessor").line("p").plain_end();
        assert_eq!(render(&f), "function CalculatorProcessor()\n    p\nend\n");
    }

    #[test]
    fn test_short_function() {
        let f = ShortFunction::new("distribute(p::CalculatorProcessor)", "distribute(p.tp)");
        assert_eq!(render(&f), "distribute(p::CalculatorProcessor) = distribute(p.tp)\n");
    }
}
