//! Lays fragments out as indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates emitted lines at a tracked nesting depth.
///
/// ```
/// use idlgen_codegen::builder::{CodeBuilder, Indent};
///
/// let mut code = CodeBuilder::new(Indent::JULIA);
/// code.line("function ping()")
///     .nested(|code| {
///         code.line("nothing");
///     })
///     .line("end");
/// assert_eq!(code.finish(), "function ping()\n    nothing\nend\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    /// Render a single node from scratch.
    pub fn render(indent: Indent, node: &impl Renderable) -> String {
        let mut code = Self::new(indent);
        code.emit(node);
        code.finish()
    }

    pub fn line(&mut self, s: impl AsRef<str>) -> &mut Self {
        self.indent.write(&mut self.out, self.depth);
        self.out.push_str(s.as_ref());
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Run `f` one level deeper.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.fragment(&fragment);
        }
        self
    }

    pub fn fragment(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => self.line(s),
            CodeFragment::Blank => self.blank(),
            CodeFragment::Indented(body) => self.nested(|code| {
                body.iter().for_each(|f| {
                    code.fragment(f);
                });
            }),
            CodeFragment::Block { opener, body, end } => self
                .line(opener)
                .nested(|code| {
                    body.iter().for_each(|f| {
                        code.fragment(f);
                    });
                })
                .line(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut code = CodeBuilder::default();
        code.nested(|code| {
            code.line("a = 1").blank().line("b = 2");
        });
        assert_eq!(code.finish(), "    a = 1\n\n    b = 2\n");
    }

    #[test]
    fn test_nested_blocks() {
        let node = CodeFragment::block_with_end(
            "try",
            vec![CodeFragment::block(
                "if x",
                vec![CodeFragment::line("y()")],
            )],
            "end # try",
        );
        assert_eq!(
            CodeBuilder::render(Indent::Spaces(2), &node),
            "try\n  if x\n    y()\n  end\nend # try\n"
        );
    }

    #[test]
    fn test_indented_fragment() {
        let node = vec![
            CodeFragment::line("try"),
            CodeFragment::indented(vec![CodeFragment::line("f()")]),
            CodeFragment::line("catch"),
        ];
        assert_eq!(
            CodeBuilder::render(Indent::Tab, &node),
            "try\n\tf()\ncatch\n"
        );
    }
}
