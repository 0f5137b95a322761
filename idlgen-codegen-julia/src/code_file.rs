//! Whole-file layout for emitted Julia.

use idlgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Julia source file assembled from top-level items.
///
/// Each item is one definition, comment block or pre-rendered chunk;
/// consecutive items are separated by exactly one blank line.
#[derive(Debug)]
pub struct CodeFile {
    indent: Indent,
    items: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            items: Vec::new(),
        }
    }

    pub fn item(mut self, node: impl Renderable) -> Self {
        let fragments = node.to_fragments();
        if !fragments.is_empty() {
            self.items.push(fragments);
        }
        self
    }

    pub fn items<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        nodes.into_iter().fold(self, Self::item)
    }

    /// A block of `#` comment lines.
    pub fn comment<S: AsRef<str>>(self, lines: impl IntoIterator<Item = S>) -> Self {
        let block: Vec<_> = lines
            .into_iter()
            .map(|line| match line.as_ref() {
                "" => CodeFragment::line("#"),
                text => CodeFragment::line(format!("# {text}")),
            })
            .collect();
        self.item(block)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self) -> String {
        let mut code = CodeBuilder::new(self.indent);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                code.blank();
            }
            for fragment in item {
                code.fragment(fragment);
            }
        }
        code.finish()
    }
}

/// Code that was laid out elsewhere, kept line for line.
#[derive(Debug, Clone, Copy)]
pub struct RawCode<'a>(&'a str);

impl<'a> RawCode<'a> {
    pub fn new(code: &'a str) -> Self {
        Self(code)
    }
}

impl Renderable for RawCode<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| match line {
                "" => CodeFragment::Blank,
                line => CodeFragment::line(line),
            })
            .collect()
    }
}
