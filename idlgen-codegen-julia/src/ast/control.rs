//! Julia control flow builders.

use idlgen_codegen::{CodeFragment, Renderable};

/// A `try ... catch ... end` block.
#[derive(Debug, Clone)]
pub struct TryCatch {
    body: Vec<CodeFragment>,
    binding: Option<String>,
    handler: Vec<CodeFragment>,
}

impl TryCatch {
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            binding: None,
            handler: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Bind the caught exception to `name`.
    pub fn catch_as(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }

    pub fn handler_line(mut self, line: impl Into<String>) -> Self {
        self.handler.push(CodeFragment::line(line));
        self
    }
}

impl Default for TryCatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for TryCatch {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let catch = match &self.binding {
            Some(name) => format!("catch {}", name),
            None => "catch".to_string(),
        };
        let mut fragments = vec![
            CodeFragment::line("try"),
            CodeFragment::indented(self.body.clone()),
            CodeFragment::line(catch),
        ];
        if !self.handler.is_empty() {
            fragments.push(CodeFragment::indented(self.handler.clone()));
        }
        fragments.push(CodeFragment::line("end # try"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use idlgen_codegen::{CodeBuilder, Indent};

    use super::*;

    #[test]
    fn test_try_catch() {
        let node = TryCatch::new()
            .line("result = f()")
            .catch_as("ex")
            .handler_line("rethrow()");
        assert_eq!(
            CodeBuilder::render(Indent::JULIA, &node),
            "try\n    result = f()\ncatch ex\n    rethrow()\nend # try\n"
        );
    }

    #[test]
    fn test_swallowing_catch() {
        let node = TryCatch::new().line("zip()");
        assert_eq!(
            CodeBuilder::render(Indent::JULIA, &node),
            "try\n    zip()\ncatch\nend # try\n"
        );
    }
}
