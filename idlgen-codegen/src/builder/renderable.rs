//! Indentation-free description of emitted code.

/// One piece of emitted code, independent of the depth it lands at.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    /// Empty line; never carries indentation.
    Blank,
    /// Fragments one level deeper than their surroundings.
    Indented(Vec<CodeFragment>),
    /// `opener`, an indented body, then the closing `end` line.
    Block {
        opener: String,
        body: Vec<CodeFragment>,
        end: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn indented(body: Vec<CodeFragment>) -> Self {
        Self::Indented(body)
    }

    /// A block closed by a bare `end`.
    pub fn block(opener: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block_with_end(opener, body, "end")
    }

    /// A block closed by `end` plus whatever trailer the caller wants,
    /// e.g. `end # function ping`.
    pub fn block_with_end(
        opener: impl Into<String>,
        body: Vec<CodeFragment>,
        end: impl Into<String>,
    ) -> Self {
        Self::Block {
            opener: opener.into(),
            body,
            end: end.into(),
        }
    }

    /// Number of output lines this fragment produces.
    pub fn line_count(&self) -> usize {
        match self {
            Self::Line(_) | Self::Blank => 1,
            Self::Indented(body) => body.iter().map(Self::line_count).sum(),
            Self::Block { body, .. } => 2 + body.iter().map(Self::line_count).sum::<usize>(),
        }
    }
}

/// Anything that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_closes_with_bare_end() {
        let CodeFragment::Block { opener, end, .. } =
            CodeFragment::block("function ping()", vec![CodeFragment::line("nothing")])
        else {
            panic!("expected a block");
        };
        assert_eq!(opener, "function ping()");
        assert_eq!(end, "end");
    }

    #[test]
    fn test_line_count() {
        let node = CodeFragment::block_with_end(
            "try",
            vec![
                CodeFragment::line("a()"),
                CodeFragment::indented(vec![CodeFragment::line("b()"), CodeFragment::blank()]),
            ],
            "end # try",
        );
        assert_eq!(node.line_count(), 5);
    }
}
