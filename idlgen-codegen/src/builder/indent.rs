//! Indentation unit for emitted code.

/// What one level of nesting looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Runs of spaces; widths outside 1..=8 are clamped.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, as the Julia style guide asks.
    pub const JULIA: Self = Self::Spaces(4);

    /// Append `depth` levels of indentation to `out`.
    pub fn write(&self, out: &mut String, depth: usize) {
        match *self {
            Self::Spaces(width) => {
                let width = usize::from(width.clamp(1, 8));
                out.extend(std::iter::repeat_n(' ', width * depth));
            }
            Self::Tab => out.extend(std::iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JULIA
    }
}
