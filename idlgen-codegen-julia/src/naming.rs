//! Julia-specific naming conventions.

use idlgen_codegen::language::{Escape, NamingConvention};

/// Julia keywords, escaped with a leading underscore.
///
/// The list includes keywords retired in Julia 1.0 (`type`, `immutable`,
/// `typealias`).
pub const JULIA_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "if",
        "else",
        "elseif",
        "while",
        "for",
        "begin",
        "end",
        "quote",
        "try",
        "catch",
        "return",
        "local",
        "abstract",
        "function",
        "macro",
        "ccall",
        "finally",
        "typealias",
        "break",
        "continue",
        "type",
        "global",
        "module",
        "using",
        "import",
        "export",
        "const",
        "let",
        "bitstype",
        "do",
        "baremodule",
        "importall",
        "immutable",
        // Julia 1.x additions
        "struct",
        "mutable",
        "primitive",
        "where",
        "true",
        "false",
    ],
    escape: Escape::Prefix("_"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_escaped() {
        assert_eq!(JULIA_NAMING.safe_name("end"), "_end");
        assert_eq!(JULIA_NAMING.safe_name("struct"), "_struct");
        assert_eq!(JULIA_NAMING.safe_name("typealias"), "_typealias");
    }

    #[test]
    fn test_ordinary_names_untouched() {
        assert_eq!(JULIA_NAMING.safe_name("Work"), "Work");
        assert_eq!(JULIA_NAMING.safe_name("End"), "End");
        assert_eq!(JULIA_NAMING.safe_name("ending"), "ending");
    }
}
