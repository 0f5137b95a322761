//! Reserved-word handling for a target language.

/// How a colliding identifier is made safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    Prefix(&'static str),
    Suffix(&'static str),
}

/// Keywords of a target and the rule applied to identifiers that hit one.
///
/// Identifiers are otherwise emitted verbatim; case is significant.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    pub reserved_words: &'static [&'static str],
    pub escape: Escape,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// `name` itself, or its escaped form when it is reserved.
    pub fn safe_name(&self, name: &str) -> String {
        if !self.is_reserved(name) {
            return name.to_string();
        }
        match self.escape {
            Escape::Prefix(prefix) => format!("{prefix}{name}"),
            Escape::Suffix(suffix) => format!("{name}{suffix}"),
        }
    }
}
