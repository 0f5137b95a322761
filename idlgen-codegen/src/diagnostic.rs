//! Non-fatal findings of a generation pass.
//!
//! Every diagnostic is a warning: a pass that reports them still produces
//! every file. Fatal problems are [`CodegenError`]s instead.
//!
//! [`CodegenError`]: crate::CodegenError

use std::fmt;

use serde::Serialize;

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An identifier collided with a target keyword and was escaped.
    ReservedWord { name: String, renamed: String },
    /// A one-way method declares a return type or exceptions.
    OneWayResult { method: String },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedWord { name, renamed } => write!(
                f,
                "'{name}' is a reserved word; it is generated as '{renamed}'. Consider renaming."
            ),
            Self::OneWayResult { method } => write!(
                f,
                "one-way method '{method}' declares a result; callers never receive it"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    /// Where in the program, e.g. `program tutorial`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    pub fn reserved_word(name: impl Into<String>, renamed: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::ReservedWord {
            name: name.into(),
            renamed: renamed.into(),
        })
    }

    pub fn oneway_result(method: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::OneWayResult {
            method: method.into(),
        })
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.kind)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_word_message() {
        let diag = Diagnostic::reserved_word("end", "_end");
        assert_eq!(
            diag.message(),
            "'end' is a reserved word; it is generated as '_end'. Consider renaming."
        );
    }

    #[test]
    fn test_display_with_location() {
        let diag = Diagnostic::oneway_result("zip").at("program tutorial");
        assert_eq!(
            diag.to_string(),
            "warning: one-way method 'zip' declares a result; callers never receive it (at program tutorial)"
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Diagnostic::oneway_result("zip")).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"one_way_result","method":"zip","location":null}"#
        );
    }
}
