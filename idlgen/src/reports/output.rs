//! Where reports go.
//!
//! Reports call the semantic methods of [`Output`]; an implementation only
//! decides where finished lines end up.

/// Line sink with the report vocabulary layered on top.
pub trait Output {
    /// Emit one line of regular output.
    fn out(&mut self, line: &str);

    /// Emit one line of diagnostic output.
    fn err(&mut self, line: &str);

    fn key_value(&mut self, key: &str, value: &str) {
        self.out(&format!("{key}: {value}"));
    }

    fn section(&mut self, name: &str) {
        self.out(&format!("{name}:"));
    }

    /// A file that was produced.
    fn added_item(&mut self, text: &str) {
        self.out(&format!("  + {text}"));
    }

    /// A file that was left untouched.
    fn kept_item(&mut self, text: &str) {
        self.out(&format!("  = {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.err(&format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.out(&format!("── {label} ──"));
    }

    /// Text printed as is; a trailing newline in `text` yields a blank line.
    fn preformatted(&mut self, text: &str) {
        self.out(text);
    }

    fn newline(&mut self) {
        self.out("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Standard output and standard error.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn out(&mut self, line: &str) {
        println!("{line}");
    }

    fn err(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

/// Output captured into strings, used by tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn out(&mut self, line: &str) {
        self.stdout.push_str(line);
        self.stdout.push('\n');
    }

    fn err(&mut self, line: &str) {
        self.stderr.push_str(line);
        self.stderr.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_lines() {
        let mut out = BufferOutput::default();
        out.section("Written");
        out.added_item("tutorial/tutorial.jl");
        out.kept_item("tutorial/tutorial_impl.jl");
        out.divider("tutorial/tutorial.jl");
        out.warning("renamed 'end'");

        assert_eq!(
            out.stdout,
            "Written:\n  + tutorial/tutorial.jl\n  = tutorial/tutorial_impl.jl\n── tutorial/tutorial.jl ──\n"
        );
        assert_eq!(out.stderr, "warning: renamed 'end'\n");
    }
}
