use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// One artifact of a generator run.
pub trait GeneratedFile {
    /// Location under the output root `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// File body without the header.
    fn render(&self) -> String;

    /// Header (when the rules carry one) followed by the body.
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{header}\n{}", self.render()),
            None => self.render(),
        }
    }

    /// Write the file under `base`, honoring its overwrite rule.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with(&self.path(base), &self.contents(), self.rules().overwrite)
    }
}

/// Write `content` to `path` unless `overwrite` says an existing file stays.
pub fn write_with(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    if overwrite == Overwrite::IfMissing && path.exists() {
        tracing::debug!(path = %path.display(), "keeping existing file");
        return Ok(WriteResult::Skipped);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An existing create-once file was left alone.
    Skipped,
}

/// How a file lands on disk.
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Generated output, always replaced and stamped with `header`.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(header),
        }
    }

    /// Hand-edited stub, written only when absent.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// Policy for a file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Regenerated output.
    Always,
    /// User-owned after the first write.
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        name: &'static str,
        body: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("notes").join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules.clone()
        }

        fn render(&self) -> String {
            self.body.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.jl");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_contents_prepends_header() {
        let note = Note {
            name: "a.jl",
            body: "x = 1\n",
            rules: FileRules::generated("# header"),
        };
        assert_eq!(note.contents(), "# header\nx = 1\n");
    }

    #[test]
    fn test_generated_file_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "gen.jl",
            body: "updated",
            rules: FileRules::default(),
        };
        let path = note.path(temp.path());
        write_file(&path, "original").unwrap();

        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_create_once_skips_existing() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "impl.jl",
            body: "stub",
            rules: FileRules::create_once(),
        };
        let path = note.path(temp.path());

        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Written);
        fs::write(&path, "user code").unwrap();
        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user code");
    }
}
