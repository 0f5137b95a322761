//! Collects a run's files so they can be previewed or written together.
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::from_generated(&types, FileCategory::Generated));
//! registry.register(FileEntry::from_generated(&stub, FileCategory::Handler));
//! let outcome = registry.write_all(&output_dir)?;
//! ```

use std::path::Path;

use eyre::Result;
use idlgen_core::{GeneratedFile, Overwrite, WriteResult, write_with};

/// Write phase of a file. Earlier phases are written first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Constants, types and service files.
    Generated,
    /// The module file including everything else.
    Entry,
    /// Stubs the user fills in.
    Handler,
}

impl FileCategory {
    fn overwrite(self) -> Overwrite {
        match self {
            Self::Handler => Overwrite::IfMissing,
            Self::Generated | Self::Entry => Overwrite::Always,
        }
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative to the output directory, `/`-separated.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
    pub overwrite: Overwrite,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>, category: FileCategory) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
            overwrite: category.overwrite(),
        }
    }

    /// Render `file` with its header; its own rules decide overwriting.
    pub fn from_generated(file: &impl GeneratedFile, category: FileCategory) -> Self {
        let path = file.path(Path::new(""));
        let path = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self {
            path,
            content: file.contents(),
            category,
            overwrite: file.rules().overwrite,
        }
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_with(&base.join(&self.path), &self.content, self.overwrite)
    }
}

/// Files of one run, kept in registration order within each category.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Entries in write order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.category);
        ordered.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry under `base`, stopping at the first I/O error.
    pub fn write_all(&self, base: &Path) -> Result<WriteOutcome> {
        let mut outcome = WriteOutcome::default();
        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => outcome.written.push(entry.path.clone()),
                WriteResult::Skipped => {
                    tracing::info!(path = %entry.path, "keeping existing file");
                    outcome.skipped.push(entry.path.clone());
                }
            }
        }
        Ok(outcome)
    }
}

/// Paths touched by [`FileRegistry::write_all`].
#[derive(Debug, Default)]
pub struct WriteOutcome {
    pub written: Vec<String>,
    /// Create-once files that already existed.
    pub skipped: Vec<String>,
}
