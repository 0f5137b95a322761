//! Generator configuration (`idlgen.toml`).
//!
//! ```toml
//! [generator]
//! out_dir = "gen-jl"
//! indent = 4
//! impl_stub = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Default file name looked up next to the working directory.
pub const CONFIG_FILE: &str = "idlgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root directory for generated packages.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Spaces per indentation level in generated code.
    #[serde(default = "default_indent")]
    pub indent: u8,
    /// Emit a `<program>_impl.jl` handler stub when none exists yet.
    #[serde(default = "default_impl_stub")]
    pub impl_stub: bool,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("gen-jl")
}

fn default_indent() -> u8 {
    4
}

fn default_impl_stub() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            indent: default_indent(),
            impl_stub: default_impl_stub(),
        }
    }
}

impl Config {
    /// Parse a configuration document.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        if !(1..=8).contains(&config.generator.indent) {
            return Err(ctx.bad_indent(config.generator.indent));
        }
        Ok(config)
    }

    /// Open a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Open `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }
}
