//! Generator configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a [`GeneratorConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings shared by every file in a run.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Attribute key marking extractable fields
    pub tag: String,

    /// Marker inserted before `.rs` in the output file name
    pub suffix: String,

    /// Crate path used in the generated `use` lines
    ///
    /// Override when the runtime crate is renamed in `Cargo.toml` or
    /// re-exported, e.g. `crate::extract`.
    pub runtime_crate: String,

    /// Continue with the remaining files after a failure
    pub keep_going: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tag: "es".to_string(),
            suffix: "_easystruct".to_string(),
            runtime_crate: "easystruct".to_string(),
            keep_going: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Check that the settings produce loadable output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tag.is_empty() {
            return Err(ConfigError::Invalid("tag cannot be empty".to_string()));
        }
        if syn::parse_str::<syn::Ident>(&self.tag).is_err() {
            return Err(ConfigError::Invalid(format!(
                "tag `{}` is not a Rust identifier",
                self.tag
            )));
        }

        if self.suffix.is_empty() {
            return Err(ConfigError::Invalid("suffix cannot be empty".to_string()));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "suffix `{}` cannot contain a path separator",
                self.suffix
            )));
        }

        if syn::parse_str::<syn::Path>(&self.runtime_crate).is_err() {
            return Err(ConfigError::Invalid(format!(
                "runtime_crate `{}` is not a Rust path",
                self.runtime_crate
            )));
        }

        Ok(())
    }
}
