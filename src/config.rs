//! Configuration module for clm
//!
//! Settings come from, in increasing precedence: built-in defaults, an
//! optional TOML file in the user's config directory
//! (`~/.config/clm/config.toml` on Linux), and `CLM_*` environment
//! variables. The `--file` flag overrides the store path on top of that.
//!
//! ```toml
//! # ~/.config/clm/config.toml
//! store_path = "/home/me/.local/share/clm/commands.json"
//! quiet = false
//! ```
//!
//! The config file is optional and never created by clm.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_STORE_FILE;

/// Prefix of environment overrides, e.g. `CLM_STORE_PATH`
pub const ENV_PREFIX: &str = "CLM";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClmConfig {
    /// Location of the command store; relative paths resolve against the
    /// working directory
    pub store_path: PathBuf,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for ClmConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            quiet: false,
        }
    }
}

impl ClmConfig {
    /// Get the path to the config file
    ///
    /// Returns `None` if the system config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("clm").join("config.toml"))
    }

    /// Load configuration from the user's config file and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed,
    /// or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path().as_deref())
    }

    /// Load configuration from an explicit config file (which may be
    /// absent) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("store_path", DEFAULT_STORE_FILE)?
            .set_default("quiet", false)?;

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Store path to use, with a command-line override taking precedence
    #[must_use]
    pub fn store_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override.map_or_else(|| self.store_path.clone(), Path::to_path_buf)
    }
}
