//! Where `hdrcube` keeps its config and logs.

use std::path::{Path, PathBuf};

use crate::error::CliError;

const APP_NAME: &str = "hdrcube";

/// OS-specific directories, following XDG on Linux, Known Folders on
/// Windows and Library on macOS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON log file of debug builds.
    pub log_dir: PathBuf,
}

impl AppDirs {
    /// Resolve directories, rooted at `config_override` when given.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoConfigDir`] if no override is given and the OS
    /// does not expose a configuration directory.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, CliError> {
        match config_override {
            Some(root) => Ok(Self::with_root(root)),
            None => {
                let base = dirs::config_dir().ok_or(CliError::NoConfigDir)?;
                Ok(Self::with_root(&base.join(APP_NAME)))
            }
        }
    }

    /// Directories under an explicit root.
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            log_dir: root.join("logs"),
        }
    }
}
