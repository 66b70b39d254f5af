//! Application context for the Diary CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use diary_core::FlatFileStore;

use crate::cli::Cli;
use crate::config::{default_data_dir, read_config, DiaryConfig};

use super::resolver::{resolve_config_path, resolve_username};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<DiaryConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading lazily. A missing config
    /// file is not an error; every setting has a flag or default.
    pub fn config(&self) -> anyhow::Result<Option<&DiaryConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path).map(Some)
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// Get the configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self
            .config()?
            .and_then(|config| config.ui.editor.as_deref()))
    }

    /// Resolve the data directory: flag, then config, then XDG default.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref dir) = self.cli.data_dir {
            return Ok(PathBuf::from(dir));
        }
        if let Some(config) = self.config()? {
            return Ok(PathBuf::from(&config.diary.data_dir));
        }
        default_data_dir()
    }

    /// Open the flat-file store rooted at the data directory.
    pub fn store(&self) -> anyhow::Result<FlatFileStore> {
        Ok(FlatFileStore::new(self.data_dir()?))
    }

    /// Resolve the account username: flag, then config, then prompt.
    pub fn username(&self, no_input: bool) -> anyhow::Result<String> {
        resolve_username(self, no_input)
    }
}
