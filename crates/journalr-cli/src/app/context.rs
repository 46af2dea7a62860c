//! Application context for the Journalr CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use log::debug;
use once_cell::unsync::OnceCell;

use journalr_core::{JournalStore, SqliteJournalStore, WordSource};

use crate::cli::Cli;
use crate::config::{load_config, JournalrConfig};

use super::resolver::{resolve_config_path, resolve_log_level, resolve_store_path};

/// Application context that bundles CLI args with configuration.
///
/// The config file is read at most once per process, and only by commands
/// that need it.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<JournalrConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&JournalrConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            debug!("event=config_load module=cli path={}", path.display());
            load_config(&path)
        })
    }

    /// Log level for this run.
    ///
    /// The config is only consulted when no `-v` was given and the command
    /// reads it anyway.
    pub fn log_level(&self) -> anyhow::Result<String> {
        let reads_config = self
            .cli
            .command
            .as_ref()
            .is_some_and(|command| command.reads_config());
        if self.cli.verbose > 0 || !reads_config {
            return Ok(resolve_log_level(self.cli.verbose, None));
        }
        let config = self.config()?;
        Ok(resolve_log_level(0, config.log.level.as_deref()))
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli.store.as_deref(), self.config()?)
    }

    /// Open (creating if needed) the journal store.
    pub fn open_store(&self) -> anyhow::Result<SqliteJournalStore> {
        let path = self.store_path()?;
        Ok(SqliteJournalStore::open(&path)?)
    }

    /// Word list used for new entry ids.
    pub fn word_source(&self) -> anyhow::Result<WordSource> {
        let source = match self.config()?.ids.word_list.as_deref() {
            Some(path) if !path.trim().is_empty() => WordSource::File(PathBuf::from(path)),
            _ => WordSource::Bundled,
        };
        Ok(source)
    }
}
