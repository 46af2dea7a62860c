//! Path and level resolution for config, store, and logging.

use std::path::PathBuf;

use crate::config::{default_config_path, default_store_path, JournalrConfig};
use crate::logging::{level_for_verbosity, DEFAULT_LOG_LEVEL};

/// Resolve the config file path, checking JOURNALR_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("JOURNALR_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path: `--store` / JOURNALR_PATH, then config, then the default.
pub fn resolve_store_path(
    store_arg: Option<&str>,
    config: &JournalrConfig,
) -> anyhow::Result<PathBuf> {
    let explicit = store_arg
        .or(config.journal.path.as_deref())
        .filter(|value| !value.trim().is_empty());
    match explicit {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_store_path(),
    }
}

/// Resolve the log level: `-v` flags, then config, then the default.
pub fn resolve_log_level(verbose: u8, config_level: Option<&str>) -> String {
    level_for_verbosity(verbose)
        .or(config_level)
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JournalSection;

    fn config_with_path(path: &str) -> JournalrConfig {
        JournalrConfig {
            journal: JournalSection {
                path: Some(path.to_string()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_store_arg_wins_over_config() {
        let config = config_with_path("/from/config.db");
        let path = resolve_store_path(Some("/from/flag.db"), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.db"));
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let config = config_with_path("/from/config.db");
        let path = resolve_store_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.db"));
    }

    #[test]
    fn test_log_level_precedence() {
        assert_eq!(resolve_log_level(2, Some("error")), "debug");
        assert_eq!(resolve_log_level(0, Some("error")), "error");
        assert_eq!(resolve_log_level(0, None), "warn");
    }
}
