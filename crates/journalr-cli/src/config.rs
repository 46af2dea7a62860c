use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME, STORE_FILE_NAME};

/// Contents of `config.toml`. Every section and key is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalrConfig {
    pub journal: JournalSection,
    pub ids: IdsSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdsSection {
    pub word_list: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join(CONFIG_FILE_NAME))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<JournalrConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<JournalrConfig> {
    if !path.exists() {
        return Ok(JournalrConfig::default());
    }
    read_config(path)
}

pub fn data_dir() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(DATA_DIR_NAME))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    home_from_env(cfg!(windows), |key| std::env::var(key).ok()).ok_or_else(|| {
        anyhow::anyhow!("Home directory is not set; cannot resolve default paths")
    })
}

/// Windows uses `USERPROFILE`, then `HOMEDRIVE` + `HOMEPATH`; everything else uses `HOME`.
fn home_from_env<F>(windows: bool, var: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

    if windows {
        if let Some(profile) = non_empty("USERPROFILE") {
            return Some(PathBuf::from(profile));
        }
        let drive = non_empty("HOMEDRIVE")?;
        let path = non_empty("HOMEPATH")?;
        return Some(PathBuf::from(format!("{}{}", drive, path)));
    }

    non_empty("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_home_on_unix_uses_home() {
        let home = home_from_env(false, lookup(&[("HOME", "/home/ada"), ("USERPROFILE", "x")]));
        assert_eq!(home, Some(PathBuf::from("/home/ada")));
    }

    #[test]
    fn test_home_on_windows_prefers_userprofile() {
        let home = home_from_env(
            true,
            lookup(&[
                ("USERPROFILE", r"C:\Users\ada"),
                ("HOMEDRIVE", "D:"),
                ("HOMEPATH", r"\ada"),
            ]),
        );
        assert_eq!(home, Some(PathBuf::from(r"C:\Users\ada")));
    }

    #[test]
    fn test_home_on_windows_falls_back_to_drive_and_path() {
        let home = home_from_env(true, lookup(&[("HOMEDRIVE", "D:"), ("HOMEPATH", r"\ada")]));
        assert_eq!(home, Some(PathBuf::from(r"D:\ada")));
    }

    #[test]
    fn test_home_missing() {
        assert_eq!(home_from_env(false, lookup(&[("HOME", "  ")])), None);
        assert_eq!(home_from_env(true, lookup(&[("HOMEDRIVE", "D:")])), None);
    }

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert!(config.journal.path.is_none());
        assert!(config.ids.word_list.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_partial_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[journal]\npath = \"/tmp/j.db\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.journal.path.as_deref(), Some("/tmp/j.db"));
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[journal\npath = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
