use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the storage root directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. IRLOG_ROOT environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.irlog (fallback for systems without a standard data directory)
pub fn resolve_storage_root(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: IRLOG_ROOT environment variable
    if let Ok(env_path) = std::env::var("IRLOG_ROOT") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("irlog"));
    }

    // Priority 4: Fallback to ~/.irlog (last resort for systems without a
    // standard data directory)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".irlog"));
    }

    Err(Error::Config(
        "Could not determine storage root: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Operator-facing configuration persisted as TOML at
/// `<storage root>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides the resolved storage root when set
    #[serde(default)]
    pub storage_root: Option<PathBuf>,

    /// Default actor identity the entry form passes into appends. Identity is
    /// always an explicit parameter at the core API; it is never read from
    /// ambient process state.
    #[serde(default)]
    pub actor: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_storage_root(None)?.join("config.toml"))
    }

    /// Storage root this configuration points at
    pub fn storage_root(&self) -> Result<PathBuf> {
        match &self.storage_root {
            Some(root) => Ok(root.clone()),
            None => resolve_storage_root(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.storage_root.is_none());
        assert!(config.actor.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            storage_root: Some(PathBuf::from("/cases/active")),
            actor: Some("alice".to_string()),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.storage_root, Some(PathBuf::from("/cases/active")));
        assert_eq!(loaded.actor.as_deref(), Some("alice"));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.storage_root.is_none());
        assert!(config.actor.is_none());

        Ok(())
    }

    #[test]
    fn test_resolve_storage_root_explicit_wins() {
        let resolved = resolve_storage_root(Some("/explicit/cases")).unwrap();
        assert_eq!(resolved, PathBuf::from("/explicit/cases"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            let expanded = expand_tilde("~/cases");
            assert_eq!(expanded, PathBuf::from(home).join("cases"));
        }
    }
}
