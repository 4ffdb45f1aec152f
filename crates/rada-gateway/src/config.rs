use crate::traits::MutationKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolve the config file path based on priority:
/// 1. RADA_CONFIG environment variable
/// 2. XDG config directory (recommended default)
/// 3. ~/.rada (fallback for systems without XDG)
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("RADA_CONFIG") {
        return Ok(PathBuf::from(env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rada").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rada").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Which gateway implementation serves the app's data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Embedded sample payloads; the development/offline seam
    #[default]
    Fixtures,
    /// Live backend over HTTP
    Http,
}

/// Settings for the HTTP backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// What to do with an optimistic local update when the backend rejects the
/// corresponding mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollbackPolicy {
    /// Keep the optimistic change and surface the failure (the historical
    /// app behavior)
    #[default]
    Keep,
    /// Restore the item to its pre-mutation snapshot
    Revert,
}

/// Per-mutation rollback policy table, keyed by
/// [`MutationKind::config_key`]. Unlisted mutations default to `Keep`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollbackPolicies(HashMap<String, RollbackPolicy>);

impl RollbackPolicies {
    pub fn policy_for(&self, kind: MutationKind) -> RollbackPolicy {
        self.0.get(kind.config_key()).copied().unwrap_or_default()
    }

    pub fn set(&mut self, kind: MutationKind, policy: RollbackPolicy) {
        self.0.insert(kind.config_key().to_string(), policy);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub rollback: RollbackPolicies,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_backend_is_fixtures() {
        let config = Config::default();
        assert_eq!(config.backend, Backend::Fixtures);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new().map_err(Error::from)?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config {
            backend: Backend::Http,
            ..Default::default()
        };
        config.http.base_url = "https://api.rada.ke/v1".to_string();
        config
            .rollback
            .set(MutationKind::JoinGroup, RollbackPolicy::Revert);

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.backend, Backend::Http);
        assert_eq!(loaded.http.base_url, "https://api.rada.ke/v1");
        assert_eq!(
            loaded.rollback.policy_for(MutationKind::JoinGroup),
            RollbackPolicy::Revert
        );

        Ok(())
    }

    #[test]
    fn test_unlisted_mutation_defaults_to_keep() {
        let policies = RollbackPolicies::default();
        assert_eq!(
            policies.policy_for(MutationKind::LikePost),
            RollbackPolicy::Keep
        );
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new().map_err(Error::from)?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.backend, Backend::Fixtures);

        Ok(())
    }

    #[test]
    fn test_partial_toml_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new().map_err(Error::from)?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "backend = \"http\"\n").map_err(Error::from)?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.backend, Backend::Http);
        assert_eq!(config.http.timeout_secs, 10);

        Ok(())
    }
}
