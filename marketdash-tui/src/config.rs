//! Optional `config.toml` and the on-disk locations the dashboard uses.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Where the dashboard keeps its files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory; also the key-value storage directory.
    pub dir: PathBuf,
    pub config: PathBuf,
    pub log: PathBuf,
}

impl Paths {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            config: dir.join("config.toml"),
            log: dir.join("marketdash.log"),
            dir,
        }
    }

    /// `<config_dir>/marketdash`, or `./marketdash` when there is no config dir.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(base.join("marketdash"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Master seed for mock series; a fresh random seed each start if unset.
    pub seed: Option<u64>,
    /// Input poll timeout per frame.
    pub tick_rate_ms: u64,
    /// `tracing` filter directive, e.g. `"info"` or `"marketdash_core=debug"`.
    pub log_filter: String,
    /// Instrument catalog TOML replacing the built-in one.
    pub catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_ms: 50,
            log_filter: "info".to_string(),
            catalog: None,
        }
    }
}

impl AppConfig {
    /// Read `path`. `Ok(None)` if the file does not exist.
    pub fn try_load(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn master_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::try_load(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "seed = 42\n").unwrap();

        let config = AppConfig::try_load(&path).unwrap().unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.master_seed(), 42);
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(AppConfig::try_load(&path).is_err());
    }

    #[test]
    fn paths_live_in_one_dir() {
        let paths = Paths::in_dir("/tmp/md");
        assert_eq!(paths.config, PathBuf::from("/tmp/md/config.toml"));
        assert_eq!(paths.log, PathBuf::from("/tmp/md/marketdash.log"));
    }
}
