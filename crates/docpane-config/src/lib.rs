use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding the markdown documentation.
    pub docs_path: PathBuf,
    /// Where the viewer writes its log; the terminal is busy drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Scroll timing and placement for fragment navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Rows kept free above a heading that was jumped to.
    pub header_offset: f64,
    pub mount_delay_ms: u64,
    pub fragment_delay_ms: u64,
    pub content_delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_offset: 1.0,
            mount_delay_ms: 100,
            fragment_delay_ms: 100,
            content_delay_ms: 150,
        }
    }
}

impl NavigationConfig {
    pub fn mount_delay(&self) -> Duration {
        Duration::from_millis(self.mount_delay_ms)
    }

    pub fn fragment_delay(&self) -> Duration {
        Duration::from_millis(self.fragment_delay_ms)
    }

    pub fn content_delay(&self) -> Duration {
        Duration::from_millis(self.content_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub cache_ttl_secs: u64,
    /// File listed first in the catalog and opened by default.
    pub primary_document: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            primary_document: "QUICK_START.md".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Config {
    pub fn new(docs_path: impl Into<PathBuf>) -> Self {
        Self {
            docs_path: docs_path.into(),
            log_file: None,
            navigation: NavigationConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.docs_path = Self::expand_path(&config.docs_path).unwrap_or(config.docs_path);
        config.log_file = config
            .log_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docpane");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The configured log file, or `docpane.log` in the temp directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("docpane.log"))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
