use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::GENERATE_MINDMAP_PATH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {source}")]
    ParseError { source: serde_json::Error },
    #[error("Failed to parse TOML config: {source}")]
    TomlParseError { source: toml::de::Error },
}

/// Outcome of a config search. Loading happens before logging is set up, so
/// what was found is kept here and reported with [`LoadedConfig::log`].
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: MindmapConfig,
    /// File the configuration came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Candidates that exist but could not be loaded
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

impl LoadedConfig {
    pub fn from_file(config: MindmapConfig, path: &Path) -> Self {
        Self {
            config,
            source: Some(path.to_path_buf()),
            skipped: Vec::new(),
        }
    }

    pub fn log(&self) {
        for (path, e) in &self.skipped {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
            None => tracing::info!("Using default configuration"),
        }
    }
}

/// Mindmap client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindmapConfig {
    /// Base URL of the mindmap server, without the endpoint path
    pub server_url: String,
    /// Endpoint path the payload is posted to
    pub endpoint: String,
    /// Treat non-2xx responses as failures
    pub strict_status: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for MindmapConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            endpoint: GENERATE_MINDMAP_PATH.to_string(),
            strict_status: false,
            log_filter: None,
        }
    }
}

impl MindmapConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::TomlParseError { source: e })
        } else {
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError { source: e })
        }
    }

    /// Candidate config files, most specific first
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = [
            "mindmap.config.json",
            "mindmap.config.toml",
            ".mindmap/config.json",
            ".mindmap/config.toml",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("mindmap").join("config.json"));
        }
        paths
    }

    /// Load the first readable candidate from [`Self::config_paths`]
    pub fn load_with_fallback() -> LoadedConfig {
        Self::load_with_fallback_in(&Self::config_paths())
    }

    /// Load the first readable file among `paths`, falling back to defaults.
    /// Candidates that exist but fail to load are recorded and skipped.
    pub fn load_with_fallback_in(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => {
                        return LoadedConfig {
                            config,
                            source: Some(path.clone()),
                            skipped,
                        };
                    }
                    Err(e) => skipped.push((path.clone(), e)),
                }
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: None,
            skipped,
        }
    }

    /// Apply `MINDMAP_*` environment variables on top of this configuration
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MINDMAP_SERVER_URL") {
            self.server_url = url;
        }

        if let Some(endpoint) = lookup("MINDMAP_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Some(strict) = lookup("MINDMAP_STRICT_STATUS") {
            self.strict_status = parse_flag(&strict);
        }

        if let Some(filter) = lookup("MINDMAP_LOG") {
            self.log_filter = Some(filter);
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
