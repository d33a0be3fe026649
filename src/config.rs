//! Configuration file handling for discoaid.
//!
//! Loads configuration from `~/.config/discoaid/config.toml` or a custom path.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file structure for discoaid.
/// Loaded from ~/.config/discoaid/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds for share-link resolution.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print message JSON by default.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError { path, source: e })?;
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("discoaid")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.http.timeout_secs, 10);
        assert_eq!(cfg.http.connect_timeout_secs, 5);
        assert!(cfg.output.pretty);
    }

    #[test]
    fn test_load_from_explicit_full() {
        let (_dir, path) = write_config(
            "[http]\ntimeout_secs = 30\nconnect_timeout_secs = 2\n\n[output]\npretty = false\n",
        );
        let cfg = Config::load_from_explicit(path).unwrap();
        assert_eq!(cfg.http.timeout_secs, 30);
        assert_eq!(cfg.http.connect_timeout_secs, 2);
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn test_load_from_explicit_partial_uses_defaults() {
        let (_dir, path) = write_config("[http]\ntimeout_secs = 3\n");
        let cfg = Config::load_from_explicit(path).unwrap();
        assert_eq!(cfg.http.timeout_secs, 3);
        assert_eq!(cfg.http.connect_timeout_secs, 5);
        assert!(cfg.output.pretty);
    }

    #[test]
    fn test_load_from_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_explicit(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_load_from_explicit_bad_toml() {
        let (_dir, path) = write_config("not valid toml [[");
        let result = Config::load_from_explicit(path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("discoaid/config.toml"));
    }
}
