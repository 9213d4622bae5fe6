use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const KNOWN_FIELDS: &[&str] = &["database", "host", "port", "cors_origins", "log_level"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Empty list means any origin is accepted.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstaffrecords")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rstaffrecords")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstaffrecords.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rstaffrecords.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Keys of `KNOWN_FIELDS` absent from the given YAML document.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = doc.as_mapping();

        Ok(KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|k| !map.is_some_and(|m| m.contains_key(*k)))
            .collect())
    }

    /// Socket address string the HTTP server binds to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Write the config file (unless `is_test`) and return the configuration
    /// whose database path honours `custom_db` (taken as given, relative to
    /// the working directory).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let database = custom_db
            .map(PathBuf::from)
            .unwrap_or_else(Self::database_file);

        if let Some(parent) = database.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };
        config.database = database.to_string_lossy().to_string();

        if !is_test {
            fs::create_dir_all(&dir)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg = Config::parse("port: 9100\n").unwrap();
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.cors_origins.is_empty());
        assert_eq!(cfg.socket_addr(), "0.0.0.0:9100");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        assert!(matches!(
            Config::parse("port: [not a number"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn reports_missing_fields() {
        let missing = Config::missing_fields("database: /tmp/x.sqlite\nport: 8000\n").unwrap();
        assert_eq!(missing, vec!["host", "cors_origins", "log_level"]);
    }

    #[test]
    fn default_round_trips_through_yaml() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(Config::missing_fields(&yaml).unwrap().is_empty());
    }
}
