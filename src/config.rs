use crate::constants::DEFAULT_SERVER_URL;
use crate::errors::{FeatchatError, FeatchatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> FeatchatResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let mut config = read_config(&config_path)?;

        apply_env_overrides(&mut config);
        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config
        let mut config = Config::default();
        apply_env_overrides(&mut config);
        validate_config(&config)?;

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            FeatchatError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| FeatchatError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| FeatchatError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn read_config(path: &std::path::Path) -> FeatchatResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| FeatchatError::config_error(format!("Failed to read config file: {}", e)))?;

    serde_json::from_str(&config_str)
        .map_err(|e| FeatchatError::config_error(format!("Failed to parse config: {}", e)))
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(url) = env::var("CHAT_SERVER_URL") {
        config.server_url = url;
    }
}

fn get_config_path() -> FeatchatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| FeatchatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("featchat").join("config.json"))
}

fn validate_config(config: &Config) -> FeatchatResult<()> {
    if config.server_url.is_empty() {
        return Err(FeatchatError::config_error("Server URL is required"));
    }

    if !config.server_url.starts_with("http://") && !config.server_url.starts_with("https://") {
        return Err(FeatchatError::config_error(
            "Server URL must start with http:// or https://",
        ));
    }

    if config.log_level.is_empty() {
        return Err(FeatchatError::config_error("Log level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_server_url() {
        let mut config = Config::default();
        config.server_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_bad_scheme() {
        let mut config = Config::default();
        config.server_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_read_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "server_url": "http://localhost:9000", "log_level": "debug" }"#,
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.server_url, "http://localhost:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_read_config_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(read_config(&path).is_err());
    }
}
