use crate::core::{CampusqlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Built-in database location used when no config file overrides it.
pub const DEFAULT_DATABASE_PATH: &str = "campus.db";

/// Default name of the optional config file, looked up in the working
/// directory.
pub const CONFIG_FILE: &str = "campusql.toml";

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub database: Option<DatabaseConfig>,
}

/// Database-related configuration.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

impl Config {
    /// The database location to run against, falling back to the built-in
    /// default when the config file does not set one.
    pub fn database_path(&self) -> &str {
        self.database
            .as_ref()
            .and_then(|db| db.path.as_deref())
            .unwrap_or(DEFAULT_DATABASE_PATH)
    }
}

/// Loads configuration from a TOML file at the given path.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CampusqlError::Config(e.to_string()))
}

/// Loads the working-directory config file if present, defaults otherwise.
pub fn load_or_default() -> Result<Config> {
    if Path::new(CONFIG_FILE).exists() {
        load_config(CONFIG_FILE)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
[database]
path = "/tmp/demo-campus.db"
"#;

    #[test]
    fn test_load_config_from_str() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(config.database_path(), "/tmp/demo-campus.db");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path(), DEFAULT_DATABASE_PATH);

        let config: Config = toml::from_str("[database]").unwrap();
        assert_eq!(config.database_path(), DEFAULT_DATABASE_PATH);
    }

    #[test]
    fn test_invalid_config_is_a_config_error() {
        let result: Result<Config> =
            toml::from_str("database = 3").map_err(|e| CampusqlError::Config(e.to_string()));
        assert!(result.is_err());
    }
}
