use std::path::{Path, PathBuf};

use log::debug;

use crate::config::schema::{Config, CONFIG_VERSION};
use crate::error::ConfigError;

/// Config file name inside the per-user config directory.
pub const CONFIG_FILE: &str = "config.json";

/// `<config dir>/jobweek/config.json`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jobweek").join(CONFIG_FILE))
}

/// Loads a config file. Relative paths inside it are resolved against the
/// file's own directory.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut config = load_config_from_str(&content)?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if config.store_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            message: "store_path must not be empty".to_string(),
        });
    }

    if config.plate_table_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            message: "plate_table_path must not be empty".to_string(),
        });
    }

    if config.store_path == config.plate_table_path {
        return Err(ConfigError::Validation {
            message: "store_path and plate_table_path must differ".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Schema;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let config = load_config_from_str(r#"{ "version": "1.0" }"#).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store_path, PathBuf::from("todo_list.txt"));
        assert_eq!(config.plate_table_path, PathBuf::from("plate.csv"));
        assert_eq!(config.schema, Schema::Basic);
    }

    #[test]
    fn test_load_full_config() {
        let config_json = r#"
        {
            "version": "1.0",
            "schema": "plated",
            "store_path": "/data/jobs.txt",
            "plate_table_path": "/data/plate.csv"
        }
        "#;

        let config = load_config_from_str(config_json).unwrap();
        assert_eq!(config.schema, Schema::Plated);
        assert_eq!(config.store_path, PathBuf::from("/data/jobs.txt"));
    }

    #[test]
    fn test_unsupported_version() {
        let err = load_config_from_str(r#"{ "version": "2.0" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_unknown_schema_is_parse_error() {
        let err = load_config_from_str(r#"{ "version": "1.0", "schema": "csv" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson(_)));
    }

    #[test]
    fn test_same_paths_rejected() {
        let config_json = r#"
        { "version": "1.0", "store_path": "a.txt", "plate_table_path": "a.txt" }
        "#;
        assert!(load_config_from_str(config_json).is_err());
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "version": "1.0", "store_path": "jobs/todo_list.txt", "plate_table_path": "/abs/plate.csv" }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.store_path, temp_dir.path().join("jobs/todo_list.txt"));
        assert_eq!(config.plate_table_path, PathBuf::from("/abs/plate.csv"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
