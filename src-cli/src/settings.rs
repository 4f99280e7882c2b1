//! Resolves the effective config from flags, environment and files.

use log::debug;

use jobweek::config::loader::validate_config;
use jobweek::config::{default_config_path, load_config, Config};
use jobweek::ConfigError;

use crate::cli::GlobalArgs;

/// `--config` / `$JOBWEEK_CONFIG`, else the per-user config file if present,
/// else defaults in the working directory. Path and schema flags win over
/// whatever the file says.
pub fn resolve_config(args: &GlobalArgs) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path)?,
            _ => {
                debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    if let Some(store) = &args.store {
        config.store_path = store.clone();
    }
    if let Some(plates) = &args.plates {
        config.plate_table_path = plates.clone();
    }
    if let Some(schema) = args.schema {
        config.schema = schema;
    }

    validate_config(&config)?;
    debug!("Effective config: {:?}", config);
    Ok(config)
}
