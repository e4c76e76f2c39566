use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::util::paths::{config_path, data_dir};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the draft database (defaults to the data directory)
    pub storage_dir: PathBuf,
    /// Env-filter directive for the file logger
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: data_dir(),
            log_filter: "warn".to_string(),
        }
    }
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Storage configuration
    pub storage: Option<TomlStorageConfig>,
    /// Logging configuration
    pub logging: Option<TomlLoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlLoggingConfig {
    pub level: Option<String>,
}

impl Config {
    /// Load configuration from file, merging with defaults
    pub fn load() -> Self {
        let mut config = Config::default();

        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        // Try to load user config
        if config_file.exists() {
            if let Ok(contents) = fs::read_to_string(&config_file) {
                if let Ok(toml_config) = toml::from_str::<TomlConfig>(&contents) {
                    if let Some(storage) = toml_config.storage {
                        if let Some(dir) = storage.dir {
                            config.storage_dir = dir;
                        }
                    }

                    if let Some(logging) = toml_config.logging {
                        if let Some(level) = logging.level {
                            config.log_filter = level;
                        }
                    }
                }
            }
        }

        config
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &PathBuf) {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("Failed to create config directory: {}", e);
                    return;
                }
            }
        }

        // Write the example config
        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            eprintln!("Failed to write default config: {}", e);
        }
    }

    /// Path of the draft database under the configured storage directory
    pub fn database_path(&self) -> PathBuf {
        self.storage_dir.join("drafts.db")
    }
}
