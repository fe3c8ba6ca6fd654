use std::fs;
use std::io;
use std::time::Duration;

use log::{info, warn};

const DEFAULT_NUM_FLOORS: u8 = 9;
const DEFAULT_STEP_DURATION_MS: u64 = 2000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("num_floors must be at least 1")]
    NoFloors,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ElevatorConfigFile {
    pub num_floors: u8,
    pub step_duration_ms: u64,
}

impl Default for ElevatorConfigFile {
    fn default() -> Self {
        ElevatorConfigFile {
            num_floors: DEFAULT_NUM_FLOORS,
            step_duration_ms: DEFAULT_STEP_DURATION_MS,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DisplayConfigFile {
    pub status_panel: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub elevator: ElevatorConfigFile,
    pub display: DisplayConfigFile,
}

#[derive(Debug, Clone)]
pub struct ElevatorConfig {
    /// Index of the top floor. The car moves over `0..=num_floors`.
    pub num_floors: u8,
    pub step_duration: Duration,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub status_panel: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_file(ConfigFile::default())
    }
}

fn read_config_file(file_path: &str) -> Result<String, ConfigError> {
    fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_string(),
        source: source,
    })
}

impl Config {
    /// Loads `config.json`, then `_config.json`, and falls back to the
    /// built-in settings if neither can be used.
    pub fn get() -> Self {
        let file_path = "config.json";
        let fallback_file_path = "_config.json";
        let config_contents = match read_config_file(file_path) {
            Ok(content) => content,
            Err(_) => {
                info!("No configuration file provided, using default settings...");
                match read_config_file(fallback_file_path) {
                    Ok(content) => content,
                    Err(_) => return Config::default(),
                }
            },
        };
        match Config::from_json(&config_contents) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, using default settings...", e);
                Config::default()
            },
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config_file: ConfigFile = serde_json::from_str(contents)?;
        if config_file.elevator.num_floors == 0 {
            return Err(ConfigError::NoFloors)
        }
        Ok(Config::from_file(config_file))
    }

    fn from_file(config_file: ConfigFile) -> Self {
        Config {
            elevator: ElevatorConfig {
                num_floors: config_file.elevator.num_floors,
                step_duration: Duration::from_millis(config_file.elevator.step_duration_ms),
            },
            display: DisplayConfig {
                status_panel: config_file.display.status_panel,
            },
        }
    }
}
