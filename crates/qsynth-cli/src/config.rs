//! Configuration management for the qsynth CLI.
//!
//! Configuration is loaded from multiple sources, highest precedence first:
//! 1. Environment variables (prefixed with `QSYNTH_`)
//! 2. `.env` file in the working directory
//! 3. YAML configuration file (`--config`, or `~/.qsynth/config.yaml`)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use qsynth_algo::{DEFAULT_MAX_SEARCH_QUBITS, MAX_ENUMERABLE_QUBITS};
use qsynth_qec::{MAX_DISTANCE, MIN_DISTANCE};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generator size limits.
    #[serde(default)]
    pub limits: Limits,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Caps applied before any generator runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Widest search circuit the `grover` command builds.
    #[serde(default = "default_max_search_qubits")]
    pub max_search_qubits: u32,

    /// Most search iterations the `grover` command emits.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Widest circuit the `qft` command builds.
    #[serde(default = "default_max_qft_qubits")]
    pub max_qft_qubits: u32,

    /// Largest code distance the QEC commands accept.
    #[serde(default = "default_max_code_distance")]
    pub max_code_distance: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (console, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_max_search_qubits() -> u32 {
    DEFAULT_MAX_SEARCH_QUBITS
}

fn default_max_iterations() -> u32 {
    1024
}

fn default_max_qft_qubits() -> u32 {
    256
}

fn default_max_code_distance() -> u32 {
    51
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_search_qubits: default_max_search_qubits(),
            max_iterations: default_max_iterations(),
            max_qft_qubits: default_max_qft_qubits(),
            max_code_distance: default_max_code_distance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Environment variables, including those from a `.env` file
    /// 2. The file at `config_file`, or the default file if it exists
    /// 3. Defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        // Variables already set in the environment win over .env entries.
        dotenvy::dotenv().ok();

        let path = config_file
            .map(Path::to_path_buf)
            .or_else(|| default_config_path().filter(|p| p.exists()));

        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        let config = config.merge_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that `lookup` returns override the file-loaded (or
    /// default) values. Unparseable numbers and booleans are ignored.
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("QSYNTH_MAX_SEARCH_QUBITS").and_then(|v| v.parse().ok()) {
            self.limits.max_search_qubits = val;
        }
        if let Some(val) = lookup("QSYNTH_MAX_ITERATIONS").and_then(|v| v.parse().ok()) {
            self.limits.max_iterations = val;
        }
        if let Some(val) = lookup("QSYNTH_MAX_QFT_QUBITS").and_then(|v| v.parse().ok()) {
            self.limits.max_qft_qubits = val;
        }
        if let Some(val) = lookup("QSYNTH_MAX_CODE_DISTANCE").and_then(|v| v.parse().ok()) {
            self.limits.max_code_distance = val;
        }

        if let Some(v) = lookup("QSYNTH_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QSYNTH_LOG_FORMAT") {
            self.logging.format = v;
        }

        if let Some(val) = lookup("QSYNTH_OUTPUT_PRETTY").and_then(|v| v.parse().ok()) {
            self.output.pretty = val;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate log level
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        // Validate log format
        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        // Validate limits
        let qubits = self.limits.max_search_qubits;
        if qubits == 0 || qubits > MAX_ENUMERABLE_QUBITS {
            return Err(ConfigError::Validation(format!(
                "max_search_qubits must be between 1 and {MAX_ENUMERABLE_QUBITS}, got {qubits}"
            )));
        }

        if self.limits.max_iterations == 0 {
            return Err(ConfigError::Validation(
                "max_iterations must be greater than 0".to_string(),
            ));
        }

        if self.limits.max_qft_qubits == 0 {
            return Err(ConfigError::Validation(
                "max_qft_qubits must be greater than 0".to_string(),
            ));
        }

        let distance = self.limits.max_code_distance;
        if !(MIN_DISTANCE..=MAX_DISTANCE).contains(&distance) {
            return Err(ConfigError::Validation(format!(
                "max_code_distance must be between {MIN_DISTANCE} and {MAX_DISTANCE}, \
                 got {distance}"
            )));
        }

        Ok(())
    }
}

/// Default configuration file (`~/.qsynth/config.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qsynth").join("config.yaml"))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
