//! Configuration for the credit CLI
//!
//! Loaded from `--config PATH`, or from `<config dir>/credit-generator/config.toml`
//! when that file exists. Every key is optional.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use credit_core::{JSON_FILENAME, XML_FILENAME};

/// Interchange format of an output file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Where generated files go
    pub output: OutputConfig,
    /// Log filter settings
    pub logging: LoggingConfig,
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for files written without an explicit `--output`
    pub directory: PathBuf,
    pub xml_filename: String,
    pub json_filename: String,
    /// Format used by `init` when no output path is given
    pub default_format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            xml_filename: XML_FILENAME.to_string(),
            json_filename: JSON_FILENAME.to_string(),
            default_format: OutputFormat::Json,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG` and `-v`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("credit-generator").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location if present
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_filename(&self.output.xml_filename, OutputFormat::Xml)?;
        check_filename(&self.output.json_filename, OutputFormat::Json)?;
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty".to_string()));
        }
        Ok(())
    }

    /// Default output path for a format
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        let filename = match format {
            OutputFormat::Json => &self.output.json_filename,
            OutputFormat::Xml => &self.output.xml_filename,
        };
        self.output.directory.join(filename)
    }
}

fn check_filename(filename: &str, format: OutputFormat) -> Result<(), ConfigError> {
    let suffix = format!(".{}", format.extension());
    if filename.trim().is_empty() {
        return Err(ConfigError::Invalid(format!(
            "{} filename must not be empty",
            format.extension()
        )));
    }
    if !filename.to_lowercase().ends_with(&suffix) {
        return Err(ConfigError::Invalid(format!(
            "{} must end in {}",
            filename, suffix
        )));
    }
    Ok(())
}

/// Configuration loading or validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid config file: {0}")]
    Parse(String),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
