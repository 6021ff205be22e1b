//! Configuration module for the serve-a-file server.
//!
//! Supports both command-line arguments and TOML configuration file.
//! CLI arguments take precedence over config file values.

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Command-line arguments for the server
#[derive(Parser, Debug)]
#[command(name = "serve-a-file")]
#[command(author = "serve-a-file authors")]
#[command(version = "0.1.0")]
#[command(about = "A minimal HTTP responder that serves one file", long_about = None)]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to serve as /index.html
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Custom header line added to file responses (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Status code for file responses (200, 404, 500)
    #[arg(short, long)]
    pub status: Option<u16>,

    /// Address to bind to (e.g., 0.0.0.0:8080)
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// TOML configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub response: ResponseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server-related configuration
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_listen")]
    pub listen: String,
    /// File to serve as /index.html
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            file: None,
        }
    }
}

/// Response-related configuration
#[derive(Debug, Deserialize)]
pub struct ResponseConfig {
    /// Literal header lines added to every file response, in order
    #[serde(default)]
    pub headers: Vec<String>,
    /// Status code for file responses
    #[serde(default = "default_status")]
    pub status: u16,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            status: default_status(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_status() -> u16 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Final resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub listen: String,
    pub file: PathBuf,
    pub headers: Vec<String>,
    pub status: u16,
    pub log_level: String,
}

impl Config {
    /// Load configuration from CLI args and optional TOML file.
    /// CLI arguments take precedence over TOML file values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(CliArgs::parse())
    }

    /// Merge CLI args with TOML config (CLI takes precedence) and
    /// validate that the served file is set and exists.
    fn resolve(cli: CliArgs) -> Result<Self, ConfigError> {
        // Load TOML config if specified
        let toml_config = if let Some(ref config_path) = cli.config {
            let contents = std::fs::read_to_string(config_path)
                .map_err(|e| ConfigError::FileRead(config_path.clone(), e))?;
            toml::from_str(&contents)
                .map_err(|e| ConfigError::TomlParse(config_path.clone(), e))?
        } else {
            TomlConfig::default()
        };

        let file = cli
            .file
            .or(toml_config.server.file)
            .ok_or(ConfigError::ServedFileMissing)?;

        // Checked once at startup; requests re-check only via the open
        if !file.exists() {
            return Err(ConfigError::ServedFileNotFound(file));
        }

        Ok(Config {
            listen: cli.listen.unwrap_or(toml_config.server.listen),
            file,
            headers: if cli.headers.is_empty() {
                toml_config.response.headers
            } else {
                cli.headers
            },
            status: cli.status.unwrap_or(toml_config.response.status),
            log_level: if cli.log_level != "info" {
                cli.log_level
            } else {
                toml_config.logging.level
            },
        })
    }
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    FileRead(PathBuf, std::io::Error),
    TomlParse(PathBuf, toml::de::Error),
    ServedFileMissing,
    ServedFileNotFound(PathBuf),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::TomlParse(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::ServedFileMissing => {
                write!(f, "A file to serve is required (--file or server.file)")
            }
            ConfigError::ServedFileNotFound(path) => {
                write!(f, "File '{}' does not exist", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
