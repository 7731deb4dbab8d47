//! Configuration management for the sentence inspector.
//!
//! Handles:
//! - Command-line argument parsing
//! - Configuration file discovery and loading
//! - Per-validator attribute access

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".sentence-inspector.toml";

/// Command-line arguments for the sentence inspector
#[derive(Debug, Parser)]
#[command(name = "sentence-inspect")]
#[command(about = "Rule-based inspection of sentences in text documents")]
#[command(version)]
pub struct Args {
    /// Files to inspect; standard input is read when none are given
    pub files: Vec<PathBuf>,

    /// Explicit configuration file
    #[arg(long, short, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How violations are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    /// Configuration file actually loaded, if any
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
    pub inspector: InspectorConfig,
}

impl Config {
    /// Create configuration from parsed command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = args.config.or_else(discover_config_file);

        let inspector = match &config_path {
            Some(path) => InspectorConfig::load(path)?,
            None => {
                log::info!("No configuration file found, using built-in validators.");
                InspectorConfig::default()
            }
        };

        Ok(Config {
            files: args.files,
            config_path,
            format: args.format,
            log_level: args.log_level,
            inspector,
        })
    }
}

/// Find the first existing configuration file: project directory, then user config directory
pub fn discover_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("sentence-inspector").join("config.toml"));
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Root configuration file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct InspectorConfig {
    #[serde(default)]
    pub symbols: SymbolTable,
    /// Validators to run; `None` selects every registered validator with defaults
    pub validators: Option<Vec<ValidatorConfiguration>>,
}

impl InspectorConfig {
    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Read-only attribute source scoped to one validator
pub trait ConfigurationAccessor {
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Configuration of a single validator
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "ValidatorEntry")]
pub struct ValidatorConfiguration {
    pub name: String,
    attributes: BTreeMap<String, String>,
}

impl ValidatorConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

impl ConfigurationAccessor for ValidatorConfiguration {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// `[[validators]]` entry as written in TOML
#[derive(Debug, Deserialize)]
struct ValidatorEntry {
    name: String,
    #[serde(default)]
    attributes: BTreeMap<String, AttributeValue>,
}

/// Attribute values may be written with any scalar TOML type
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Integer(value) => write!(f, "{}", value),
            // Keep the decimal point so integer attributes reject floats
            AttributeValue::Float(value) => write!(f, "{:?}", value),
            AttributeValue::Boolean(value) => write!(f, "{}", value),
        }
    }
}

impl From<ValidatorEntry> for ValidatorConfiguration {
    fn from(entry: ValidatorEntry) -> Self {
        // Validators always receive strings and parse them themselves
        let attributes = entry
            .attributes
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();

        Self {
            name: entry.name,
            attributes,
        }
    }
}

/// Shared locale-specific symbols available to every validator
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: BTreeMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.symbols.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.symbols.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
