use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Output format for analysis reports
    #[serde(default)]
    pub output: OutputFormat,

    /// Engine tuning
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Output format for the analysis report
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact single-line JSON
    #[default]
    Json,
    /// Pretty-printed JSON
    Pretty,
}

/// Engine tuning parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// How many body sentences count as the lead
    #[serde(default = "default_lead_sentences")]
    pub lead_sentences: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            lead_sentences: default_lead_sentences(),
        }
    }
}

fn default_lead_sentences() -> usize {
    3
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Standard output
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Very verbose output
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            output: OutputFormat::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.engine.lead_sentences == 0 {
            return Err(anyhow!("engine.lead_sentences must be at least 1"));
        }
        if self.engine.lead_sentences > 10 {
            return Err(anyhow!(
                "engine.lead_sentences must be at most 10, got {}",
                self.engine.lead_sentences
            ));
        }
        Ok(())
    }
}
