// Configuration type definitions

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Input configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// File read when no path argument is given
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
