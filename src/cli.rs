use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, OutputFormat};

/// Count the words in a text file and summarise their lengths
#[derive(Debug, Parser)]
#[command(name = "wordstat", version, about)]
pub struct Args {
    /// Text file to analyse (`-` for stdin). Falls back to `input.path` from the config file
    pub file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/wordstat/config.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Input path, preferring the command line over the config file
    pub fn resolve_path(&self, config: &Config) -> Option<PathBuf> {
        self.file.clone().or_else(|| config.input.path.clone())
    }

    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
