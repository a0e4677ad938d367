//! Optional TOML configuration, `~/.config/wordstat/config.toml` by default

mod loader;
mod types;

pub use loader::{config_path, load_config, load_default_from_path, parse_config};
pub use types::{Config, InputConfig, OutputConfig, OutputFormat};
