pub mod schema;

pub use schema::{AgentConfig, AnthropicConfig, FoundryConfig, OpenAiConfig};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Config file name inside the home directory.
pub const CONFIG_FILE: &str = "corefoundry.toml";

/// Default corefoundry home directory (~/.corefoundry).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".corefoundry"))
        .unwrap_or_else(|| PathBuf::from(".corefoundry"))
}

/// Expand a leading `~` in a user-supplied path.
pub fn resolve_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<FoundryConfig> {
    if path.exists() {
        let contents =
            std::fs::read_to_string(path).context("Failed to read corefoundry config file")?;
        let config: FoundryConfig =
            toml::from_str(&contents).context("Failed to parse corefoundry config (TOML)")?;
        Ok(config)
    } else {
        Ok(FoundryConfig::default())
    }
}

/// Save config to the given path (TOML format).
pub fn save_config(config: &FoundryConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).context("Failed to write config file")?;
    Ok(())
}
