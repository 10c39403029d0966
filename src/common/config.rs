use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::types::Notation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub notation: Notation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    pub prompt: String,
    pub history: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Load config from default locations
    pub fn load_default() -> Result<Self> {
        // Try current directory first
        if Path::new("config.toml").exists() {
            return Self::load("config.toml");
        }

        // Try ~/.config/euclid-cli/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            let config_path = Path::new(&home)
                .join(".config")
                .join("euclid-cli")
                .join("config.toml");
            if config_path.exists() {
                return Self::load(config_path);
            }
        }

        // Return default config
        Ok(Self::default())
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config to {:?}", path.as_ref()))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig {
                notation: Notation::Float,
            },
            repl: ReplConfig {
                prompt: "euclid> ".to_string(),
                history: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.notation = Notation::Integer;
        config.repl.prompt = "> ".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.output.notation, Notation::Integer);
        assert_eq!(loaded.repl.prompt, "> ");
        assert!(loaded.repl.history);
    }

    #[test]
    fn test_config_missing_file() {
        assert!(Config::load("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "output = \"not a table\"").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_default_notation_is_float() {
        assert_eq!(Config::default().output.notation, Notation::Float);
    }
}
