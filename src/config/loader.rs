use super::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let linkbot_dir = home.join(".linkbot");
        let config_path = linkbot_dir.join("config.toml");

        if !linkbot_dir.exists() {
            fs::create_dir_all(&linkbot_dir).context("Failed to create .linkbot directory")?;
        }

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let mut config = Self {
                config_path,
                ..Self::default()
            };
            config.save()?;
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Load an explicit config file. Environment overrides are applied on top.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::parse_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn parse_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::Load(format!("{} is not a file", path.display())));
        }
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
