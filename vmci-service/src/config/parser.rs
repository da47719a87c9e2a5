use crate::config::error::ConfigError;
use crate::config::models::VersionsConfig;
use std::fs;
use std::path::Path;

pub struct ConfigParser;

impl ConfigParser {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<VersionsConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<VersionsConfig, ConfigError> {
        let config: VersionsConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
