use crate::core::ConfigProvider;
use crate::utils::error::{BadgeError, Result};
use crate::utils::validation::{
    validate_callback_name, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub user: String,
    #[serde(default = "default_callback")]
    pub callback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

fn default_callback() -> String {
    "showCourses".to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config: TomlConfig =
            toml::from_str(&content).map_err(|e| BadgeError::ConfigError {
                message: format!(
                    "Failed to parse config file {}: {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint_base(&self) -> &str {
        &self.source.endpoint
    }

    fn user(&self) -> &str {
        &self.source.user
    }

    fn callback(&self) -> &str {
        &self.source.callback
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_non_empty_string("source.user", &self.source.user)?;
        validate_callback_name("source.callback", &self.source.callback)?;
        validate_path("output.path", &self.output.path)?;
        Ok(())
    }
}
