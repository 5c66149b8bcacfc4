pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_callback_name, validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "badgewall")]
#[command(about = "Fetches a user's completed courses and renders them as a badge page")]
pub struct CliConfig {
    /// Base URL of the course API.
    #[arg(long, default_value = "https://www.codeschool.com")]
    pub endpoint: String,

    /// User whose completed courses are fetched.
    #[arg(long, default_value = "sergiocruz")]
    pub user: String,

    /// JSONP callback name the server wraps the payload in.
    #[arg(long, default_value = "showCourses")]
    pub callback: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Optional TOML config file; when given it replaces the flags above.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint_base(&self) -> &str {
        &self.endpoint
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn callback(&self) -> &str {
        &self.callback
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("user", &self.user)?;
        validate_callback_name("callback", &self.callback)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
