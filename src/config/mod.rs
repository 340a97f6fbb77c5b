#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Path conventions and limits used when projecting records to markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub static_prefix: String,
    pub placeholder_image: String,
    pub detail_prefix: String,
    pub description_limit: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            static_prefix: "/static/images".to_string(),
            placeholder_image: "placeholder.jpg".to_string(),
            detail_prefix: "/business".to_string(),
            description_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserSettings {
    pub api: ApiSettings,
    pub render: RenderSettings,
}

impl ConfigProvider for BrowserSettings {
    fn base_url(&self) -> &str {
        &self.api.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }
}

impl Validate for BrowserSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_range(
            "api.timeout_seconds",
            self.api.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_non_empty_string("render.static_prefix", &self.render.static_prefix)?;
        validate_non_empty_string("render.placeholder_image", &self.render.placeholder_image)?;
        validate_non_empty_string("render.detail_prefix", &self.render.detail_prefix)?;
        validate_positive_number("render.description_limit", self.render.description_limit, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BrowserError;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = BrowserSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.base_url(), "http://127.0.0.1:5000");
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_description_limit_rejected() {
        let mut settings = BrowserSettings::default();
        settings.render.description_limit = 0;

        match settings.validate() {
            Err(BrowserError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "render.description_limit")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_timeout_out_of_range_rejected() {
        let mut settings = BrowserSettings::default();
        settings.api.timeout_seconds = MAX_TIMEOUT_SECONDS + 1;
        assert!(settings.validate().is_err());
    }
}
