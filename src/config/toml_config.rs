use crate::config::{ApiSettings, BrowserSettings, RenderSettings};
use crate::utils::error::{BrowserError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every key is optional; missing keys keep the
/// defaults from [`BrowserSettings::default`].
///
/// ```toml
/// [api]
/// base_url = "${DIRECTORY_URL}"
/// timeout_seconds = 10
///
/// [render]
/// description_limit = 80
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiSection>,
    pub render: Option<RenderSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSection {
    pub static_prefix: Option<String>,
    pub placeholder_image: Option<String>,
    pub detail_prefix: Option<String>,
    pub description_limit: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BrowserError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BrowserError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_settings(self) -> BrowserSettings {
        let api_defaults = ApiSettings::default();
        let render_defaults = RenderSettings::default();
        let api = self.api.unwrap_or_default();
        let render = self.render.unwrap_or_default();

        BrowserSettings {
            api: ApiSettings {
                base_url: api.base_url.unwrap_or(api_defaults.base_url),
                timeout_seconds: api.timeout_seconds.unwrap_or(api_defaults.timeout_seconds),
            },
            render: RenderSettings {
                static_prefix: render.static_prefix.unwrap_or(render_defaults.static_prefix),
                placeholder_image: render
                    .placeholder_image
                    .unwrap_or(render_defaults.placeholder_image),
                detail_prefix: render.detail_prefix.unwrap_or(render_defaults.detail_prefix),
                description_limit: render
                    .description_limit
                    .unwrap_or(render_defaults.description_limit),
            },
        }
    }
}
