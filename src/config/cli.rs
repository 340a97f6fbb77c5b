use crate::config::toml_config::TomlConfig;
use crate::config::BrowserSettings;
use crate::core::renderer::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "biz-directory")]
#[command(about = "Browse a business directory backend from the terminal")]
pub struct CliConfig {
    /// Backend address, overrides the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Initial category filter (category id)
    #[arg(long)]
    pub category: Option<String>,

    /// Initial search text
    #[arg(long)]
    pub search: Option<String>,

    /// Show a single business and exit
    #[arg(long)]
    pub business: Option<i64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered page to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read filter commands from stdin
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Config file (or defaults) with command line overrides applied, validated.
    pub fn settings(&self) -> Result<BrowserSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => BrowserSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.api.timeout_seconds = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Interactive sessions already print the page after every command, so
    /// the final page is only written when it goes to a file.
    pub fn emits_final_page(&self) -> bool {
        !self.interactive || self.output.is_some()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "biz-directory",
            "--base-url",
            "http://localhost:9000",
            "--category",
            "3",
            "--search",
            "cafe",
            "--format",
            "html",
        ]);

        assert_eq!(cli.category.as_deref(), Some("3"));
        assert_eq!(cli.search.as_deref(), Some("cafe"));
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(!cli.interactive);
        assert!(!cli.json_logs);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_interactive_stdout_skips_final_page() {
        let one_shot = CliConfig::parse_from(["biz-directory"]);
        assert!(one_shot.emits_final_page());

        let interactive = CliConfig::parse_from(["biz-directory", "--interactive"]);
        assert!(!interactive.emits_final_page());

        let to_file =
            CliConfig::parse_from(["biz-directory", "--interactive", "--output", "page.html"]);
        assert!(to_file.emits_final_page());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"http://from-file:5000\"\ntimeout_seconds = 12\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "biz-directory",
            "--config",
            path.as_str(),
            "--timeout-seconds",
            "4",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.api.base_url, "http://from-file:5000");
        assert_eq!(settings.api.timeout_seconds, 4);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let cli = CliConfig::parse_from(["biz-directory", "--base-url", "ftp://nope"]);
        assert!(cli.settings().is_err());
    }
}
