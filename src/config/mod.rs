pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::export::{DEFAULT_LIMIT, DEFAULT_RATING, MAX_LIMIT};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "review-exporter")]
#[command(about = "Serve app store reviews filtered by rating as spreadsheet downloads")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Review scraper service queried for reviews
    #[arg(long, default_value = "http://127.0.0.1:4000/reviews")]
    pub source_endpoint: String,

    #[arg(long, default_value = "./downloads")]
    pub output_dir: String,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub default_limit: u32,

    #[arg(long, default_value_t = MAX_LIMIT)]
    pub max_limit: u32,

    #[arg(long, default_value = DEFAULT_RATING)]
    pub default_rating: String,

    /// Timeout for review source requests, in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout: u64,

    #[arg(long)]
    pub lang: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Directory with the companion front-end; not served when omitted
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn source_endpoint(&self) -> &str {
        &self.source_endpoint
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn default_limit(&self) -> u32 {
        self.default_limit
    }

    fn max_limit(&self) -> u32 {
        self.max_limit
    }

    fn default_rating(&self) -> &str {
        &self.default_rating
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout
    }

    fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    fn static_dir(&self) -> Option<&str> {
        self.static_dir.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// 兩種配置來源共用的檢查
pub fn validate_provider<C: crate::core::ConfigProvider + ?Sized>(
    config: &C,
) -> crate::utils::error::Result<()> {
    use crate::utils::validation::*;

    validate_non_empty_string("host", config.host())?;
    validate_range("port", config.port(), 1, u16::MAX)?;
    validate_url("source_endpoint", config.source_endpoint())?;
    validate_path("output_dir", config.output_dir())?;
    validate_range("max_limit", config.max_limit(), 1, u32::MAX)?;
    validate_range("default_limit", config.default_limit(), 1, config.max_limit())?;
    validate_non_empty_string("default_rating", config.default_rating())?;
    validate_range("request_timeout", config.request_timeout_seconds(), 1, 600)?;
    if let Some(dir) = config.static_dir() {
        validate_path("static_dir", dir)?;
    }

    tracing::debug!("✅ Configuration validation passed");
    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["review-exporter"]);
        assert_eq!(config.port(), 3000);
        assert_eq!(config.default_limit(), 100);
        assert_eq!(config.max_limit(), 5000);
        assert_eq!(config.default_rating(), "1");
        assert_eq!(config.output_dir(), "./downloads");
        assert_eq!(config.static_dir(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "review-exporter",
            "--port",
            "8080",
            "--source-endpoint",
            "https://scraper.internal/reviews",
            "--max-limit",
            "1000",
            "--lang",
            "fr",
            "--static-dir",
            "public",
        ]);
        assert_eq!(config.port(), 8080);
        assert_eq!(config.static_dir(), Some("public"));
        assert_eq!(config.max_limit(), 1000);
        assert_eq!(config.lang(), Some("fr"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_validation_failures() {
        let bad_endpoint = CliConfig::parse_from(["review-exporter", "--source-endpoint", "ftp://x"]);
        assert!(bad_endpoint.validate().is_err());

        let bad_limits = CliConfig::parse_from([
            "review-exporter",
            "--default-limit",
            "200",
            "--max-limit",
            "100",
        ]);
        assert!(bad_limits.validate().is_err());

        let bad_port = CliConfig::parse_from(["review-exporter", "--port", "0"]);
        assert!(bad_port.validate().is_err());
    }
}
