use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use crate::generation::compiler::TemplateVariant;
use crate::llm_client::{ApiKey, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// A missing `GEMINI_API_KEY` is not fatal: the server starts, warns, and
/// answers generation requests with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<ApiKey>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_timeout: Duration,
    pub template_variant: TemplateVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY").and_then(ApiKey::new),
            gemini_model: or_default("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_base_url: or_default("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            llm_timeout: Duration::from_secs(
                or_default("LLM_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            template_variant: or_default("RESUME_TEMPLATE_VARIANT", "general")
                .parse::<TemplateVariant>()
                .map_err(anyhow::Error::msg)
                .context("RESUME_TEMPLATE_VARIANT is invalid")?,
            port: or_default("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }

    /// Logs a startup warning when no credential is configured. Returns whether it warned.
    pub fn warn_if_unconfigured(&self) -> bool {
        if self.gemini_api_key.is_some() {
            return false;
        }
        warn!("GEMINI_API_KEY is not set; resume generation requests will fail until it is configured");
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::test_support::capture_logs;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm_timeout, Duration::from_secs(120));
        assert_eq!(config.template_variant, TemplateVariant::General);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("RESUME_TEMPLATE_VARIANT", "backend"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key.unwrap().expose(), "k");
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.template_variant, TemplateVariant::Backend);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config_from(&[("RESUME_TEMPLATE_VARIANT", "designer")]).is_err());
    }

    #[test]
    fn test_missing_key_warns_at_startup() {
        let (logs, _guard) = capture_logs();

        assert!(config_from(&[]).unwrap().warn_if_unconfigured());

        let output = logs.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("GEMINI_API_KEY is not set"));
    }

    #[test]
    fn test_configured_key_does_not_warn() {
        let (logs, _guard) = capture_logs();

        assert!(!config_from(&[("GEMINI_API_KEY", "k")])
            .unwrap()
            .warn_if_unconfigured());

        assert!(!logs.contents().contains("GEMINI_API_KEY"));
    }
}
