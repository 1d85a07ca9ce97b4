//! Site configuration.
//!
//! The landing binary embeds `site.toml` at compile time. Every key is
//! optional; missing keys keep the defaults below.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::carousel::{HERO_PERIOD, TESTIMONIAL_PERIOD};
use crate::error::ConfigError;
use crate::header::SCROLL_THRESHOLD_PX;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name used in the header, footer and copyright line
    pub agency_name: String,
    /// Hero slide rotation period in milliseconds
    pub hero_interval_ms: u64,
    /// Testimonial rotation period in milliseconds
    pub testimonial_interval_ms: u64,
    /// Scroll offset past which the header turns solid
    pub scroll_threshold_px: f64,
    /// How long the newsletter confirmation stays visible
    pub newsletter_confirmation_ms: u64,
    /// POST target for submitted leads. Leads are only logged when unset.
    pub lead_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            agency_name: "PulseDigital".to_string(),
            hero_interval_ms: HERO_PERIOD.as_millis() as u64,
            testimonial_interval_ms: TESTIMONIAL_PERIOD.as_millis() as u64,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            newsletter_confirmation_ms: 3000,
            lead_endpoint: None,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a TOML document, falling back to defaults when it is invalid.
    pub fn from_toml_or_default(source: &str) -> Self {
        match Self::parse(source) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "falling back to default site config");
                Self::default()
            }
        }
    }

    /// Replace the lead endpoint, typically with a build-time variable.
    /// `None` and blank values keep the configured endpoint.
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.lead_endpoint = Some(endpoint.to_string());
        }
        self
    }

    /// Hero rotation period.
    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    /// Testimonial rotation period.
    pub fn testimonial_interval(&self) -> Duration {
        Duration::from_millis(self.testimonial_interval_ms)
    }

    /// Newsletter confirmation duration.
    pub fn newsletter_confirmation(&self) -> Duration {
        Duration::from_millis(self.newsletter_confirmation_ms)
    }

    /// Configured lead endpoint, ignoring blank strings.
    pub fn lead_endpoint(&self) -> Option<&str> {
        self.lead_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.agency_name, "PulseDigital");
        assert_eq!(config.hero_interval(), Duration::from_secs(5));
        assert_eq!(config.testimonial_interval(), Duration::from_secs(6));
        assert_eq!(config.newsletter_confirmation(), Duration::from_secs(3));
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.lead_endpoint(), None);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SiteConfig::parse("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = SiteConfig::parse(
            r#"
agency_name = "Northwind Growth"
testimonial_interval_ms = 8000
lead_endpoint = "/api/leads"
"#,
        )
        .unwrap();

        assert_eq!(config.agency_name, "Northwind Growth");
        assert_eq!(config.testimonial_interval(), Duration::from_secs(8));
        assert_eq!(config.hero_interval(), Duration::from_secs(5));
        assert_eq!(config.lead_endpoint(), Some("/api/leads"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = SiteConfig::parse("hero_interval_ms = \"fast\"").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
        assert_eq!(
            SiteConfig::from_toml_or_default("hero_interval_ms = \"fast\""),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config =
            SiteConfig::default().with_endpoint_override(Some("https://crm.example/leads"));
        assert_eq!(config.lead_endpoint(), Some("https://crm.example/leads"));

        let kept = config.clone().with_endpoint_override(Some("   "));
        assert_eq!(kept, config);

        let kept = config.clone().with_endpoint_override(None);
        assert_eq!(kept, config);
    }

    #[test]
    fn test_blank_endpoint_is_unset() {
        let config = SiteConfig::parse("lead_endpoint = \"\"").unwrap();
        assert_eq!(config.lead_endpoint(), None);
    }
}
