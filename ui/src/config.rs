//! Site configuration embedded from `site.toml`.
//!
//! Every field carries a serde default, so a partial file (or an empty one) is valid.
//! A malformed file is logged and replaced by defaults rather than failing the render.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;

use crate::core::locale::Locale;
use crate::error::SiteError;

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_toml(EMBEDDED_CONFIG) {
    Ok(config) => config,
    Err(err) => {
        warn!("[config] {err}; using defaults");
        SiteConfig::default()
    }
});

/// Parsed, process-wide site configuration.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub default_locale: String,
    pub dashboard: DashboardConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub loading_delay_ms: u64,
    pub refresh_interval_ms: u64,
    pub series_months: usize,
    pub max_abs_change: f64,
}

impl DashboardConfig {
    /// Clamp bound for metric drift; `None` when clamping is disabled.
    pub fn change_bound(&self) -> Option<f64> {
        (self.max_abs_change > 0.0).then_some(self.max_abs_change)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub yearly_discount: f64,
}

impl SiteConfig {
    pub fn from_toml(raw: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(raw)?)
    }

    /// Configured default locale; an unknown code falls back to English.
    pub fn default_locale(&self) -> Locale {
        Locale::parse(&self.default_locale).unwrap_or_default()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Nexora".to_string(),
            default_locale: "en".to_string(),
            dashboard: DashboardConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 1_400,
            refresh_interval_ms: 4_000,
            series_months: 12,
            max_abs_change: 99.9,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            yearly_discount: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_toml(EMBEDDED_CONFIG).expect("embedded site.toml parses");
        assert_eq!(config.brand, "Nexora");
        assert_eq!(config.default_locale(), Locale::En);
        assert_eq!(config.dashboard.loading_delay_ms, 1_400);
        assert_eq!(config.dashboard.refresh_interval_ms, 4_000);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml("[dashboard]\nseries_months = 6\n").unwrap();
        assert_eq!(config.dashboard.series_months, 6);
        assert_eq!(config.dashboard.refresh_interval_ms, 4_000);
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn zero_drift_bound_disables_clamping() {
        let config = SiteConfig::from_toml("[dashboard]\nmax_abs_change = 0.0\n").unwrap();
        assert_eq!(config.dashboard.change_bound(), None);
        assert_eq!(DashboardConfig::default().change_bound(), Some(99.9));
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(SiteConfig::from_toml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            SiteConfig::from_toml("brand = ["),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn unknown_default_locale_falls_back_to_english() {
        let config = SiteConfig::from_toml("default_locale = \"fr\"").unwrap();
        assert_eq!(config.default_locale(), Locale::En);
    }
}
