//! CLI configuration.

use anyhow::{Context, Result};
use salon_commerce::render::Messages;
use salon_commerce::Currency;
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// User-visible strings.
    #[serde(default)]
    pub messages: Messages,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source configuration.
///
/// `url` takes precedence over `path` when both are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Published CSV export URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Local CSV file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Append a timestamp query parameter to HTTP fetches.
    #[serde(default = "default_true")]
    pub cache_bust: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            cache_bust: true,
        }
    }
}

impl CatalogConfig {
    /// The configured location, URL first.
    pub fn location(&self) -> Option<&str> {
        self.url.as_deref().or(self.path.as_deref())
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used to format prices.
    #[serde(default)]
    pub currency: Currency,
}

/// Generate a default salon.toml config file.
pub fn generate_default_config(source: Option<&str>) -> String {
    let catalog = match source {
        Some(location) if location.starts_with("http://") || location.starts_with("https://") => {
            format!("url = \"{location}\"")
        }
        Some(location) => format!("path = \"{location}\""),
        None => "# url = \"https://docs.google.com/spreadsheets/d/e/<id>/pub?output=csv\"\n# path = \"catalog.csv\"".to_string(),
    };

    format!(
        r#"# Salon storefront configuration

[catalog]
{catalog}
cache_bust = true

[display]
currency = "RUB"

[logging]
format = "human"
# level = "salon=info,salon_commerce=info,salon_data=info"

[messages]
# Every user-visible string can be overridden here, e.g.:
# cart_empty = "Корзина пуста"
# order_thanks = "Спасибо, {{name}}! Мы свяжемся с вами по телефону."
"#,
        catalog = catalog
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(config.catalog.cache_bust);
        assert_eq!(config.catalog.location(), None);
        assert_eq!(config.display.currency, Currency::RUB);
        assert_eq!(config.messages, Messages::default());
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_parses() {
        let text = generate_default_config(Some("https://docs.example/pub?output=csv"));
        let config: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(
            config.catalog.location(),
            Some("https://docs.example/pub?output=csv")
        );

        let text = generate_default_config(None);
        let config: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.catalog.location(), None);
    }

    #[test]
    fn test_url_wins_over_path() {
        let config: CliConfig = toml::from_str(
            r#"
[catalog]
url = "https://docs.example/catalog.csv"
path = "catalog.csv"
cache_bust = false

[display]
currency = "USD"

[messages]
cart_empty = "Your bag is empty"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.location(), Some("https://docs.example/catalog.csv"));
        assert!(!config.catalog.cache_bust);
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.messages.cart_empty, "Your bag is empty");
        assert_eq!(config.messages.any_option, "Все");
    }
}
