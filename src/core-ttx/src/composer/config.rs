//! Generator configuration: the transient state behind the llms.txt
//! builder form.

use serde::{Deserialize, Serialize};

/// E-commerce platform a site runs on, used to pre-fill path defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// No platform selected; nothing is pre-filled.
    #[default]
    None,
    Shopify,
    WooCommerce,
    BigCommerce,
    Magento,
}

impl Platform {
    /// Lowercase name used in the UI and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shopify => "shopify",
            Self::WooCommerce => "woocommerce",
            Self::BigCommerce => "bigcommerce",
            Self::Magento => "magento",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "shopify" => Ok(Self::Shopify),
            "woocommerce" => Ok(Self::WooCommerce),
            "bigcommerce" => Ok(Self::BigCommerce),
            "magento" => Ok(Self::Magento),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

/// User-entered configuration for composing an llms.txt rule file.
///
/// Path fields hold comma-separated pattern lists exactly as typed; the
/// composer flattens them at render time, so a partially-filled form
/// still previews. Held in transient UI state and discarded on
/// navigation, never persisted server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Product feed URL advertised after the directive block
    pub product_feed_url: Option<String>,
    /// Comma-separated path patterns emitted as `Allow` directives
    pub product_paths: String,
    /// Comma-separated path patterns emitted as `Disallow` directives
    pub disallow_paths: String,
    /// Selected platform, drives path pre-fill
    pub platform: Platform,
}

impl GeneratorConfig {
    /// Creates a new builder for GeneratorConfig.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Builder for GeneratorConfig.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    product_feed_url: Option<String>,
    product_paths: String,
    disallow_paths: String,
    platform: Platform,
}

impl GeneratorConfigBuilder {
    /// Sets the product feed URL.
    pub fn product_feed_url(mut self, url: String) -> Self {
        self.product_feed_url = Some(url);
        self
    }

    /// Sets the comma-separated allow-path list.
    pub fn product_paths(mut self, paths: String) -> Self {
        self.product_paths = paths;
        self
    }

    /// Sets the comma-separated disallow-path list.
    pub fn disallow_paths(mut self, paths: String) -> Self {
        self.disallow_paths = paths;
        self
    }

    /// Sets the platform selection.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Builds the GeneratorConfig.
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            product_feed_url: self.product_feed_url,
            product_paths: self.product_paths,
            disallow_paths: self.disallow_paths,
            platform: self.platform,
        }
    }
}
