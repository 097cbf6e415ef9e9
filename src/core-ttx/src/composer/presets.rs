//! Per-platform path defaults pre-filled into the generator form.

use crate::composer::config::Platform;

/// Default allow/disallow path lists for a platform, in the same
/// comma-separated form the path fields hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformPreset {
    pub product_paths: &'static str,
    pub disallow_paths: &'static str,
}

impl Platform {
    /// Path defaults for this platform, or `None` when no platform is
    /// selected.
    pub fn preset(&self) -> Option<PlatformPreset> {
        match self {
            Platform::None => None,
            Platform::Shopify => Some(PlatformPreset {
                product_paths: "/products/*, /collections/*",
                disallow_paths: "/cart, /checkout, /account",
            }),
            Platform::WooCommerce => Some(PlatformPreset {
                product_paths: "/product/*, /product-category/*, /shop/*",
                disallow_paths: "/cart, /checkout, /my-account",
            }),
            Platform::BigCommerce => Some(PlatformPreset {
                product_paths: "/products/*, /categories/*",
                disallow_paths: "/cart.php, /checkout, /account.php",
            }),
            Platform::Magento => Some(PlatformPreset {
                product_paths: "/products/*, /catalog/*",
                disallow_paths: "/checkout, /customer, /wishlist",
            }),
        }
    }
}
