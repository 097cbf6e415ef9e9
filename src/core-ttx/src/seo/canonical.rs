//! Canonical URL derivation.

/// Joins a site base URL and a page path into the page's canonical URL.
///
/// The path gains a leading `/` when missing and the result never carries
/// a trailing slash, so every page maps to exactly one canonical form.
/// Applying the function to its own output (with the same base) yields
/// the same string.
///
/// # Examples
///
/// ```
/// # use core_ttx::seo::generate_canonical_url;
/// assert_eq!(
///     generate_canonical_url("pricing", "https://thellmstxt.com"),
///     "https://thellmstxt.com/pricing"
/// );
/// assert_eq!(
///     generate_canonical_url("/pricing/", "https://thellmstxt.com/"),
///     "https://thellmstxt.com/pricing"
/// );
/// assert_eq!(generate_canonical_url("", "https://thellmstxt.com"), "https://thellmstxt.com");
/// ```
pub fn generate_canonical_url(path: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');

    let path = path.trim().trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }

    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
