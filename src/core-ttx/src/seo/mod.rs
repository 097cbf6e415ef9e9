//! SEO text normalization: deterministic, length-bounded strings for page
//! metadata.
//!
//! Every function here is a pure transform over its documented input
//! domain. Out-of-domain input is the caller's responsibility to exclude;
//! these are formatting helpers, not a validation boundary for untrusted
//! network input.

// Module declarations
mod canonical;
mod description;
mod titles;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

// Public API re-exports
pub use canonical::generate_canonical_url;
pub use description::{DEFAULT_DESCRIPTION_LENGTH, generate_meta_description, meta_description};
pub use titles::{
    MAX_TITLE_LENGTH, MIN_TITLE_LENGTH, TitleValidation, generate_404_title, generate_title, validate_slug,
    validate_title,
};

/// Site name appended to derived page titles.
pub const SITE_NAME: &str = "TheLLMsTxt";

/// Raw per-page inputs that SEO strings are derived from.
///
/// Constructed per page render request from static content; never
/// persisted. The slug must be URL-safe (letters, digits, hyphens).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoInput {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

/// Derived, render-ready SEO strings for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub keywords: String,
}

/// Derives the full metadata set for a page from its raw inputs.
///
/// # Errors
///
/// Returns an error if the slug is not URL-safe or the title is empty
/// after trimming.
///
/// # Examples
///
/// ```
/// # use core_ttx::seo::{SeoInput, derive_page_metadata};
/// let input = SeoInput {
///     slug: "complete-guide-to-llms-txt".to_string(),
///     title: "Complete Guide".to_string(),
///     excerpt: "Everything about llms.txt.".to_string(),
///     tags: vec!["llms".to_string(), "seo".to_string()],
/// };
///
/// let meta = derive_page_metadata(&input, "https://thellmstxt.com").unwrap();
/// assert_eq!(meta.title, "Complete Guide – TheLLMsTxt");
/// assert_eq!(meta.canonical_url, "https://thellmstxt.com/complete-guide-to-llms-txt");
/// assert_eq!(meta.keywords, "llms, seo");
/// ```
pub fn derive_page_metadata(input: &SeoInput, base_url: &str) -> Result<PageMetadata> {
    validate_slug(&input.slug)?;

    Ok(PageMetadata {
        title: generate_title(&input.title, SITE_NAME)?,
        description: meta_description(&input.excerpt),
        canonical_url: generate_canonical_url(&input.slug, base_url),
        keywords: input.tags.join(", "),
    })
}
