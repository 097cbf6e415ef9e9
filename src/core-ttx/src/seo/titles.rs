//! Page title derivation and validation.

use regex::Regex;

use crate::errors::{CoreError, Result};
use crate::seo::SITE_NAME;

/// Longest title accepted by the validator, in characters.
pub const MAX_TITLE_LENGTH: usize = 60;
/// Shortest title accepted by the validator, in characters.
pub const MIN_TITLE_LENGTH: usize = 10;

/// Joins a page title and a suffix with an en dash, as shown in the
/// browser tab.
///
/// Page titles are assumed short, so no truncation happens here. An empty
/// suffix yields the base alone, never a dangling separator.
///
/// # Errors
///
/// Returns an error if `base` is empty after trimming.
///
/// # Examples
///
/// ```
/// # use core_ttx::seo::generate_title;
/// assert_eq!(generate_title("Pricing", "TheLLMsTxt").unwrap(), "Pricing – TheLLMsTxt");
/// assert_eq!(generate_title("Pricing", "").unwrap(), "Pricing");
/// assert!(generate_title("   ", "TheLLMsTxt").is_err());
/// ```
pub fn generate_title(base: &str, suffix: &str) -> Result<String> {
    let base = base.trim();
    if base.is_empty() {
        return Err(CoreError::InvalidInput("title base must not be empty".to_string()));
    }

    let suffix = suffix.trim();
    if suffix.is_empty() {
        return Ok(base.to_string());
    }

    Ok(format!("{} – {}", base, suffix))
}

/// Builds the title for a not-found page from the slug that missed.
///
/// The slug is title-cased (hyphens become spaces, every word
/// capitalized) and formatted as `"{base_title} - {TitleCasedSlug} | {site}"`.
/// An empty slug yields `base_title` unchanged.
///
/// # Examples
///
/// ```
/// # use core_ttx::seo::generate_404_title;
/// assert_eq!(
///     generate_404_title("complete-guide-to-llms-txt", "Blog Post Not Found"),
///     "Blog Post Not Found - Complete Guide To Llms Txt | TheLLMsTxt"
/// );
/// assert_eq!(generate_404_title("", "Blog Post Not Found"), "Blog Post Not Found");
/// ```
pub fn generate_404_title(slug: &str, base_title: &str) -> String {
    if slug.trim().is_empty() {
        return base_title.to_string();
    }

    let title_cased = slug
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");

    format!("{} - {} | {}", base_title, title_cased, SITE_NAME)
}

/// Capitalizes the first character of a word and lowercases the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Outcome of a title boundary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleValidation {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl TitleValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Checks a title against the SEO length bounds.
///
/// Pure boundary check, no side effects: empty titles, titles longer than
/// [`MAX_TITLE_LENGTH`], and titles shorter than [`MIN_TITLE_LENGTH`]
/// characters fail.
pub fn validate_title(title: &str) -> TitleValidation {
    if title.is_empty() {
        return TitleValidation::invalid("Title is required");
    }

    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return TitleValidation::invalid("Title must be 60 characters or fewer");
    }
    if length < MIN_TITLE_LENGTH {
        return TitleValidation::invalid("Title must be at least 10 characters");
    }

    TitleValidation::valid()
}

/// Checks the URL-safe slug invariant: non-empty, letters, digits, and
/// hyphens only.
///
/// # Errors
///
/// Returns an error if the slug contains any other character, or if the
/// slug regex fails to compile.
pub fn validate_slug(slug: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z0-9-]+$")?;

    if re.is_match(slug) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!("slug is not URL-safe: '{}'", slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_title() {
        assert_eq!(generate_title("Pricing", "TheLLMsTxt").unwrap(), "Pricing – TheLLMsTxt");
        assert_eq!(generate_title("  Pricing  ", "TheLLMsTxt").unwrap(), "Pricing – TheLLMsTxt");
    }

    #[test]
    fn test_generate_title_empty_base() {
        assert!(generate_title("", "TheLLMsTxt").is_err());
        assert!(generate_title("   ", "TheLLMsTxt").is_err());
    }

    #[test]
    fn test_generate_title_empty_suffix() {
        assert_eq!(generate_title("Pricing", "").unwrap(), "Pricing");
        assert_eq!(generate_title("Pricing", "  ").unwrap(), "Pricing");
    }

    #[test]
    fn test_generate_404_title() {
        assert_eq!(
            generate_404_title("complete-guide-to-llms-txt", "Blog Post Not Found"),
            "Blog Post Not Found - Complete Guide To Llms Txt | TheLLMsTxt"
        );
    }

    #[test]
    fn test_generate_404_title_empty_slug() {
        assert_eq!(generate_404_title("", "Blog Post Not Found"), "Blog Post Not Found");
        assert_eq!(generate_404_title("   ", "Page Not Found"), "Page Not Found");
    }

    #[test]
    fn test_generate_404_title_collapses_double_hyphens() {
        assert_eq!(generate_404_title("a--b", "Not Found"), "Not Found - A B | TheLLMsTxt");
    }

    #[test]
    fn test_capitalize_word() {
        assert_eq!(capitalize_word("hello"), "Hello");
        assert_eq!(capitalize_word("WORLD"), "World");
        assert_eq!(capitalize_word("a"), "A");
        assert_eq!(capitalize_word(""), "");
    }

    #[test]
    fn test_validate_title_empty() {
        let result = validate_title("");
        assert!(!result.is_valid);
        assert!(result.message.is_some());
    }

    #[test]
    fn test_validate_title_too_long() {
        let result = validate_title(&"A".repeat(70));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_validate_title_too_short() {
        let result = validate_title("Short");
        assert!(!result.is_valid);
    }

    #[test]
    fn test_validate_title_boundaries() {
        assert!(validate_title(&"A".repeat(60)).is_valid);
        assert!(!validate_title(&"A".repeat(61)).is_valid);
        assert!(validate_title(&"A".repeat(10)).is_valid);
        assert!(!validate_title(&"A".repeat(9)).is_valid);
    }

    #[test]
    fn test_validate_title_ok() {
        let result = validate_title("Perfectly Fine Title");
        assert!(result.is_valid);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("complete-guide-to-llms-txt").is_ok());
        assert!(validate_slug("page2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("path/segment").is_err());
        assert!(validate_slug("uber-für-alle").is_err());
    }
}
