//! Meta description derivation.

/// Default character limit for meta descriptions.
pub const DEFAULT_DESCRIPTION_LENGTH: usize = 160;

/// Used when a page has no excerpt to derive a description from.
const FALLBACK_DESCRIPTION: &str =
    "Generate an llms.txt file to control how AI crawlers read and cite your website.";

/// Derives a meta description from page content, bounded to `max_length`
/// characters.
///
/// Content at or under the limit passes through unchanged. Longer content
/// is cut to `max_length - 3` characters, backed up to the later of the
/// last sentence end or the last word break (sentence end wins ties), and
/// finished with `"..."`. Empty content yields a fixed fallback sentence.
///
/// The output never exceeds `max_length` characters and never ends in the
/// middle of a word.
///
/// # Examples
///
/// ```
/// # use core_ttx::seo::generate_meta_description;
/// let short = "Plans for every team size.";
/// assert_eq!(generate_meta_description(short, 160), short);
///
/// let long = "Alpha beta gamma delta.Epsilonzetaetathetaiotakappalambdamunuxiomicron";
/// assert_eq!(generate_meta_description(long, 40), "Alpha beta gamma delta...");
/// ```
pub fn generate_meta_description(content: &str, max_length: usize) -> String {
    if content.trim().is_empty() {
        return FALLBACK_DESCRIPTION.to_string();
    }

    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= max_length {
        return content.to_string();
    }

    // Cut leaves room for the ellipsis, counted in characters so
    // multi-byte content never splits a code point.
    let cut = max_length.saturating_sub(3);
    let prefix: String = chars[..cut].iter().collect();

    // Back up to the later of the last sentence end or word break.
    let boundary = match (prefix.rfind('.'), prefix.rfind(' ')) {
        (Some(sentence), Some(word)) if sentence >= word => sentence,
        (_, Some(word)) => word,
        (Some(sentence), None) => sentence,
        // Single unbroken token, hard cut is all that's left.
        (None, None) => prefix.len(),
    };

    let truncated = prefix[..boundary].trim_end();
    if truncated.is_empty() {
        return format!("{}...", prefix.trim_end());
    }

    format!("{}...", truncated)
}

/// Derives a meta description with the default 160-character limit.
pub fn meta_description(content: &str) -> String {
    generate_meta_description(content, DEFAULT_DESCRIPTION_LENGTH)
}
