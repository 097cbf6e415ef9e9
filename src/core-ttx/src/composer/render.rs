//! Rendering a configuration into the llms.txt rule format.

use crate::composer::config::GeneratorConfig;
use crate::composer::directives::directives_for;

/// Non-fatal findings raised while composing. Surfaced to the user, never
/// block output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeWarning {
    /// A pattern uses `*` somewhere other than as the final character;
    /// the target format only recognizes a trailing wildcard.
    AmbiguousWildcard { pattern: String },
}

impl std::fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousWildcard { pattern } => {
                write!(f, "Wildcard in '{}' is only recognized as a trailing marker", pattern)
            }
        }
    }
}

/// A composed llms.txt body plus any warnings raised along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedRules {
    pub text: String,
    pub warnings: Vec<ComposeWarning>,
}

/// Renders the configuration into the llms.txt rule format.
///
/// The directive block is a single `User-agent: *` header followed by
/// every `Allow` line and then every `Disallow` line, one pattern per
/// line with no blank lines in between. A product feed URL, when set,
/// trails the block as a comment. Always renders the current, possibly
/// partial state: an empty configuration still yields the header.
///
/// # Examples
///
/// ```
/// # use core_ttx::composer::{GeneratorConfig, compose};
/// let config = GeneratorConfig::builder()
///     .product_paths("/products/*".to_string())
///     .disallow_paths("/cart".to_string())
///     .build();
///
/// let composed = compose(&config);
/// assert_eq!(composed.text, "User-agent: *\nAllow: /products/*\nDisallow: /cart\n");
/// ```
pub fn compose(config: &GeneratorConfig) -> ComposedRules {
    let directives = directives_for(config);

    let mut warnings = Vec::new();
    for directive in &directives {
        if directive.has_ambiguous_wildcard() {
            warnings.push(ComposeWarning::AmbiguousWildcard {
                pattern: directive.path_pattern.clone(),
            });
        }
    }

    // Directive block: header first, no blank lines inside.
    let mut text = String::from("User-agent: *\n");
    for directive in &directives {
        text.push_str(&format!("{}: {}\n", directive.kind.keyword(), directive.path_pattern));
    }

    // Feed metadata trails the directive block, never interleaved.
    if let Some(feed_url) = config.product_feed_url.as_deref() {
        let feed_url = feed_url.trim();
        if !feed_url.is_empty() {
            text.push('\n');
            text.push_str(&format!("# Product feed: {}\n", feed_url));
        }
    }

    ComposedRules { text, warnings }
}
