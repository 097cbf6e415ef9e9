//! Rule directives derived from the generator configuration.

use crate::composer::config::GeneratorConfig;

/// Kind of access an llms.txt directive line grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Allow,
    Disallow,
}

impl DirectiveKind {
    /// Case-sensitive keyword starting the directive line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Disallow => "Disallow",
        }
    }
}

/// One `Allow`/`Disallow` line of an llms.txt file.
///
/// Derived from the configuration at render time, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDirective {
    pub kind: DirectiveKind,
    pub path_pattern: String,
}

impl RuleDirective {
    pub fn allow(path_pattern: String) -> Self {
        Self {
            kind: DirectiveKind::Allow,
            path_pattern,
        }
    }

    pub fn disallow(path_pattern: String) -> Self {
        Self {
            kind: DirectiveKind::Disallow,
            path_pattern,
        }
    }

    /// True when `*` appears anywhere other than as the final character.
    /// The target format only recognizes a trailing wildcard marker.
    pub fn has_ambiguous_wildcard(&self) -> bool {
        match self.path_pattern.find('*') {
            Some(index) => index + 1 != self.path_pattern.len(),
            None => false,
        }
    }
}

/// Splits a comma-separated path field into trimmed, non-empty patterns,
/// preserving the typed order.
///
/// # Examples
///
/// ```
/// # use core_ttx::composer::split_path_field;
/// assert_eq!(split_path_field("/products/*, /collections/*"), vec!["/products/*", "/collections/*"]);
/// assert_eq!(split_path_field("/cart,,  "), vec!["/cart"]);
/// assert!(split_path_field("").is_empty());
/// ```
pub fn split_path_field(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flattens a configuration into its directive sequence: every `Allow`
/// entry first, then every `Disallow` entry, each list in typed order.
pub fn directives_for(config: &GeneratorConfig) -> Vec<RuleDirective> {
    let mut directives: Vec<RuleDirective> = split_path_field(&config.product_paths)
        .into_iter()
        .map(RuleDirective::allow)
        .collect();

    directives.extend(
        split_path_field(&config.disallow_paths)
            .into_iter()
            .map(RuleDirective::disallow),
    );

    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_field() {
        assert_eq!(
            split_path_field("/products/*, /collections/*"),
            vec!["/products/*", "/collections/*"]
        );
        assert_eq!(split_path_field("/cart,/checkout"), vec!["/cart", "/checkout"]);
        assert_eq!(split_path_field("  /cart  "), vec!["/cart"]);
    }

    #[test]
    fn test_split_path_field_drops_empty_segments() {
        assert_eq!(split_path_field("/a,,/b,"), vec!["/a", "/b"]);
        assert!(split_path_field("").is_empty());
        assert!(split_path_field(" , ,").is_empty());
    }

    #[test]
    fn test_directives_for_orders_allow_before_disallow() {
        let config = GeneratorConfig::builder()
            .product_paths("/products/*, /collections/*".to_string())
            .disallow_paths("/cart,/checkout".to_string())
            .build();

        let directives = directives_for(&config);

        assert_eq!(directives.len(), 4);
        assert_eq!(directives[0], RuleDirective::allow("/products/*".to_string()));
        assert_eq!(directives[1], RuleDirective::allow("/collections/*".to_string()));
        assert_eq!(directives[2], RuleDirective::disallow("/cart".to_string()));
        assert_eq!(directives[3], RuleDirective::disallow("/checkout".to_string()));
    }

    #[test]
    fn test_directives_for_empty_config() {
        assert!(directives_for(&GeneratorConfig::default()).is_empty());
    }

    #[test]
    fn test_ambiguous_wildcard_detection() {
        assert!(!RuleDirective::allow("/products/*".to_string()).has_ambiguous_wildcard());
        assert!(!RuleDirective::allow("/cart".to_string()).has_ambiguous_wildcard());
        assert!(RuleDirective::allow("/cart*/items".to_string()).has_ambiguous_wildcard());
        assert!(RuleDirective::allow("*/checkout".to_string()).has_ambiguous_wildcard());
        assert!(RuleDirective::allow("/a*b*".to_string()).has_ambiguous_wildcard());
    }
}
