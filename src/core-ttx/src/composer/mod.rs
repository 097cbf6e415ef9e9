//! llms.txt rule composition.
//!
//! Turns the generator form state into the line-oriented rule format AI
//! crawlers read: a `User-agent: *` header, `Allow:` lines, then
//! `Disallow:` lines, one path pattern each. The composer's job ends at
//! producing the string; placing the file at a site's `/llms.txt` is the
//! user's side of the contract.

// Module declarations
mod config;
mod directives;
mod presets;
mod render;
mod session;

// Public API re-exports
pub use config::{GeneratorConfig, GeneratorConfigBuilder, Platform};
pub use directives::{DirectiveKind, RuleDirective, directives_for, split_path_field};
pub use presets::PlatformPreset;
pub use render::{ComposeWarning, ComposedRules, compose};
pub use session::GeneratorSession;
