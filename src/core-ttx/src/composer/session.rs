//! Edit-tracking session state behind the generator form.

use crate::composer::config::{GeneratorConfig, Platform};
use crate::composer::render::{ComposedRules, compose};

/// Tracks the generator form between user events.
///
/// Each path field is a two-state machine: unset until the first edit,
/// set afterwards. Selecting a platform pre-fills only fields the user
/// has not touched since the last platform change, so manual edits always
/// win over presets. No validation gates the preview; the current,
/// possibly partial state always renders.
///
/// The session is owned by the UI layer holding it; user input events
/// arrive serialized, so there is no shared mutable state to guard.
#[derive(Debug, Clone, Default)]
pub struct GeneratorSession {
    config: GeneratorConfig,
    product_paths_edited: bool,
    disallow_paths_edited: bool,
}

impl GeneratorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Records an edit of the product feed URL. Blank input unsets it.
    pub fn set_product_feed_url(&mut self, url: &str) {
        let url = url.trim();
        self.config.product_feed_url = if url.is_empty() { None } else { Some(url.to_string()) };
    }

    /// Records an edit of the allow-path list; the field stays user-owned
    /// until the next platform change.
    pub fn set_product_paths(&mut self, paths: &str) {
        self.config.product_paths = paths.to_string();
        self.product_paths_edited = true;
    }

    /// Records an edit of the disallow-path list; the field stays
    /// user-owned until the next platform change.
    pub fn set_disallow_paths(&mut self, paths: &str) {
        self.config.disallow_paths = paths.to_string();
        self.disallow_paths_edited = true;
    }

    /// Applies a platform selection.
    ///
    /// Path fields are pre-filled from the platform preset, skipping any
    /// field the user has edited since the last platform change. Edit
    /// marks are cleared afterwards, so the next selection starts a fresh
    /// tracking window.
    pub fn select_platform(&mut self, platform: Platform) {
        self.config.platform = platform;

        if let Some(preset) = platform.preset() {
            if !self.product_paths_edited {
                self.config.product_paths = preset.product_paths.to_string();
            }
            if !self.disallow_paths_edited {
                self.config.disallow_paths = preset.disallow_paths.to_string();
            }
        }

        self.product_paths_edited = false;
        self.disallow_paths_edited = false;
    }

    /// Renders the live preview for the current state.
    pub fn preview(&self) -> ComposedRules {
        compose(&self.config)
    }
}
