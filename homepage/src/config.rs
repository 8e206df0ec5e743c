//! Configuration file support for the homepage section.
//!
//! Loads optional `homepage.toml` from the docs site root.

use std::path::Path;

use serde::Deserialize;

use crate::assets::AssetManifest;
use crate::styles::{DEFAULT_CELLS_PER_ROW, InfimaStyles};

/// Name of the config file looked up by [`HomepageConfig::load`].
pub const CONFIG_FILE: &str = "homepage.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomepageConfig {
    /// CSS module class of the outer section
    pub features_class: String,
    /// CSS module class of feature icons
    pub icon_class: String,
    /// Cells per row; must divide 12
    pub columns: u8,
    /// Where icon assets live
    pub assets: AssetManifest,
    /// Stylesheets linked from the preview page
    pub stylesheets: Vec<String>,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        let styles = InfimaStyles::default();
        Self {
            features_class: styles.features_class,
            icon_class: styles.icon_class,
            columns: DEFAULT_CELLS_PER_ROW,
            assets: AssetManifest::default(),
            stylesheets: Vec::new(),
        }
    }
}

impl HomepageConfig {
    /// Load config from `homepage.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Style resolver described by this config.
    pub fn styles(&self) -> InfimaStyles {
        InfimaStyles::new(&self.features_class, &self.icon_class).with_cells_per_row(self.columns)
    }
}
