//! Style mapping for the feature grid.
//!
//! The renderer never hard-codes class names. It asks a [`StyleResolver`]
//! for the token behind each logical [`StyleKey`], so the same tree can be
//! dressed for Infima (the Docusaurus default), a CSS-modules build, or a
//! test fixture.
//!
//! # Customization
//!
//! ```rust
//! use std::collections::HashMap;
//! use yabs_homepage::styles::{StyleKey, StyleResolver};
//!
//! let mut styles = HashMap::new();
//! styles.insert(StyleKey::Features, "features_x1y2".to_string());
//!
//! assert_eq!(styles.class_for(StyleKey::Features), "features_x1y2");
//! // Unmapped keys fall back to their logical name.
//! assert_eq!(styles.class_for(StyleKey::Row), "row");
//! ```

use std::collections::HashMap;

use serde::Serialize;

/// Columns in the Infima grid.
pub const GRID_COLUMNS: u8 = 12;

/// Cells per row on wide viewports.
pub const DEFAULT_CELLS_PER_ROW: u8 = 3;

/// Logical style names used by the grid renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKey {
    /// Outer section
    Features,
    /// Width-limiting container inside the section
    Container,
    /// Row holding the grid cells
    Row,
    /// One equal-width grid cell
    Column,
    /// Card body (heading + description)
    CardBody,
    /// Centered block wrapping the icon
    IconWrapper,
    /// Icon image
    FeatureSvg,
}

impl StyleKey {
    /// Logical name of the key.
    pub fn name(self) -> &'static str {
        match self {
            StyleKey::Features => "features",
            StyleKey::Container => "container",
            StyleKey::Row => "row",
            StyleKey::Column => "column",
            StyleKey::CardBody => "card-body",
            StyleKey::IconWrapper => "icon-wrapper",
            StyleKey::FeatureSvg => "featureSvg",
        }
    }
}

/// Maps a logical style name to a presentation class token.
pub trait StyleResolver {
    /// Class token for `key`. May be empty.
    fn class_for(&self, key: StyleKey) -> String;
}

impl StyleResolver for HashMap<StyleKey, String> {
    fn class_for(&self, key: StyleKey) -> String {
        self.get(&key)
            .cloned()
            .unwrap_or_else(|| key.name().to_string())
    }
}

/// Infima utility classes plus the two CSS-module classes of the section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfimaStyles {
    /// Class for the outer section (`styles.features`)
    pub features_class: String,
    /// Class for icons (`styles.featureSvg`)
    pub icon_class: String,
    /// Cells per row; always a divisor of [`GRID_COLUMNS`]
    cells_per_row: u8,
}

impl Default for InfimaStyles {
    fn default() -> Self {
        Self::new("features", "featureSvg")
    }
}

impl InfimaStyles {
    /// Styles with the given module classes and the default column policy.
    pub fn new(features_class: impl Into<String>, icon_class: impl Into<String>) -> Self {
        Self {
            features_class: features_class.into(),
            icon_class: icon_class.into(),
            cells_per_row: DEFAULT_CELLS_PER_ROW,
        }
    }

    /// Styles with `cells_per_row` cells per row.
    ///
    /// Counts that do not evenly divide the 12-column grid fall back to
    /// [`DEFAULT_CELLS_PER_ROW`].
    pub fn with_cells_per_row(mut self, cells_per_row: u8) -> Self {
        if cells_per_row == 0 || cells_per_row > GRID_COLUMNS || GRID_COLUMNS % cells_per_row != 0
        {
            tracing::warn!(
                cells_per_row,
                fallback = DEFAULT_CELLS_PER_ROW,
                "cells per row must divide the {GRID_COLUMNS}-column grid"
            );
            self.cells_per_row = DEFAULT_CELLS_PER_ROW;
        } else {
            self.cells_per_row = cells_per_row;
        }
        self
    }

    /// Cells per row in effect.
    pub fn cells_per_row(&self) -> u8 {
        self.cells_per_row
    }

    /// Grid columns spanned by one cell.
    pub fn column_span(&self) -> u8 {
        GRID_COLUMNS / self.cells_per_row
    }
}

impl StyleResolver for InfimaStyles {
    fn class_for(&self, key: StyleKey) -> String {
        match key {
            StyleKey::Features => self.features_class.clone(),
            StyleKey::Container => "container".to_string(),
            StyleKey::Row => "row".to_string(),
            StyleKey::Column => format!("col col--{}", self.column_span()),
            StyleKey::CardBody => "text--center padding-horiz--md".to_string(),
            StyleKey::IconWrapper => "text--center".to_string(),
            StyleKey::FeatureSvg => self.icon_class.clone(),
        }
    }
}

/// Stylesheet for the section's module classes.
///
/// Infima utility classes (`container`, `row`, `col--N`, `text--center`)
/// come from the hosting site; this only covers what the section adds.
pub const FEATURES_CSS: &str = r#"
.features {
    display: flex;
    align-items: center;
    padding: 2rem 0;
    width: 100%;
}

.featureSvg {
    height: 200px;
    width: 200px;
}
"#;
