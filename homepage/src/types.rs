//! Content types for the homepage feature grid.
//!
//! Entries are plain `'static` data so the whole registry can live in a
//! `static` slice and be checked by the compiler:
//!
//! - **Typed** - required `title` and `description`, optional `icon` and `key`
//! - **Serializable** - dump the registry as JSON via serde
//! - **Markup-free** - descriptions are inline nodes, not HTML strings
//!
//! # Example
//!
//! ```rust
//! use yabs_homepage::types::{FeatureEntry, Inline};
//!
//! const ENTRY: FeatureEntry = FeatureEntry {
//!     key: None,
//!     title: "Composable",
//!     description: &[
//!         Inline::Text("Declare builds in "),
//!         Inline::Link { text: "risor", href: "https://risor.io/" },
//!     ],
//!     icon: None,
//! };
//!
//! assert_eq!(ENTRY.title, "Composable");
//! ```

use serde::Serialize;

/// One unit of rich-text description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text(&'static str),
    /// Hyperlink with visible text and target
    Link {
        /// Visible anchor text
        text: &'static str,
        /// Link target (href)
        href: &'static str,
    },
    /// Emphasized text
    Emphasis(&'static str),
    /// Monospaced inline code
    Code(&'static str),
}

impl Inline {
    /// The visible text of the node.
    pub fn text(&self) -> &'static str {
        match *self {
            Inline::Text(text) | Inline::Emphasis(text) | Inline::Code(text) => text,
            Inline::Link { text, .. } => text,
        }
    }
}

/// Reference to a decorative graphical asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Asset name or path, resolved through an [`crate::assets::AssetLookup`]
    pub src: &'static str,
    /// Alternative text
    pub alt: &'static str,
}

/// One advertised capability on the homepage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    /// Explicit rendering identity; the registry index is used when absent
    pub key: Option<&'static str>,
    /// Card heading (must not be blank)
    pub title: &'static str,
    /// Card body (must not be empty)
    pub description: &'static [Inline],
    /// Optional icon shown above the heading
    pub icon: Option<Icon>,
}

impl FeatureEntry {
    /// Rendering identity for the entry at `index`.
    pub fn identity(&self, index: usize) -> String {
        match self.key {
            Some(key) => key.to_string(),
            None => index.to_string(),
        }
    }
}

/// Whether `s` is empty or only ASCII whitespace. Usable in `const` context.
pub const fn is_blank(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}
