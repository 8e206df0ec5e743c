//! Markup-independent output tree of the grid renderer.
//!
//! A [`Fragment`] is plain data: it compares structurally, serializes to
//! JSON and is turned into HTML by [`crate::components::FragmentView`].
//!
//! ```text
//! Section
//! └── Container
//!     └── Row
//!         └── Cell (one per entry, keyed)
//!             ├── Block > Icon      (only when the entry has an icon)
//!             └── Block
//!                 ├── Heading
//!                 └── Paragraph > Text | Link | Emphasis | Code
//! ```

use serde::Serialize;

/// One node of the rendered tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// Outer section
    Section { class: String, children: Vec<Fragment> },
    /// Width-limiting container
    Container { class: String, children: Vec<Fragment> },
    /// Grid row
    Row { class: String, children: Vec<Fragment> },
    /// Grid cell carrying the entry's rendering identity
    Cell {
        key: String,
        class: String,
        children: Vec<Fragment>,
    },
    /// Generic block (card body, icon wrapper)
    Block { class: String, children: Vec<Fragment> },
    /// Decorative image
    Icon { class: String, src: String, alt: String },
    /// Card heading
    Heading { text: String },
    /// Card description
    Paragraph { children: Vec<Fragment> },
    /// Plain text
    Text { text: String },
    /// Anchor
    Link { href: String, text: String },
    /// Emphasized text
    Emphasis { text: String },
    /// Monospaced span
    Code { text: String },
}

impl Fragment {
    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[Fragment] {
        match self {
            Fragment::Section { children, .. }
            | Fragment::Container { children, .. }
            | Fragment::Row { children, .. }
            | Fragment::Cell { children, .. }
            | Fragment::Block { children, .. }
            | Fragment::Paragraph { children } => children.as_slice(),
            Fragment::Icon { .. }
            | Fragment::Heading { .. }
            | Fragment::Text { .. }
            | Fragment::Link { .. }
            | Fragment::Emphasis { .. }
            | Fragment::Code { .. } => &[],
        }
    }

    /// Pre-order traversal of this node and every descendant.
    pub fn descendants(&self) -> Vec<&Fragment> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Grid cells in display order.
    pub fn cells(&self) -> Vec<&Fragment> {
        self.descendants()
            .into_iter()
            .filter(|node| matches!(node, Fragment::Cell { .. }))
            .collect()
    }

    /// Headings in display order.
    pub fn headings(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Fragment::Heading { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Visible text of the subtree, concatenated.
    pub fn text_content(&self) -> String {
        match self {
            Fragment::Heading { text }
            | Fragment::Text { text }
            | Fragment::Link { text, .. }
            | Fragment::Emphasis { text }
            | Fragment::Code { text } => text.clone(),
            Fragment::Icon { .. } => String::new(),
            _ => self.children().iter().map(Fragment::text_content).collect(),
        }
    }

    /// Pretty JSON dump of the tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
