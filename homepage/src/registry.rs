//! The feature list shown on the yabs homepage.
//!
//! Order here is display order: left to right, then wrapping.

use crate::types::{FeatureEntry, Inline, is_blank};

const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        key: None,
        title: "Composable",
        description: &[
            Inline::Text("Declare builds in "),
            Inline::Link {
                text: "risor",
                href: "https://risor.io/",
            },
            Inline::Text(", a go-like scripting language; or extend "),
            Inline::Code("yabs"),
            Inline::Text(" yourself with its API."),
        ],
        icon: None,
    },
    FeatureEntry {
        key: None,
        title: "Opt-in Complexity",
        description: &[
            Inline::Emphasis("Make"),
            Inline::Text(
                " your builds as simple or as complex as you want. \
                 Declare outputs if you want. No steep learning curves here.",
            ),
        ],
        icon: None,
    },
    FeatureEntry {
        key: None,
        title: "Caching",
        description: &[
            Inline::Text("Declare outputs and "),
            Inline::Code("yabs"),
            Inline::Text(" will track them so you don't rebuild unnecessarily."),
        ],
        icon: None,
    },
];

/// Every feature advertised on the homepage, in display order.
pub static FEATURE_LIST: &[FeatureEntry] = FEATURES;

// A blank title or empty description in the list fails the build.
const _: () = assert_well_formed(FEATURES);

/// Compile-time check over a registry literal.
///
/// Panics (a compile error when evaluated in `const` context) if any entry
/// has a blank title or an empty description.
pub const fn assert_well_formed(entries: &[FeatureEntry]) {
    let mut i = 0;
    while i < entries.len() {
        assert!(!is_blank(entries[i].title), "feature entry has a blank title");
        assert!(
            !entries[i].description.is_empty(),
            "feature entry has an empty description"
        );
        i += 1;
    }
}

/// Read-only view of the shipped registry.
pub fn feature_list() -> &'static [FeatureEntry] {
    FEATURE_LIST
}
