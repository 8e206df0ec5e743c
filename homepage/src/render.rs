//! Grid renderer: feature entries in, fragment tree out.
//!
//! Rendering is a pure, single pass over the entries. It never mutates its
//! input and never touches the filesystem; the only side channel is
//! `tracing` output. Calling it twice with the same input yields equal
//! trees.

use std::collections::HashSet;

use crate::assets::{AssetLookup, AssetManifest};
use crate::error::RenderError;
use crate::fragment::Fragment;
use crate::styles::{InfimaStyles, StyleKey, StyleResolver};
use crate::types::{FeatureEntry, Inline};

/// Collaborators consulted while rendering.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Logical style name to class token
    pub styles: &'a dyn StyleResolver,
    /// Icon reference to asset source
    pub assets: &'a dyn AssetLookup,
}

impl<'a> RenderContext<'a> {
    pub fn new(styles: &'a dyn StyleResolver, assets: &'a dyn AssetLookup) -> Self {
        Self { styles, assets }
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext").finish_non_exhaustive()
    }
}

/// Check every entry before any output is produced.
///
/// Titles count as blank when only Unicode whitespace remains, and every
/// cell identity (explicit key or index) must be unique.
pub fn validate(entries: &[FeatureEntry]) -> Result<(), RenderError> {
    let mut identities = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(RenderError::EmptyTitle { index });
        }
        if entry.description.is_empty() {
            return Err(RenderError::EmptyDescription {
                index,
                title: entry.title.to_string(),
            });
        }
        let dangling = entry
            .description
            .iter()
            .any(|node| matches!(node, Inline::Link { href, .. } if href.trim().is_empty()));
        if dangling {
            return Err(RenderError::EmptyLinkTarget {
                index,
                title: entry.title.to_string(),
            });
        }
        if entry.key.is_some_and(|key| key.trim().is_empty()) {
            return Err(RenderError::BlankKey {
                index,
                title: entry.title.to_string(),
            });
        }
        let key = entry.identity(index);
        if !identities.insert(key.clone()) {
            return Err(RenderError::DuplicateKey { index, key });
        }
    }
    Ok(())
}

/// Render `entries` into `Section > Container > Row > Cell*`.
///
/// A malformed entry rejects the whole list; nothing is rendered with a
/// blank heading.
pub fn render_features(
    entries: &[FeatureEntry],
    ctx: RenderContext<'_>,
) -> Result<Fragment, RenderError> {
    validate(entries)?;

    let cells = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_cell(index, entry, ctx))
        .collect();

    tracing::debug!(entries = entries.len(), "rendered feature grid");

    Ok(Fragment::Section {
        class: ctx.styles.class_for(StyleKey::Features),
        children: vec![Fragment::Container {
            class: ctx.styles.class_for(StyleKey::Container),
            children: vec![Fragment::Row {
                class: ctx.styles.class_for(StyleKey::Row),
                children: cells,
            }],
        }],
    })
}

/// Render with [`InfimaStyles`] and an allow-all [`AssetManifest`].
pub fn render_with_defaults(entries: &[FeatureEntry]) -> Result<Fragment, RenderError> {
    let styles = InfimaStyles::default();
    let assets = AssetManifest::default();
    render_features(entries, RenderContext::new(&styles, &assets))
}

fn render_cell(index: usize, entry: &FeatureEntry, ctx: RenderContext<'_>) -> Fragment {
    let mut children = Vec::with_capacity(2);

    if let Some(icon) = &entry.icon {
        match ctx.assets.resolve(icon) {
            Some(src) => children.push(Fragment::Block {
                class: ctx.styles.class_for(StyleKey::IconWrapper),
                children: vec![Fragment::Icon {
                    class: ctx.styles.class_for(StyleKey::FeatureSvg),
                    src,
                    alt: icon.alt.to_string(),
                }],
            }),
            None => tracing::warn!(
                title = entry.title,
                asset = icon.src,
                "icon asset not found, omitting"
            ),
        }
    }

    children.push(Fragment::Block {
        class: ctx.styles.class_for(StyleKey::CardBody),
        children: vec![
            Fragment::Heading {
                text: entry.title.to_string(),
            },
            Fragment::Paragraph {
                children: entry.description.iter().map(render_inline).collect(),
            },
        ],
    });

    Fragment::Cell {
        key: entry.identity(index),
        class: ctx.styles.class_for(StyleKey::Column),
        children,
    }
}

fn render_inline(node: &Inline) -> Fragment {
    match *node {
        Inline::Text(text) => Fragment::Text { text: text.into() },
        Inline::Link { text, href } => Fragment::Link {
            href: href.into(),
            text: text.into(),
        },
        Inline::Emphasis(text) => Fragment::Emphasis { text: text.into() },
        Inline::Code(text) => Fragment::Code { text: text.into() },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::FEATURE_LIST;
    use crate::types::Icon;

    const MOUNTAIN: Icon = Icon {
        src: "undraw_docusaurus_mountain.svg",
        alt: "mountain",
    };

    fn entry(title: &'static str) -> FeatureEntry {
        FeatureEntry {
            key: None,
            title,
            description: &[Inline::Text("description")],
            icon: None,
        }
    }

    fn card_body(cell: &Fragment) -> &Fragment {
        cell.children()
            .iter()
            .find(|child| child.children().iter().any(|c| matches!(c, Fragment::Heading { .. })))
            .expect("card body")
    }

    fn icons(cell: &Fragment) -> usize {
        cell.descendants()
            .into_iter()
            .filter(|node| matches!(node, Fragment::Icon { .. }))
            .count()
    }

    #[test]
    fn shipped_registry_renders_three_cells_in_order() {
        let tree = render_with_defaults(FEATURE_LIST).expect("render");
        assert_eq!(tree.cells().len(), 3);
        assert_eq!(tree.headings(), ["Composable", "Opt-in Complexity", "Caching"]);
    }

    #[test]
    fn cell_count_and_order_follow_input() {
        let entries: Vec<_> = ["a", "b", "c", "d", "e"].into_iter().map(entry).collect();
        let tree = render_with_defaults(&entries).expect("render");
        assert_eq!(tree.cells().len(), 5);
        assert_eq!(tree.headings(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn cells_are_keyed_by_index_or_explicit_key() {
        let entries = [
            entry("first"),
            FeatureEntry {
                key: Some("caching"),
                ..entry("second")
            },
        ];
        let tree = render_with_defaults(&entries).expect("render");
        let keys: Vec<_> = tree
            .cells()
            .into_iter()
            .map(|cell| match cell {
                Fragment::Cell { key, .. } => key.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(keys, ["0", "caching"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render_with_defaults(FEATURE_LIST).expect("render");
        let second = render_with_defaults(FEATURE_LIST).expect("render");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_registry_renders_empty_row() {
        let tree = render_with_defaults(&[]).expect("render");
        assert!(tree.cells().is_empty());
        let row = &tree.children()[0].children()[0];
        assert_eq!(
            row,
            &Fragment::Row {
                class: "row".into(),
                children: vec![],
            }
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let entries = [entry("ok"), entry("   ")];
        assert_eq!(
            render_with_defaults(&entries),
            Err(RenderError::EmptyTitle { index: 1 })
        );
    }

    #[test]
    fn unicode_whitespace_title_is_rejected() {
        let entries = [entry("\u{a0}\u{3000}")];
        assert_eq!(
            render_with_defaults(&entries),
            Err(RenderError::EmptyTitle { index: 0 })
        );
    }

    #[test]
    fn explicit_key_colliding_with_index_is_rejected() {
        let entries = [
            FeatureEntry {
                key: Some("1"),
                ..entry("first")
            },
            entry("second"),
        ];
        assert_eq!(
            render_with_defaults(&entries),
            Err(RenderError::DuplicateKey {
                index: 1,
                key: "1".into(),
            })
        );
    }

    #[test]
    fn repeated_explicit_keys_are_rejected() {
        let entries = [
            FeatureEntry {
                key: Some("caching"),
                ..entry("Caching")
            },
            FeatureEntry {
                key: Some("caching"),
                ..entry("More caching")
            },
        ];
        assert!(matches!(
            render_with_defaults(&entries),
            Err(RenderError::DuplicateKey { index: 1, .. })
        ));
    }

    #[test]
    fn blank_explicit_key_is_rejected() {
        let entries = [
            entry("first"),
            FeatureEntry {
                key: Some(" "),
                ..entry("second")
            },
        ];
        assert_eq!(
            render_with_defaults(&entries),
            Err(RenderError::BlankKey {
                index: 1,
                title: "second".into(),
            })
        );
    }

    #[test]
    fn empty_description_is_rejected() {
        let entries = [FeatureEntry {
            description: &[],
            ..entry("Caching")
        }];
        assert_eq!(
            render_with_defaults(&entries),
            Err(RenderError::EmptyDescription {
                index: 0,
                title: "Caching".into(),
            })
        );
    }

    #[test]
    fn link_without_target_is_rejected() {
        let entries = [FeatureEntry {
            description: &[Inline::Link {
                text: "risor",
                href: "",
            }],
            ..entry("Composable")
        }];
        assert!(matches!(
            render_with_defaults(&entries),
            Err(RenderError::EmptyLinkTarget { index: 0, .. })
        ));
    }

    #[test]
    fn link_keeps_text_and_target() {
        let tree = render_with_defaults(&FEATURE_LIST[..1]).expect("render");
        let link = tree
            .descendants()
            .into_iter()
            .find(|node| matches!(node, Fragment::Link { .. }))
            .cloned();
        assert_eq!(
            link,
            Some(Fragment::Link {
                href: "https://risor.io/".into(),
                text: "risor".into(),
            })
        );
    }

    #[test]
    fn inline_kinds_map_to_fragments() {
        let tree = render_with_defaults(&FEATURE_LIST[1..]).expect("render");
        let body = card_body(tree.cells()[0]);
        let paragraph = &body.children()[1];
        assert_eq!(
            paragraph.children()[0],
            Fragment::Emphasis {
                text: "Make".into()
            }
        );
        let caching = card_body(tree.cells()[1]);
        assert!(caching.children()[1].children().contains(&Fragment::Code {
            text: "yabs".into()
        }));
    }

    #[test]
    fn missing_icon_renders_no_icon_block() {
        let tree = render_with_defaults(&[entry("Caching")]).expect("render");
        let cell = tree.cells()[0];
        assert_eq!(icons(cell), 0);
        assert_eq!(cell.children().len(), 1);
    }

    #[test]
    fn present_icon_renders_once_before_heading() {
        let entries = [FeatureEntry {
            icon: Some(MOUNTAIN),
            ..entry("Composable")
        }];
        let tree = render_with_defaults(&entries).expect("render");
        let cell = tree.cells()[0];
        assert_eq!(icons(cell), 1);

        let order: Vec<_> = cell
            .descendants()
            .into_iter()
            .filter_map(|node| match node {
                Fragment::Icon { .. } => Some("icon"),
                Fragment::Heading { .. } => Some("heading"),
                _ => None,
            })
            .collect();
        assert_eq!(order, ["icon", "heading"]);
        assert_eq!(
            cell.children()[0],
            Fragment::Block {
                class: "text--center".into(),
                children: vec![Fragment::Icon {
                    class: "featureSvg".into(),
                    src: "undraw_docusaurus_mountain.svg".into(),
                    alt: "mountain".into(),
                }],
            }
        );
    }

    #[test]
    fn unresolved_icon_is_omitted() {
        let styles = InfimaStyles::default();
        let assets = AssetManifest::with_available("/img/", ["undraw_docusaurus_tree.svg"]);
        let entries = [FeatureEntry {
            icon: Some(MOUNTAIN),
            ..entry("Composable")
        }];
        let tree =
            render_features(&entries, RenderContext::new(&styles, &assets)).expect("render");
        assert_eq!(icons(tree.cells()[0]), 0);
        assert_eq!(tree.headings(), ["Composable"]);
    }

    #[test]
    fn injected_styles_reach_the_tree() {
        let styles: HashMap<StyleKey, String> = HashMap::from([
            (StyleKey::Features, "features_abc".to_string()),
            (StyleKey::Column, "cell".to_string()),
        ]);
        let assets = AssetManifest::default();
        let tree = render_features(&FEATURE_LIST[..1], RenderContext::new(&styles, &assets))
            .expect("render");

        match &tree {
            Fragment::Section { class, .. } => assert_eq!(class, "features_abc"),
            other => panic!("expected section, got {other:?}"),
        }
        match tree.cells()[0] {
            Fragment::Cell { class, .. } => assert_eq!(class, "cell"),
            other => panic!("expected cell, got {other:?}"),
        }
    }

    #[test]
    fn default_cells_span_four_columns() {
        let tree = render_with_defaults(FEATURE_LIST).expect("render");
        for cell in tree.cells() {
            match cell {
                Fragment::Cell { class, .. } => assert_eq!(class, "col col--4"),
                _ => unreachable!(),
            }
        }
    }
}
