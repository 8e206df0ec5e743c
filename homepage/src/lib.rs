//! # yabs-homepage
//!
//! The feature grid on the yabs documentation homepage, rendered with
//! [Leptos](https://leptos.dev/) server-side rendering.
//!
//! A static, ordered list of features is mapped by a pure function into a
//! markup-independent [`Fragment`] tree, which Leptos then turns into
//! static HTML. Class names come from an injected
//! [`StyleResolver`](styles::StyleResolver), icons from an injected
//! [`AssetLookup`](assets::AssetLookup).
//!
//! ## Quick Start
//!
//! ```rust
//! use yabs_homepage::homepage_features_html;
//!
//! let html = homepage_features_html();
//! assert!(html.contains("Composable"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Feature entries and inline description nodes
//! - [`registry`] - The shipped feature list
//! - [`render`] - Grid renderer (entries to fragment tree)
//! - [`fragment`] - The fragment tree
//! - [`styles`] - Style keys, resolvers and CSS
//! - [`assets`] - Icon asset resolution
//! - [`config`] - `homepage.toml` loading
//! - [`components`] - Leptos components
//!
//! Data flows one way: registry → renderer → fragment → HTML.

pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod fragment;
pub mod registry;
pub mod render;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use components::{PreviewDocument, fragment_view};
use config::HomepageConfig;
pub use error::RenderError;
pub use fragment::Fragment;
use registry::FEATURE_LIST;
use render::{RenderContext, render_features};
use types::FeatureEntry;

/// Render `entries` to an HTML fragment (the `<section>` element).
///
/// # Example
///
/// ```rust
/// use yabs_homepage::{render_features_html, registry::FEATURE_LIST};
/// use yabs_homepage::assets::AssetManifest;
/// use yabs_homepage::render::RenderContext;
/// use yabs_homepage::styles::InfimaStyles;
///
/// let styles = InfimaStyles::default().with_cells_per_row(2);
/// let assets = AssetManifest::default();
/// let html = render_features_html(FEATURE_LIST, RenderContext::new(&styles, &assets)).unwrap();
/// assert!(html.contains("col col--6"));
/// ```
pub fn render_features_html(
    entries: &[FeatureEntry],
    ctx: RenderContext<'_>,
) -> Result<String, RenderError> {
    let fragment = render_features(entries, ctx)?;
    Ok(fragment_view(fragment).to_html())
}

/// The shipped feature list as an HTML fragment, with default styles.
///
/// Never fails: an error is logged and an empty string returned so the
/// hosting page still renders.
pub fn homepage_features_html() -> String {
    let config = HomepageConfig::default();
    let styles = config.styles();
    render_features_html(FEATURE_LIST, RenderContext::new(&styles, &config.assets))
        .unwrap_or_else(|err| {
            tracing::error!(%err, "homepage features not rendered");
            String::new()
        })
}

/// A standalone HTML page showing the shipped feature list.
///
/// Uses the styles, assets and stylesheets from `config`.
///
/// # Example
///
/// ```rust
/// use yabs_homepage::{config::HomepageConfig, render_preview_page};
///
/// let html = render_preview_page(&HomepageConfig::default()).unwrap();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_preview_page(config: &HomepageConfig) -> Result<String, RenderError> {
    let styles = config.styles();
    let fragment = render_features(FEATURE_LIST, RenderContext::new(&styles, &config.assets))?;

    let doc = view! {
        <PreviewDocument
            fragment=fragment
            title="yabs"
            stylesheets=config.stylesheets.clone()
        />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", doc.to_html()))
}
