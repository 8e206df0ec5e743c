//! Feature grid components

use leptos::prelude::*;

use super::fragment_view;
use crate::config::HomepageConfig;
use crate::registry::FEATURE_LIST;
use crate::render::{RenderContext, render_features};
use crate::types::FeatureEntry;

/// Feature grid for an arbitrary entry list.
///
/// A malformed entry is logged and the grid renders nothing, so the rest of
/// the page is unaffected.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn FeatureGrid(
    entries: &'static [FeatureEntry],
    /// Styles and assets; defaults apply when omitted
    #[prop(optional)]
    config: Option<HomepageConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let styles = config.styles();
    let ctx = RenderContext::new(&styles, &config.assets);

    match render_features(entries, ctx) {
        Ok(fragment) => fragment_view(fragment),
        Err(err) => {
            tracing::error!(%err, "feature grid not rendered");
            view! {}.into_any()
        }
    }
}

/// The homepage feature section with the shipped feature list.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! { <FeatureGrid entries=FEATURE_LIST /> }
}
