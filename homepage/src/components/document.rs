//! Standalone preview page

use leptos::prelude::*;

use super::FragmentView;
use crate::fragment::Fragment;
use crate::styles::FEATURES_CSS;

/// A complete HTML page wrapping a rendered feature section.
#[component]
pub fn PreviewDocument(
    fragment: Fragment,
    /// Page title
    #[prop(into)]
    title: String,
    /// External stylesheets (e.g. the site's Infima build)
    #[prop(optional)]
    stylesheets: Vec<String>,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                {stylesheets
                    .into_iter()
                    .map(|href| view! { <link rel="stylesheet" href=href /> })
                    .collect::<Vec<_>>()}
                <style>{FEATURES_CSS}</style>
            </head>
            <body>
                <main>
                    <FragmentView fragment=fragment />
                </main>
            </body>
        </html>
    }
}
