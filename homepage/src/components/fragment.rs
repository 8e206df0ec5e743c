//! Fragment tree to Leptos views

use leptos::prelude::*;

use crate::fragment::Fragment;

/// Renders a fragment subtree.
#[component]
pub fn FragmentView(fragment: Fragment) -> impl IntoView {
    fragment_view(fragment)
}

/// Converts one fragment (and its children) into a view.
///
/// Cells expose their rendering identity as `data-key`.
pub fn fragment_view(fragment: Fragment) -> AnyView {
    match fragment {
        Fragment::Section { class, children } => view! {
            <section class=class>{children_view(children)}</section>
        }
        .into_any(),
        Fragment::Container { class, children }
        | Fragment::Row { class, children }
        | Fragment::Block { class, children } => view! {
            <div class=class>{children_view(children)}</div>
        }
        .into_any(),
        Fragment::Cell {
            key,
            class,
            children,
        } => view! {
            <div class=class data-key=key>{children_view(children)}</div>
        }
        .into_any(),
        Fragment::Icon { class, src, alt } => view! {
            <img class=class src=src alt=alt role="img" />
        }
        .into_any(),
        Fragment::Heading { text } => view! { <h3>{text}</h3> }.into_any(),
        Fragment::Paragraph { children } => view! { <p>{children_view(children)}</p> }.into_any(),
        Fragment::Text { text } => text.into_any(),
        Fragment::Link { href, text } => view! { <a href=href>{text}</a> }.into_any(),
        Fragment::Emphasis { text } => view! { <em>{text}</em> }.into_any(),
        Fragment::Code { text } => view! { <code>{text}</code> }.into_any(),
    }
}

fn children_view(children: Vec<Fragment>) -> Vec<AnyView> {
    children.into_iter().map(fragment_view).collect()
}
