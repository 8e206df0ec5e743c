//! Leptos components for the homepage feature grid.
//!
//! # Component Hierarchy
//!
//! ```text
//! PreviewDocument (standalone page)
//! └── FeatureGrid / HomepageFeatures
//!     └── FragmentView (recursive over the fragment tree)
//! ```
//!
//! # Usage
//!
//! Hosts normally mount [`HomepageFeatures`]; other entry lists go through
//! [`FeatureGrid`]:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use yabs_homepage::components::HomepageFeatures;
//!
//! view! {
//!     <main>
//!         <HomepageFeatures />
//!     </main>
//! }
//! ```

mod document;
mod features;
mod fragment;

pub use document::PreviewDocument;
pub use features::{FeatureGrid, HomepageFeatures};
pub use fragment::{FragmentView, fragment_view};
