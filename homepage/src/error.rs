//! Precondition failures raised by the grid renderer.

use thiserror::Error;

/// A malformed [`crate::types::FeatureEntry`] reached render time.
///
/// The shipped registry is checked at compile time, so these only surface
/// for entries built outside [`crate::registry`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Title is empty or whitespace.
    #[error("feature #{index} has a blank title")]
    EmptyTitle { index: usize },
    /// Description has no inline nodes.
    #[error("feature #{index} ({title:?}) has an empty description")]
    EmptyDescription { index: usize, title: String },
    /// A link node has no target.
    #[error("feature #{index} ({title:?}) contains a link without a target")]
    EmptyLinkTarget { index: usize, title: String },
    /// An explicit key is empty or whitespace.
    #[error("feature #{index} ({title:?}) has a blank key")]
    BlankKey { index: usize, title: String },
    /// Two entries share a rendering identity.
    #[error("feature #{index} repeats rendering identity {key:?}")]
    DuplicateKey { index: usize, key: String },
}
