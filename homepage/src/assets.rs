//! Icon asset resolution.
//!
//! Icons are decorative: one that cannot be resolved is dropped from its
//! card, it never fails the render.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::types::Icon;

/// Resolves an [`Icon`] reference to a concrete `src`.
pub trait AssetLookup {
    /// Concrete source for `icon`, or `None` if the asset is unavailable.
    fn resolve(&self, icon: &Icon) -> Option<String>;
}

/// Base URL plus an optional allow-list of published asset names.
///
/// Without an allow-list every icon resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Prefix joined with the icon's `src` (e.g. `/img/`)
    pub base_url: String,
    /// Asset names known to exist
    pub available: Option<BTreeSet<String>>,
}

impl AssetManifest {
    /// Manifest that only resolves the listed asset names.
    pub fn with_available<I, S>(base_url: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            available: Some(names.into_iter().map(Into::into).collect()),
        }
    }
}

impl AssetLookup for AssetManifest {
    fn resolve(&self, icon: &Icon) -> Option<String> {
        match &self.available {
            Some(available) if !available.contains(icon.src) => None,
            _ => Some(format!("{}{}", self.base_url, icon.src)),
        }
    }
}
