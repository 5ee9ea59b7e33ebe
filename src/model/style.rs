//! Inline style objects exchanged with the host UI.
//!
//! The host owns these objects; the controllers only read one and produce a
//! new one. Merges are non-destructive: overriding `width` must leave every
//! other caller-set property untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the sidebar containers carry their pixel width.
const WIDTH_KEY: &str = "width";

/// A single CSS-like style value.
///
/// The untagged representation keeps the JSON shape the host expects:
/// numbers stay numbers (`"width": 110`) and keywords stay strings
/// (`"display": "none"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A pixel dimension.
    Px(u32),
    /// A CSS keyword such as `none` or `red`.
    Keyword(String),
}

impl From<u32> for StyleValue {
    fn from(px: u32) -> Self {
        StyleValue::Px(px)
    }
}

impl From<&str> for StyleValue {
    fn from(kw: &str) -> Self {
        StyleValue::Keyword(kw.to_string())
    }
}

/// An open property-name → value mapping owned by the host UI.
///
/// `BTreeMap` keeps serialization order deterministic, which the snapshot-y
/// assertions in the dispatch tests rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject(BTreeMap<String, StyleValue>);

impl StyleObject {
    /// An empty style object (all properties at host defaults).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Style that hides an element entirely.
    pub fn hidden() -> Self {
        let mut map = BTreeMap::new();
        map.insert("display".to_string(), StyleValue::from("none"));
        Self(map)
    }

    /// Style carrying only a pixel width.
    pub fn width_only(px: u32) -> Self {
        let mut map = BTreeMap::new();
        map.insert(WIDTH_KEY.to_string(), StyleValue::Px(px));
        Self(map)
    }

    /// Shallow merge: this style with `width` overridden to `px`.
    ///
    /// Every other property survives unchanged; no other key is read or
    /// written.
    pub fn with_width(&self, px: u32) -> Self {
        let mut merged = self.clone();
        merged.0.insert(WIDTH_KEY.to_string(), StyleValue::Px(px));
        merged
    }

    /// Set an arbitrary property, returning the updated object.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a property by name.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// The pixel width, if one is set.
    pub fn width(&self) -> Option<u32> {
        match self.0.get(WIDTH_KEY) {
            Some(StyleValue::Px(px)) => Some(*px),
            _ => None,
        }
    }

    /// Number of properties set on this object.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
