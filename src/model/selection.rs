//! Search selection values.
//!
//! The host's search box reports a chosen result as a single composite string
//! `"<pathname>|<label>"`. Only the pathname segment is meaningful to the
//! navigation core; the label exists for display in the dropdown.

/// A parsed search selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSelection {
    /// Navigation target path, the segment before the first `|`.
    pub pathname: String,
    /// Human-readable label, the remainder after the first `|` (if any).
    pub label: Option<String>,
}

impl SearchSelection {
    /// Parse a raw selection value.
    ///
    /// Returns `None` for an empty value (nothing selected). A value without
    /// a `|` delimiter is the single-segment case: the whole string is the
    /// pathname and there is no label.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        match value.split_once('|') {
            Some((pathname, label)) => Some(Self {
                pathname: pathname.to_string(),
                label: Some(label.to_string()),
            }),
            None => Some(Self {
                pathname: value.to_string(),
                label: None,
            }),
        }
    }
}
