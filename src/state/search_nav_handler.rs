//! Search-driven navigation and the focus-shortcut trigger.
//!
//! Two unrelated but co-located behaviors of the shell's search box. The
//! navigation side effect goes through the [`Navigator`] seam so the core
//! stays pure and the host (or a test) decides what "navigate" means.

use crate::model::SearchSelection;

/// Collaborator that performs a full-page navigation.
///
/// The production implementation lives in the host shell; tests use
/// [`RecordingNavigator`].
pub trait Navigator {
    /// Replace the current location's path with `pathname`.
    ///
    /// Whether the target route exists is the receiving page's concern, not
    /// the navigator's.
    fn navigate(&mut self, pathname: &str);
}

/// Test navigator that records every requested pathname.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    /// Pathnames in request order.
    pub requests: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, pathname: &str) {
        self.requests.push(pathname.to_string());
    }
}

/// Handle a chosen search result.
///
/// A present value is parsed as `"<pathname>|<label>"` and the pathname is
/// handed to the navigator; an absent or empty value does nothing. Returns
/// the selection that was navigated to, if any.
pub fn handle_search_select(
    value: Option<&str>,
    navigator: &mut dyn Navigator,
) -> Option<SearchSelection> {
    let selection = SearchSelection::parse(value?)?;
    navigator.navigate(&selection.pathname);
    Some(selection)
}

/// Output of one focus-shortcut press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrigger {
    /// Constant trigger signal; downstream watchers observe the change, the
    /// value itself carries no state.
    pub focus: bool,
    /// The press counter restringified, so the downstream property differs on
    /// every invocation even though `focus` does not.
    pub presses: String,
}

/// Handle one firing of the search-focus key combination.
///
/// Accepts any counter value, including zero and negative; the counter is
/// only echoed back, never interpreted.
pub fn handle_focus_shortcut(press_count: i64) -> FocusTrigger {
    FocusTrigger {
        focus: true,
        presses: press_count.to_string(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_nav_handler_tests.rs"]
mod tests;
