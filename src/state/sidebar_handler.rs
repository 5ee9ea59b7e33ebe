//! Sidebar collapse/expand transition (pure).
//!
//! A deterministic two-state toggle. Each invocation derives the next icon
//! state plus the three dependent style objects and the collapsed flag from
//! the current state, the caller's header-side style, and the configured
//! expanded width.

use crate::config::CoreConfig;
use crate::model::{SidebarState, StyleObject, COLLAPSED_SIDE_WIDTH};

/// Output tuple of one sidebar toggle, in the order the host binding applies
/// the properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarToggle {
    /// Next sidebar state (the host renders its icon via
    /// [`SidebarState::icon_id`]).
    pub state: SidebarState,
    /// Header-side container style: the caller's style with only `width`
    /// overridden.
    pub header_side_style: StyleObject,
    /// Header title style: hidden while collapsed, host defaults otherwise.
    pub title_style: StyleObject,
    /// Side menu container style: just the new width.
    pub menu_style: StyleObject,
    /// Collapse flag for the host's menu component.
    pub collapsed: bool,
}

/// Toggle the sidebar between its two layout states.
///
/// `n_clicks` is the host's click counter; it only triggers the callback and
/// never affects the branch taken. The header-side style is merged
/// non-destructively: any unrelated property the caller set survives.
pub fn handle_sidebar_toggle(
    _n_clicks: u64,
    current: SidebarState,
    header_side_style: &StyleObject,
    config: &CoreConfig,
) -> SidebarToggle {
    match current {
        SidebarState::Expanded => SidebarToggle {
            state: SidebarState::Collapsed,
            header_side_style: header_side_style.with_width(COLLAPSED_SIDE_WIDTH),
            title_style: StyleObject::hidden(),
            menu_style: StyleObject::width_only(COLLAPSED_SIDE_WIDTH),
            collapsed: true,
        },
        SidebarState::Collapsed => SidebarToggle {
            state: SidebarState::Expanded,
            header_side_style: header_side_style.with_width(config.side_width),
            title_style: StyleObject::empty(),
            menu_style: StyleObject::width_only(config.side_width),
            collapsed: false,
        },
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "sidebar_handler_tests.rs"]
mod tests;
