//! Sidebar layout state.
//!
//! The host UI encodes this state as an icon identifier string (the icon both
//! displays the state and feeds the next transition). Internally we use an
//! explicit two-variant enum and convert at the binding boundary.

use serde::{Deserialize, Serialize};

/// Icon identifier shown while the sidebar is expanded ("click to fold").
pub const ICON_FOLD: &str = "antd-menu-fold";

/// Icon identifier shown while the sidebar is collapsed ("click to unfold").
pub const ICON_UNFOLD: &str = "antd-menu-unfold";

/// Pixel width of the collapsed sidebar rail.
pub const COLLAPSED_SIDE_WIDTH: u32 = 110;

/// The two mutually exclusive layout states of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SidebarState {
    /// Full-width sidebar with the title label visible.
    Expanded,
    /// Narrow rail with the title label hidden.
    Collapsed,
}

impl SidebarState {
    /// Decode the state from the host's icon identifier.
    ///
    /// Only the fold icon is recognized as `Expanded`; any other identifier
    /// (including the unfold icon) maps to `Collapsed`. This fail-open default
    /// means an unrecognized icon always takes the expand transition next,
    /// matching the host UI's established behavior.
    pub fn from_icon_id(icon: &str) -> Self {
        if icon == ICON_FOLD {
            SidebarState::Expanded
        } else {
            SidebarState::Collapsed
        }
    }

    /// The icon identifier the host should display for this state.
    pub fn icon_id(self) -> &'static str {
        match self {
            SidebarState::Expanded => ICON_FOLD,
            SidebarState::Collapsed => ICON_UNFOLD,
        }
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        }
    }

    /// Whether the sidebar is collapsed in this state.
    pub fn is_collapsed(self) -> bool {
        matches!(self, SidebarState::Collapsed)
    }
}
