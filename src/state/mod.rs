//! UI state transitions (pure).
//!
//! Both controllers run to completion synchronously inside the host's
//! event-dispatch callback; everything here is a pure function testable
//! without a host UI. The one outward side effect (navigation) goes through
//! the [`Navigator`] seam.

pub mod search_nav_handler;
pub mod sidebar_handler;

// Re-export for convenience
pub use search_nav_handler::{
    handle_focus_shortcut, handle_search_select, FocusTrigger, Navigator, RecordingNavigator,
};
pub use sidebar_handler::{handle_sidebar_toggle, SidebarToggle};
