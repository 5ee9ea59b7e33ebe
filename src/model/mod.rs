//! Domain model for the navigation shell.
//!
//! Types here carry no behavior beyond construction, conversion, and
//! serialization; all transitions live in [`crate::state`].

pub mod error;
pub mod selection;
pub mod sidebar;
pub mod style;

pub use error::AppError;
pub use selection::SearchSelection;
pub use sidebar::{SidebarState, COLLAPSED_SIDE_WIDTH, ICON_FOLD, ICON_UNFOLD};
pub use style::{StyleObject, StyleValue};
