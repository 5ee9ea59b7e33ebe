//! navshell
//!
//! UI-state controllers for a dashboard's navigation shell: sidebar
//! collapse/expand, search-driven navigation, and a focus-shortcut trigger.
//!
//! The crate follows a Pure Core / Impure Shell architecture: every state
//! transition in [`state`] is a pure function, the [`binding`] registry models
//! the host framework's positional callback contract, and the only side
//! effects (navigation, logging) flow through injected collaborators.

pub mod binding;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
