//! Host binding layer.
//!
//! The host UI wires callbacks declaratively: each operation is registered
//! under a `(namespace, name)` pair and invoked with positional JSON
//! arguments, returning positional JSON outputs in the declared order. This
//! module models that contract explicitly so the core never depends on any
//! particular UI framework.
//!
//! Dispatch never panics: a malformed event yields a [`BindingError`] the
//! driver reports in-band, keeping one bad event from breaking the loop for
//! the rest of the page.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::config::CoreConfig;
use crate::model::{SidebarState, StyleObject};
use crate::state::{handle_focus_shortcut, handle_sidebar_toggle};

/// Namespace all core callbacks are registered under.
pub const CORE_NAMESPACE: &str = "nav";

/// Registered name of the sidebar toggle callback.
pub const CB_SIDEBAR_TOGGLE: &str = "sidebar_toggle";

/// Registered name of the search-selection callback.
pub const CB_SEARCH_SELECT: &str = "search_select";

/// Registered name of the focus-shortcut callback.
pub const CB_SEARCH_FOCUS: &str = "search_focus";

/// Errors surfaced by the dispatch boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// No callback registered under the requested pair.
    #[error("No callback registered for {namespace}.{name}")]
    UnknownCallback {
        /// Requested namespace.
        namespace: String,
        /// Requested callback name.
        name: String,
    },

    /// Event carried the wrong number of positional arguments.
    #[error("{namespace}.{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Namespace of the callback.
        namespace: String,
        /// Name of the callback.
        name: String,
        /// Declared arity.
        expected: usize,
        /// Arguments actually supplied.
        got: usize,
    },

    /// A positional argument could not be decoded to the declared type.
    #[error("Invalid argument {index} for {namespace}.{name}: expected {expected}")]
    InvalidArgument {
        /// Namespace of the callback.
        namespace: String,
        /// Name of the callback.
        name: String,
        /// Zero-based argument position.
        index: usize,
        /// Human-readable expected type.
        expected: &'static str,
    },
}

/// Result of one dispatched callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Positional outputs in the registered order.
    pub outputs: Vec<Value>,
    /// Full-page navigation requested by the callback, if any.
    ///
    /// The callback itself stays pure; the shell performs the navigation
    /// after dispatch returns.
    pub navigate: Option<String>,
}

type BoundCallback =
    Box<dyn Fn(&[Value]) -> Result<DispatchOutcome, BindingError> + Send + Sync>;

struct Registration {
    arity: usize,
    callback: BoundCallback,
}

/// Registry mapping `(namespace, name)` pairs to bound callbacks.
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: HashMap<(String, String), Registration>,
}

impl CallbackRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback under `namespace.name` with a fixed arity.
    ///
    /// Re-registering the same pair replaces the previous callback; the host
    /// binds each pair exactly once.
    pub fn register<F>(&mut self, namespace: &str, name: &str, arity: usize, callback: F)
    where
        F: Fn(&[Value]) -> Result<DispatchOutcome, BindingError> + Send + Sync + 'static,
    {
        self.callbacks.insert(
            (namespace.to_string(), name.to_string()),
            Registration {
                arity,
                callback: Box::new(callback),
            },
        );
    }

    /// Dispatch one event to its registered callback.
    pub fn dispatch(
        &self,
        namespace: &str,
        name: &str,
        args: &[Value],
    ) -> Result<DispatchOutcome, BindingError> {
        let registration = self
            .callbacks
            .get(&(namespace.to_string(), name.to_string()))
            .ok_or_else(|| BindingError::UnknownCallback {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })?;

        if args.len() != registration.arity {
            return Err(BindingError::ArityMismatch {
                namespace: namespace.to_string(),
                name: name.to_string(),
                expected: registration.arity,
                got: args.len(),
            });
        }

        (registration.callback)(args)
    }

    /// Whether a callback is registered under the pair.
    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.callbacks
            .contains_key(&(namespace.to_string(), name.to_string()))
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether the registry has no callbacks.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

fn invalid_argument(name: &str, index: usize, expected: &'static str) -> BindingError {
    BindingError::InvalidArgument {
        namespace: CORE_NAMESPACE.to_string(),
        name: name.to_string(),
        index,
        expected,
    }
}

/// Register the three core callbacks under the [`CORE_NAMESPACE`].
///
/// Declared contracts, positional on both sides:
///
/// - `nav.sidebar_toggle(n_clicks, icon_id, header_side_style)` →
///   `[icon_id, header_side_style, title_style, menu_style, collapsed]`
/// - `nav.search_select(value)` → `[]`, plus a navigation request when a
///   value is present
/// - `nav.search_focus(press_count)` → `[focus, press_count_string]`
pub fn register_core_callbacks(registry: &mut CallbackRegistry, config: CoreConfig) {
    registry.register(CORE_NAMESPACE, CB_SIDEBAR_TOGGLE, 3, move |args| {
        // The host reports null before the first click; the count is a pure
        // trigger either way.
        let n_clicks = match &args[0] {
            Value::Null => 0,
            other => other
                .as_u64()
                .ok_or_else(|| invalid_argument(CB_SIDEBAR_TOGGLE, 0, "click count"))?,
        };
        let icon_id = args[1]
            .as_str()
            .ok_or_else(|| invalid_argument(CB_SIDEBAR_TOGGLE, 1, "icon identifier string"))?;
        let header_style: StyleObject = serde_json::from_value(args[2].clone())
            .map_err(|_| invalid_argument(CB_SIDEBAR_TOGGLE, 2, "style object"))?;

        let toggle = handle_sidebar_toggle(
            n_clicks,
            SidebarState::from_icon_id(icon_id),
            &header_style,
            &config,
        );

        Ok(DispatchOutcome {
            outputs: vec![
                Value::from(toggle.state.icon_id()),
                serde_json::to_value(&toggle.header_side_style)
                    .unwrap_or_else(|_| Value::Object(Default::default())),
                serde_json::to_value(&toggle.title_style)
                    .unwrap_or_else(|_| Value::Object(Default::default())),
                serde_json::to_value(&toggle.menu_style)
                    .unwrap_or_else(|_| Value::Object(Default::default())),
                Value::from(toggle.collapsed),
            ],
            navigate: None,
        })
    });

    registry.register(CORE_NAMESPACE, CB_SEARCH_SELECT, 1, |args| {
        // Null means "nothing selected", same as the empty string.
        let value = match &args[0] {
            Value::Null => None,
            Value::String(s) => Some(s.as_str()),
            _ => {
                return Err(invalid_argument(CB_SEARCH_SELECT, 0, "selection string"));
            }
        };

        let mut nav = crate::state::RecordingNavigator::default();
        crate::state::handle_search_select(value, &mut nav);

        Ok(DispatchOutcome {
            outputs: vec![],
            navigate: nav.requests.into_iter().next(),
        })
    });

    registry.register(CORE_NAMESPACE, CB_SEARCH_FOCUS, 1, |args| {
        let presses = args[0]
            .as_i64()
            .ok_or_else(|| invalid_argument(CB_SEARCH_FOCUS, 0, "press counter"))?;

        let trigger = handle_focus_shortcut(presses);

        Ok(DispatchOutcome {
            outputs: vec![Value::from(trigger.focus), Value::from(trigger.presses)],
            navigate: None,
        })
    });
}

// ===== Tests =====

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
