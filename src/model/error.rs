//! Error types for the navigation shell.
//!
//! A small hierarchy built on `thiserror`. Domain errors compose into
//! [`AppError`] via `From`, so startup code propagates with `?`.
//!
//! Dispatch-time failures are deliberately non-fatal: the event-dispatch
//! boundary is owned by the host, and an escaped panic there would break
//! reactivity for unrelated components. Binding errors are therefore caught,
//! logged, and reported in-band by the driver loop.

use thiserror::Error;

use crate::binding::BindingError;
use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error for startup and the driver loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read, parsed, or validated.
    ///
    /// Fatal at startup: running with an invalid side width would propagate a
    /// nonsense width into every expand transition.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A dispatched event could not be routed or decoded.
    ///
    /// Non-fatal: the driver reports the failure for the offending event and
    /// keeps serving subsequent events.
    #[error("Dispatch error: {0}")]
    Binding(#[from] BindingError),

    /// Tracing subscriber initialization failed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// I/O failure on the driver's stdin/stdout streams.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_error_converts_to_app_error() {
        let err = BindingError::UnknownCallback {
            namespace: "nav".to_string(),
            name: "missing".to_string(),
        };
        let app: AppError = err.into();
        let msg = app.to_string();
        assert!(msg.contains("Dispatch error"));
        assert!(msg.contains("nav"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn config_error_converts_to_app_error() {
        let err = ConfigError::InvalidSideWidth { value: 0 };
        let app: AppError = err.into();
        assert!(app.to_string().contains("Configuration error"));
    }

    #[test]
    fn io_error_converts_to_app_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let app: AppError = io.into();
        let msg = app.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("pipe broken"));
    }
}
