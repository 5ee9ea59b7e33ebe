//! Tracing subscriber initialization and message filtering.
//!
//! Logs are written to a file instead of the host UI's console. The noisy
//! framework-warning class the dashboard used to silence by patching the
//! global error logger is handled here by an injectable [`MessageFilter`]
//! layer installed at subscriber construction; no global is ever mutated.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Marker substring identifying the host framework's warning spam.
pub const WARNING_MARKER: &str = "Warning:";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Whether a log message belongs to the suppressed framework-warning class.
///
/// The rule is exactly "contains the substring `Warning:`"; severity and
/// origin are not consulted.
pub fn is_framework_warning(message: &str) -> bool {
    message.contains(WARNING_MARKER)
}

/// Layer that drops events whose message matches a predicate.
///
/// When the predicate returns `true` for an event's `message` field, the
/// event is discarded before any downstream layer records it. Events without
/// a `message` field always pass.
pub struct MessageFilter<F> {
    suppress: F,
}

impl<F> MessageFilter<F>
where
    F: Fn(&str) -> bool,
{
    /// Create a filter from a suppression predicate.
    pub fn new(suppress: F) -> Self {
        Self { suppress }
    }
}

impl MessageFilter<fn(&str) -> bool> {
    /// The shell's standard filter: suppress framework warning spam.
    pub fn suppress_framework_warnings() -> Self {
        Self::new(is_framework_warning)
    }
}

impl<S, F> Layer<S> for MessageFilter<F>
where
    S: Subscriber,
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
        let mut visitor = MessageExtractor::default();
        event.record(&mut visitor);
        match visitor.message {
            Some(message) => !(self.suppress)(&message),
            None => true,
        }
    }
}

/// Field visitor that captures only the conventional `message` field.
#[derive(Default)]
struct MessageExtractor {
    message: Option<String>,
}

impl Visit for MessageExtractor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Logs are written to a file for users to monitor with `tail -f`. Respects
/// RUST_LOG environment variable, defaults to "info" level. The framework
/// warning filter is installed ahead of the writer, so suppressed events are
/// never forwarded.
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the subscriber was already initialized, the
/// path is unusable, or directory creation failed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    // Create log directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    // Respect RUST_LOG, default to "info"
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(MessageFilter::suppress_framework_warnings())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false), // No ANSI colors in log files
        )
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
